use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{RepositoryError, SubmissionRepository};
use crate::domain::CvSubmission;

pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionRepository for PgSubmissionRepository {
    #[instrument(skip(self, submission))]
    async fn create(&self, submission: &CvSubmission) -> Result<(), RepositoryError> {
        // id and created_at are assigned by the store.
        sqlx::query(
            r#"
            INSERT INTO cv_uploads (full_name, email, phone, skills, experience, pdf_text)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&submission.fields.full_name)
        .bind(&submission.fields.email)
        .bind(&submission.fields.phone)
        .bind(&submission.fields.skills)
        .bind(&submission.fields.experience)
        .bind(&submission.pdf_text)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }
}

fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::Database(db) if db.constraint().is_some() => {
            RepositoryError::ConstraintViolation(e.to_string())
        }
        sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
            RepositoryError::ConnectionFailed(e.to_string())
        }
        _ => RepositoryError::QueryFailed(e.to_string()),
    }
}
