use async_trait::async_trait;

use crate::domain::CvSubmission;

use super::RepositoryError;

/// Create-only record sink for normalized submissions. The store assigns
/// the identifier and creation timestamp; the core never reads records back.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn create(&self, submission: &CvSubmission) -> Result<(), RepositoryError>;
}
