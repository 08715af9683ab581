use crate::application::ports::{RepositoryError, SubmissionRepository};
use crate::domain::CvSubmission;

/// Accepts every write.
pub struct MockSubmissionRepository;

#[async_trait::async_trait]
impl SubmissionRepository for MockSubmissionRepository {
    async fn create(&self, _submission: &CvSubmission) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// Rejects every write. Exercises the failure-isolation contract of the
/// persistence sink.
pub struct FailingSubmissionRepository;

#[async_trait::async_trait]
impl SubmissionRepository for FailingSubmissionRepository {
    async fn create(&self, _submission: &CvSubmission) -> Result<(), RepositoryError> {
        Err(RepositoryError::ConnectionFailed(
            "mock store unavailable".to_string(),
        ))
    }
}
