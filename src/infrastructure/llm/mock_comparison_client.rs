use crate::application::ports::{ComparisonClient, ComparisonClientError};

/// Always replies "Success".
pub struct MockComparisonClient;

#[async_trait::async_trait]
impl ComparisonClient for MockComparisonClient {
    async fn complete(&self, _prompt: &str) -> Result<String, ComparisonClientError> {
        Ok("Success".to_string())
    }
}

/// Always fails with an API error.
pub struct FailingComparisonClient;

#[async_trait::async_trait]
impl ComparisonClient for FailingComparisonClient {
    async fn complete(&self, _prompt: &str) -> Result<String, ComparisonClientError> {
        Err(ComparisonClientError::ApiRequestFailed(
            "mock failure".to_string(),
        ))
    }
}
