use async_trait::async_trait;

/// Opaque text-comparison collaborator. Given a fully built prompt it
/// returns the service's free-text reply.
#[async_trait]
pub trait ComparisonClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ComparisonClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ComparisonClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
