use crate::application::ports::{TextExtractor, TextExtractorError};

/// Treats the buffer as UTF-8 text. Useful for wiring tests without real
/// PDF fixtures.
pub struct MockTextExtractor;

#[async_trait::async_trait]
impl TextExtractor for MockTextExtractor {
    async fn extract(&self, data: &[u8]) -> Result<String, TextExtractorError> {
        String::from_utf8(data.to_vec())
            .map_err(|e| TextExtractorError::UnparsableDocument(e.to_string()))
    }
}
