use async_trait::async_trait;

/// Converts a buffered binary document into plain text.
///
/// The returned text preserves the decoder's natural reading order and is
/// not post-processed; an empty string is a valid result for a document
/// with no extractable text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, data: &[u8]) -> Result<String, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("unparsable document: {0}")]
    UnparsableDocument(String),
}
