use async_trait::async_trait;

use crate::application::ports::{TextExtractor, TextExtractorError};

/// PDF text extraction over an in-memory buffer. The document is never
/// staged on disk; parsing runs on the blocking pool so CPU-bound work does
/// not stall other requests sharing the runtime.
#[derive(Default)]
pub struct PdfTextAdapter;

impl PdfTextAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextExtractor for PdfTextAdapter {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract(&self, data: &[u8]) -> Result<String, TextExtractorError> {
        let buffer = data.to_vec();

        let text = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&buffer)
        })
        .await
        .map_err(|e| {
            TextExtractorError::UnparsableDocument(format!("extraction task failed: {e}"))
        })?
        .map_err(|e| TextExtractorError::UnparsableDocument(e.to_string()))?;

        tracing::info!(extracted_chars = text.len(), "PDF text extraction complete");

        Ok(text)
    }
}
