use std::sync::Arc;

use crate::application::ports::{SubmissionRepository, TextExtractor, TextExtractorError};
use crate::domain::{CvSubmission, SubmissionFields};

/// Orchestrates the ingestion pipeline past decoding: extract text from the
/// buffered document, assemble the normalized record, and hand it to the
/// store without letting storage affect the outcome.
pub struct SubmissionService<E>
where
    E: TextExtractor,
{
    extractor: Arc<E>,
    repository: Arc<dyn SubmissionRepository>,
}

impl<E> SubmissionService<E>
where
    E: TextExtractor,
{
    pub fn new(extractor: Arc<E>, repository: Arc<dyn SubmissionRepository>) -> Self {
        Self {
            extractor,
            repository,
        }
    }

    pub async fn process(
        &self,
        fields: SubmissionFields,
        file: &[u8],
    ) -> Result<CvSubmission, SubmissionError> {
        let pdf_text = self.extractor.extract(file).await?;

        tracing::debug!(
            extracted_chars = pdf_text.len(),
            "Document text extraction complete"
        );

        let submission = CvSubmission::assemble(fields, pdf_text);
        self.persist_best_effort(submission.clone());

        Ok(submission)
    }

    /// Dispatches the store write without awaiting it. A failing or slow
    /// store never alters the response; the error is logged and discarded.
    fn persist_best_effort(&self, submission: CvSubmission) {
        let repository = Arc::clone(&self.repository);
        tokio::spawn(async move {
            match repository.create(&submission).await {
                Ok(()) => tracing::debug!("Submission stored"),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to store submission, continuing anyway")
                }
            }
        });
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("text extraction: {0}")]
    Extraction(#[from] TextExtractorError),
}
