use std::sync::Arc;

use crate::application::ports::{ComparisonClient, ComparisonClientError};
use crate::domain::SubmissionFields;

/// Builds the comparison prompt from a normalized submission and forwards it
/// to the text-comparison collaborator.
pub struct ComparisonService<C>
where
    C: ComparisonClient,
{
    client: Arc<C>,
}

impl<C> ComparisonService<C>
where
    C: ComparisonClient,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn compare(
        &self,
        fields: &SubmissionFields,
        pdf_text: &str,
    ) -> Result<String, ComparisonError> {
        let prompt = build_prompt(fields, pdf_text);

        let reply = self.client.complete(&prompt).await?;

        tracing::info!(
            matched = reply_signals_match(&reply),
            reply_chars = reply.len(),
            "Comparison reply received"
        );

        Ok(reply)
    }
}

fn build_prompt(fields: &SubmissionFields, pdf_text: &str) -> String {
    format!(
        "Compare the following user-submitted form info and the extracted PDF content.\n\
         If they match, say \"Success\". If not, explain what doesn't match.\n\
         \n\
         Form:\n\
         Name: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Skills: {}\n\
         Experience: {}\n\
         \n\
         CV Content:\n\
         {}",
        fields.full_name, fields.email, fields.phone, fields.skills, fields.experience, pdf_text
    )
}

/// Convention of the comparison service: a case-insensitive "success"
/// substring in the reply signals a match. Free text, not a structured
/// boolean, is the contract callers must honor.
pub fn reply_signals_match(reply: &str) -> bool {
    reply.to_lowercase().contains("success")
}

#[derive(Debug, thiserror::Error)]
pub enum ComparisonError {
    #[error("comparison client: {0}")]
    Client(#[from] ComparisonClientError),
}
