use super::SubmissionFields;

/// A normalized CV submission: the coerced form fields merged with the text
/// extracted from the uploaded document. Immutable once assembled; this is
/// the unit handed to persistence and echoed in the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvSubmission {
    pub fields: SubmissionFields,
    pub pdf_text: String,
}

impl CvSubmission {
    pub fn assemble(fields: SubmissionFields, pdf_text: String) -> Self {
        Self { fields, pdf_text }
    }
}
