mod comparison_service;
mod submission_service;

pub use comparison_service::{ComparisonError, ComparisonService, reply_signals_match};
pub use submission_service::{SubmissionError, SubmissionService};
