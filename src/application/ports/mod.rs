mod comparison_client;
mod repository_error;
mod submission_repository;
mod text_extractor;

pub use comparison_client::{ComparisonClient, ComparisonClientError};
pub use repository_error::RepositoryError;
pub use submission_repository::SubmissionRepository;
pub use text_extractor::{TextExtractor, TextExtractorError};
