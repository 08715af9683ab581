mod mock_repository;
mod pg_pool;
mod pg_submission_repository;

pub use mock_repository::{FailingSubmissionRepository, MockSubmissionRepository};
pub use pg_pool::create_lazy_pool;
pub use pg_submission_repository::PgSubmissionRepository;
