use std::sync::Arc;

use crate::application::ports::{ComparisonClient, TextExtractor};
use crate::application::services::{ComparisonService, SubmissionService};

pub struct AppState<E, C>
where
    E: TextExtractor,
    C: ComparisonClient,
{
    pub submission_service: Arc<SubmissionService<E>>,
    pub comparison_service: Arc<ComparisonService<C>>,
}

impl<E, C> Clone for AppState<E, C>
where
    E: TextExtractor,
    C: ComparisonClient,
{
    fn clone(&self) -> Self {
        Self {
            submission_service: Arc::clone(&self.submission_service),
            comparison_service: Arc::clone(&self.comparison_service),
        }
    }
}
