mod compare;
mod health;
mod upload;
mod upload_page;

pub use compare::{CompareRequest, CompareResponse, compare_handler};
pub use health::health_handler;
pub use upload::{CV_FIELD_NAME, UploadResponse, upload_cv_handler};
pub use upload_page::upload_page_handler;
