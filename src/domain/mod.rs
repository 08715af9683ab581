mod submission;
mod submission_fields;

pub use submission::CvSubmission;
pub use submission_fields::SubmissionFields;
