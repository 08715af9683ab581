use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{ComparisonClient, TextExtractor};
use crate::application::services::SubmissionError;
use crate::domain::SubmissionFields;
use crate::presentation::multipart::{decode_form, select_single_file};
use crate::presentation::state::AppState;

/// The multipart field name the document must arrive under.
pub const CV_FIELD_NAME: &str = "cv";

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub fields: SubmissionFields,
    #[serde(rename = "pdfText")]
    pub pdf_text: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal server error".to_string(),
        }),
    )
        .into_response()
}

/// Ingestion endpoint: decode the multipart body, select the single CV
/// part, coerce the form fields, extract the document text, and respond
/// with the normalized record. Persistence runs fire-and-forget and never
/// influences the response.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_cv_handler<E, C>(
    State(state): State<AppState<E, C>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
    C: ComparisonClient + 'static,
{
    // A body that is not multipart at all lands here, not in the decoder.
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(e) => {
            tracing::error!(error = %e, "Request body is not a multipart form");
            return internal_error();
        }
    };

    let form = match decode_form(&mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::error!(error = %e, "Failed to decode multipart body");
            return internal_error();
        }
    };

    let file = match select_single_file(&form, CV_FIELD_NAME) {
        Ok(part) => part,
        Err(e) => {
            tracing::warn!(error = %e, "CV file selection rejected");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(
        file_name = ?file.file_name,
        content_type = ?file.content_type,
        bytes = file.data.len(),
        "Processing CV upload"
    );

    let fields = SubmissionFields::coerce(&form.fields);

    match state.submission_service.process(fields, &file.data).await {
        Ok(submission) => {
            tracing::info!(
                extracted_chars = submission.pdf_text.len(),
                "CV uploaded and processed"
            );
            (
                StatusCode::OK,
                Json(UploadResponse {
                    message: "CV uploaded and processed!".to_string(),
                    fields: submission.fields,
                    pdf_text: submission.pdf_text,
                }),
            )
                .into_response()
        }
        Err(e @ SubmissionError::Extraction(_)) => {
            tracing::warn!(error = %e, "CV processing failed");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to parse PDF: {}", e),
                }),
            )
                .into_response()
        }
    }
}
