use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ComparisonClient, TextExtractor};
use crate::domain::SubmissionFields;
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub fields: SubmissionFields,
    #[serde(rename = "pdfText", default)]
    pub pdf_text: String,
}

#[derive(Serialize)]
pub struct CompareResponse {
    pub reply: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Comparison endpoint: forwards the normalized record to the
/// text-comparison service and relays its free-text reply.
#[tracing::instrument(skip(state, request))]
pub async fn compare_handler<E, C>(
    State(state): State<AppState<E, C>>,
    Json(request): Json<CompareRequest>,
) -> impl IntoResponse
where
    E: TextExtractor + 'static,
    C: ComparisonClient + 'static,
{
    tracing::debug!(
        full_name = %sanitize_for_log(&request.fields.full_name),
        pdf_chars = request.pdf_text.len(),
        "Processing comparison request"
    );

    match state
        .comparison_service
        .compare(&request.fields, &request.pdf_text)
        .await
    {
        Ok(reply) => {
            tracing::debug!(reply = %sanitize_for_log(&reply), "Comparison successful");
            (StatusCode::OK, Json(CompareResponse { reply })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Comparison request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Comparison failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
