use axum::response::Html;

/// Serves the static upload form. The page submits the multipart body to
/// the ingestion endpoint, forwards the normalized record to the comparison
/// endpoint, and renders the match/mismatch verdict in a modal.
pub async fn upload_page_handler() -> Html<&'static str> {
    Html(include_str!("../../../assets/upload.html"))
}
