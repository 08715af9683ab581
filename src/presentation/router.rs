use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{ComparisonClient, TextExtractor};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    compare_handler, health_handler, upload_cv_handler, upload_page_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<E, C>(state: AppState<E, C>) -> Router
where
    E: TextExtractor + 'static,
    C: ComparisonClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(upload_page_handler))
        .route("/health", get(health_handler))
        .route("/api/upload-cv", post(upload_cv_handler::<E, C>))
        .route("/api/compare", post(compare_handler::<E, C>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
