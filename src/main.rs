use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use cvcheck::application::ports::SubmissionRepository;
use cvcheck::application::services::{ComparisonService, SubmissionService};
use cvcheck::infrastructure::llm::DeepSeekClient;
use cvcheck::infrastructure::observability::{TracingConfig, init_tracing};
use cvcheck::infrastructure::persistence::{PgSubmissionRepository, create_lazy_pool};
use cvcheck::infrastructure::text_extraction::PdfTextAdapter;
use cvcheck::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::from_env());

    let pool = create_lazy_pool(&settings.database.url, settings.database.max_connections)?;

    // Best-effort schema setup: the store is a non-blocking side effect, so
    // an unreachable database must not prevent startup.
    if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
        tracing::warn!(error = %e, "Database migrations skipped; submissions will not be stored until the store is reachable");
    }

    let repository: Arc<dyn SubmissionRepository> = Arc::new(PgSubmissionRepository::new(pool));
    let extractor = Arc::new(PdfTextAdapter::new());
    let comparison_client = Arc::new(DeepSeekClient::new(&settings.llm));

    let submission_service = Arc::new(SubmissionService::new(extractor, repository));
    let comparison_service = Arc::new(ComparisonService::new(comparison_client));

    let state = AppState {
        submission_service,
        comparison_service,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
