use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::{info, instrument};

use crate::application::ports::RepositoryError;

/// Builds the process-wide connection pool without opening a connection.
/// Connections are established on first use, so an unreachable store at
/// startup degrades to failed (and logged) best-effort writes instead of
/// preventing the service from serving requests.
#[instrument(skip(url))]
pub fn create_lazy_pool(url: &str, max_connections: u32) -> Result<PgPool, RepositoryError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy(url)
        .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

    info!(max_connections, "PostgreSQL connection pool initialized");

    Ok(pool)
}
