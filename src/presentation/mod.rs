pub mod config;
pub mod handlers;
pub mod multipart;
pub mod router;
pub mod state;

pub use config::Settings;
pub use router::create_router;
pub use state::AppState;
