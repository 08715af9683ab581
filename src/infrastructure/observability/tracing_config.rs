use crate::presentation::config::Environment;

/// Logging shape, read once from the environment at startup.
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
}

impl TracingConfig {
    /// Reads `APP_ENV` and `LOG_FORMAT`. An unrecognized `APP_ENV` falls
    /// back to local; absent `LOG_FORMAT`, prod deployments default to
    /// JSON output.
    pub fn from_env() -> Self {
        let environment = std::env::var("APP_ENV")
            .ok()
            .and_then(|value| Environment::try_from(value).ok())
            .unwrap_or_default();

        let json_format = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or_else(|_| environment.is_prod());

        Self {
            environment,
            json_format,
        }
    }
}
