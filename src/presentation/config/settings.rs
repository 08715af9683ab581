use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub llm: LlmSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub chat_model: String,
    pub max_tokens: usize,
    pub temperature: f32,
}

impl Settings {
    /// Reads settings from the environment, falling back to local-dev
    /// defaults for everything but the comparison API key.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parse_or("SERVER_PORT", 3000),
            },
            database: DatabaseSettings {
                url: env_or("DATABASE_URL", "postgres://localhost:5432/cvcheck"),
                max_connections: env_parse_or("DATABASE_MAX_CONNECTIONS", 5),
            },
            llm: LlmSettings {
                api_key: std::env::var("DEEPSEEK_API_KEY").unwrap_or_default(),
                base_url: env_or("DEEPSEEK_BASE_URL", "https://api.deepseek.com/v1"),
                chat_model: env_or("DEEPSEEK_CHAT_MODEL", "deepseek-chat"),
                max_tokens: env_parse_or("LLM_MAX_TOKENS", 1024),
                temperature: env_parse_or("LLM_TEMPERATURE", 1.0),
            },
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
