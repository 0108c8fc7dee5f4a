use std::env;

use anyhow::Context;
use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    /// Backend base URL including its `/api` prefix.
    pub backend_url: String,
    /// Where the dashboard surface is mounted.
    pub api_prefix: String,

    // Logging
    pub log_dir: String,
    pub log_level: tracing::Level,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "debug".to_string());

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".to_string()),
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/dashboard".to_string()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
            log_level: log_level
                .parse()
                .with_context(|| format!("LOG_LEVEL must be a tracing level, got {log_level:?}"))?,
        })
    }
}
