use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Deployment platform. Only `"dev"` unlocks destructive admin endpoints.
    pub platform: String,
    /// Directory served under `/app/`.
    pub filepath_root: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DB_URL")?,
            platform: std::env::var("PLATFORM").unwrap_or_default(),
            filepath_root: std::env::var("FILEPATH_ROOT").unwrap_or_else(|_| ".".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn is_dev(&self) -> bool {
        self.platform == "dev"
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
pub(crate) fn test_config(platform: &str, filepath_root: &str) -> Config {
    Config {
        database_url: "postgres://localhost/chirpy_test".to_string(),
        platform: platform.to_string(),
        filepath_root: filepath_root.to_string(),
        port: 8080,
        rust_log: "debug".to_string(),
    }
}
