//! Application configuration loaded from environment variables.

use std::env;

use contents_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body.
    pub max_body_bytes: usize,
    /// `None` when `DB_NAME` is unset: the server then runs on the in-memory store.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup("DB_NAME").map(|name| DatabaseConfig {
            user: lookup("DB_USER").unwrap_or_default(),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            host: lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: lookup("DB_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(3306),
            name,
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            min_connections: lookup("DB_MIN_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
        });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            max_body_bytes: lookup("MAX_BODY_BYTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1024 * 1024),
            database,
        }
    }
}
