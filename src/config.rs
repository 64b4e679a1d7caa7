//! Environment-driven server configuration.

use std::env;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Configuration errors raised while reading the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `APP_PORT` was set but is not a valid port number.
    #[error("invalid APP_PORT value: {0}")]
    InvalidPort(String),
}

/// Server configuration resolved from the environment.
///
/// A missing `DATABASE_URL` selects the in-memory storage mode with seeded
/// demo data; setting it selects `PostgreSQL`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `PostgreSQL` connection string, when configured.
    pub database_url: Option<String>,
    /// Listen address.
    pub host: String,
    /// Listen port.
    pub port: u16,
}

impl AppConfig {
    /// Reads configuration from the environment, after loading `.env` if
    /// one is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `APP_PORT` does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        let host = env::var("APP_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned());
        let port = match env::var("APP_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Returns the socket address string to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
