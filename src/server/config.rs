//! Environment-based server configuration.

use crate::server::error::config::ConfigError;

/// Settings read from the environment at startup
pub struct Config {
    /// Postgres connection string
    pub database_url: String,
    /// Valkey connection string for the session store
    pub valkey_url: String,
    /// Public base URL sign-in links are built against, without a trailing slash
    pub app_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            app_url: required("APP_URL")?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
