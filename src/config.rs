use std::env;
use thiserror::Error;

pub const DEFAULT_MONGO_URL: &str = "mongodb://localhost:27017/";
pub const DEFAULT_DB_NAME: &str = "beat_db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// # Service Configuration
///
/// Runtime settings read from the process environment (after `.env` has been
/// loaded by the binary).
///
/// ## Variables
/// - `MONGO_URL`: document store connection string
/// - `DB_NAME`: database holding the `status_checks` collection
/// - `CORS_ORIGINS`: comma-separated origin allow-list, `*` for any origin
/// - `HOST` / `PORT`: listen address of the HTTP server
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mongo_url: String,
    pub db_name: String,
    pub cors_origins: Vec<String>,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            mongo_url: lookup("MONGO_URL").unwrap_or_else(|| DEFAULT_MONGO_URL.to_string()),
            db_name: lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            cors_origins: parse_origins(&lookup("CORS_ORIGINS").unwrap_or_else(|| "*".to_string())),
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    /// True when the allow-list contains the `*` wildcard.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongo_url: DEFAULT_MONGO_URL.to_string(),
            db_name: DEFAULT_DB_NAME.to_string(),
            cors_origins: vec!["*".to_string()],
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
