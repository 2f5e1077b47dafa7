//! Application configuration
//!
//! Loaded once at startup from environment variables (a `.env` file is read
//! first when present).

use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_DATABASE_PATH: &str = "tasks.db";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file, or `:memory:`
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    /// Directory holding the built UI. Served for every non-API path when set.
    pub static_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: None,
        }
    }
}

impl AppConfig {
    /// Read `DATABASE_URL`, `APP_HOST`, `APP_PORT` and `STATIC_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source. Unset or empty keys use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match get("APP_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "APP_PORT".to_string(),
                message: format!("{raw:?} is not a port number ({e})"),
            })?,
            None => defaults.port,
        };

        Ok(Self {
            database_path: get("DATABASE_URL")
                .map(|url| database_path_from_url(&url))
                .unwrap_or(defaults.database_path),
            host: get("APP_HOST").unwrap_or(defaults.host),
            port,
            static_dir: get("STATIC_DIR").map(PathBuf::from),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Accepts a bare path or a `sqlite:` / `sqlite://` connection string.
fn database_path_from_url(url: &str) -> PathBuf {
    let path = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url);
    PathBuf::from(path)
}
