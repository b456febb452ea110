use std::{net::SocketAddr, path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_ACCESS_TOKEN_MINUTES: i64 = 15;
const DEFAULT_REFRESH_TOKEN_HOURS: i64 = 24;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_addr: SocketAddr,

    pub access_token_minutes: i64,
    pub refresh_token_hours: i64,

    /// Root directory for uploaded ride photos.
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,

    /// Fallback filter directive when `RUST_LOG` is unset.
    pub log_level: String,
    pub log_json: bool,
}

impl Config {
    /// Loads the configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_source(|name| std::env::var(name).ok())
    }

    /// Loads the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parsable
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is unset or empty
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A variable could not be parsed
    pub fn from_source<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            server_addr: parse_or(&lookup, "SERVER_ADDR", || {
                SocketAddr::from(([0, 0, 0, 0], 3003))
            })?,
            access_token_minutes: parse_or(&lookup, "JWT_ACCESS_TOKEN_EXPIRE_MINUTES", || {
                DEFAULT_ACCESS_TOKEN_MINUTES
            })?,
            refresh_token_hours: parse_or(&lookup, "JWT_REFRESH_TOKEN_EXPIRE_HOURS", || {
                DEFAULT_REFRESH_TOKEN_HOURS
            })?,
            upload_dir: lookup("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", || DEFAULT_MAX_UPLOAD_BYTES)?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_json: parse_or(&lookup, "LOG_JSON", || false)?,
        })
    }

    pub fn access_token_ttl(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.access_token_minutes)
    }

    pub fn refresh_token_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.refresh_token_hours)
    }
}

/// Parses an optional variable, using `default` when it is unset.
fn parse_or<T, F, D>(lookup: &F, name: &str, default: D) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
    D: FnOnce() -> T,
{
    match lookup(name) {
        None => Ok(default()),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
    }
}
