//! Process configuration read from the environment.
//!
//! `.env` is loaded by `main` before this runs, so values there and real
//! environment variables are treated the same.

use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{key} is not valid: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Server settings. Identity-provider settings live in
/// `services::identity::IdentityConfig`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load from `DATABASE_URL`, `PORT`, `UPLOAD_DIR`, `MAX_UPLOAD_BYTES`.
    ///
    /// # Errors
    ///
    /// Returns an error when `DATABASE_URL` is unset or a numeric value
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let upload_dir = lookup("UPLOAD_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR), PathBuf::from);
        let max_upload_bytes = parse_or("MAX_UPLOAD_BYTES", lookup("MAX_UPLOAD_BYTES"), DEFAULT_MAX_UPLOAD_BYTES)?;

        Ok(Self { database_url, port, upload_dir, max_upload_bytes })
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
