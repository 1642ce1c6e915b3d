//! Service configuration parsed from environment variables.

use crate::error::TrackError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackConfig {
    /// Base URL of the maintenance backend that owns the ticket data.
    pub backend_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub port: u16,
}

impl TrackConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `TRACK_BACKEND_URL`
    ///
    /// Optional:
    /// - `TRACK_REQUEST_TIMEOUT_SECS`: default 30
    /// - `TRACK_CONNECT_TIMEOUT_SECS`: default 10
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::MissingBackendUrl`] when `TRACK_BACKEND_URL` is
    /// not set.
    pub fn from_env() -> Result<Self, TrackError> {
        let backend_url = std::env::var("TRACK_BACKEND_URL")
            .map_err(|_| TrackError::MissingBackendUrl { var: "TRACK_BACKEND_URL".into() })?
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            backend_url,
            request_timeout_secs: env_parse_u64("TRACK_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout_secs: env_parse_u64("TRACK_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
            port: env_parse_u16("PORT", DEFAULT_PORT),
        })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_parse_u16(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
