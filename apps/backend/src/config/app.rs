//! Application configuration loaded from environment variables.

use std::env;

use crate::domain::WinThreshold;
use crate::error::AppError;
use crate::middleware::cors::parse_origins;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
/// Request bodies here are tiny; 64 KiB is plenty.
pub const DEFAULT_MAX_JSON_PAYLOAD_SIZE: usize = 64 * 1024;

/// Centralized application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Game configuration
    pub initial_win_threshold: WinThreshold,

    // HTTP configuration
    pub max_json_payload_size: usize,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            initial_win_threshold: WinThreshold::default(),
            max_json_payload_size: DEFAULT_MAX_JSON_PAYLOAD_SIZE,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load and validate all configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SCOREBOARD_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("SCOREBOARD_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::config_with_source(
                    format!("SCOREBOARD_PORT must be a valid port number, got '{raw}'"),
                    e,
                )
            })?,
            None => DEFAULT_PORT,
        };

        let initial_win_threshold = match lookup("SCOREBOARD_WIN_THRESHOLD") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .and_then(|v| WinThreshold::new(v).ok())
                .ok_or_else(|| {
                    AppError::config(format!(
                        "SCOREBOARD_WIN_THRESHOLD must be a positive integer, got '{raw}'"
                    ))
                })?,
            None => WinThreshold::default(),
        };

        let max_json_payload_size = match lookup("MAX_JSON_PAYLOAD_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    AppError::config(format!(
                        "MAX_JSON_PAYLOAD_SIZE must be a positive byte count, got '{raw}'"
                    ))
                })?,
            None => DEFAULT_MAX_JSON_PAYLOAD_SIZE,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        Ok(Config {
            host,
            port,
            initial_win_threshold,
            max_json_payload_size,
            cors_allowed_origins,
        })
    }
}
