//! Configuration management for the address book.
//!
//! This module loads runtime settings from environment variables, reading an
//! optional `.env` file first. Every setting has a default, so an empty
//! environment is a valid configuration.

use crate::book::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Largest accepted birthday window: a full leap year.
pub const MAX_BIRTHDAY_WINDOW_DAYS: u64 = 366;

/// Configuration for the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Days ahead to look for birthdays (default: 7)
    pub birthday_window_days: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: Upcoming birthday window in days (default: 7, max: 366)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let birthday_window_days =
            Self::parse_env_u64("BIRTHDAY_WINDOW_DAYS", DEFAULT_BIRTHDAY_WINDOW_DAYS)?;

        if birthday_window_days > MAX_BIRTHDAY_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be at most {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            log_level: "info".to_string(),
        }
    }
}
