//! Error types for the address book.
//!
//! Validation failures of contact fields live in
//! [`crate::domain::ValidationError`]; this module holds the errors of the
//! surrounding runtime, currently configuration loading.

use thiserror::Error;

pub use crate::domain::{ValidationError, ValidationResult};

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
