//! Domain validation errors.

use thiserror::Error;

/// Errors raised when a domain value object rejects its input.
///
/// Construction is the only validation gate, so these are the only
/// failures the contact model can produce.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    #[error("Name cannot be empty")]
    InvalidName,

    /// The provided phone number is not exactly 10 digits.
    #[error("Phone number must be 10 digits: {0}")]
    InvalidPhone(String),

    /// The provided birthday is not a valid DD.MM.YYYY date.
    #[error("Invalid date format. Use DD.MM.YYYY: {0}")]
    InvalidDate(String),
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ValidationError::InvalidName.to_string(), "Name cannot be empty");

        let err = ValidationError::InvalidPhone("12345".to_string());
        assert_eq!(err.to_string(), "Phone number must be 10 digits: 12345");

        let err = ValidationError::InvalidDate("2000-01-01".to_string());
        assert!(err.to_string().contains("DD.MM.YYYY"));
        assert!(err.to_string().contains("2000-01-01"));
    }
}
