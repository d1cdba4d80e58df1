//! Custom error types for Pocket Ledger
//!
//! Form validation never produces one of these: validation failures are
//! plain messages held by the form session (see `ledger::ValidationError`).
//! This hierarchy covers the ambient parts of the application: settings,
//! file I/O and logging.

use thiserror::Error;

/// The main error type for Pocket Ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Logging setup errors
    #[error("Logging error: {0}")]
    Logging(String),
}

impl LedgerError {
    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Pocket Ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("delimiter and separator are equal".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: delimiter and separator are equal"
        );
        assert!(err.is_config());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LedgerError = io_err.into();
        assert!(matches!(err, LedgerError::Io(_)));
        assert!(!err.is_config());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: LedgerError = json_err.into();
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
