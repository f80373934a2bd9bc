//! # Error Types
//!
//! Structured error types for pythag_core. Every variant carries enough
//! context (which field, what value, why it was rejected) for a caller to
//! explain the problem without re-deriving it.
//!
//! ## Example
//!
//! ```rust
//! use pythag_core::errors::{CalcError, CalcResult};
//!
//! fn validate_side(side: f64) -> CalcResult<()> {
//!     if side <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "a".to_string(),
//!             value: side.to_string(),
//!             reason: "Sides must be positive numbers".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for pythag_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value violates a precondition (positivity, ordering)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A settings value is out of range
    #[error("Invalid setting '{key}': {reason}")]
    ConfigError { key: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// TOML/JSON serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config_error(key: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ConfigError {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for precondition violations on solver arguments
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<toml::de::Error> for CalcError {
    fn from(err: toml::de::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("known_leg", "6", "A leg must be shorter than the hypotenuse");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::invalid_input("a", "0", "Sides must be positive numbers");
        assert_eq!(error.to_string(), "Invalid input for 'a': 0 - Sides must be positive numbers");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_input("a", "-1", "x").error_code(), "INVALID_INPUT");
        assert_eq!(CalcError::config_error("tolerance", "x").error_code(), "CONFIG_ERROR");
        assert_eq!(CalcError::file_error("read", "a.toml", "x").error_code(), "FILE_ERROR");
        assert!(CalcError::invalid_input("a", "-1", "x").is_invalid_input());
        assert!(!CalcError::config_error("tolerance", "x").is_invalid_input());
    }

    #[test]
    fn test_toml_error_conversion() {
        let err: CalcError = toml::from_str::<toml::Value>("= broken").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
