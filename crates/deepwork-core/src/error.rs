//! Core error types for deepwork-core.
//!
//! Every operation validates its arguments eagerly and reports failures
//! through [`ValidationError`], split into wrong runtime type and
//! disallowed value. Configuration loading has its own [`ConfigError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for deepwork-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Argument validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// The validation error behind this failure, if any.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            CoreError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The argument has the wrong runtime type
    #[error("{field} must be {expected}, got {found}")]
    InvalidType {
        field: String,
        expected: &'static str,
        found: String,
    },

    /// The argument has the right type but a disallowed value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    pub fn invalid_type(field: impl Into<String>, expected: &'static str, found: impl Into<String>) -> Self {
        ValidationError::InvalidType {
            field: field.into(),
            expected,
            found: found.into(),
        }
    }

    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending argument.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidType { field, .. } | ValidationError::InvalidValue { field, .. } => field,
        }
    }

    pub fn is_invalid_type(&self) -> bool {
        matches!(self, ValidationError::InvalidType { .. })
    }

    pub fn is_invalid_value(&self) -> bool {
        matches!(self, ValidationError::InvalidValue { .. })
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Config key does not exist
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Home directory could not be determined
    #[error("could not determine home directory")]
    NoHomeDir,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
