//! Error types for bankweb-config

use std::io;
use thiserror::Error;

/// Why a configuration file could not be used
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Cannot read {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid YAML format: {message}")]
    InvalidYaml { message: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid field value: {field} - {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl ConfigError {
    /// Stable code for log lines
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::FileNotFound { .. } => "FILE_NOT_FOUND",
            ConfigError::Unreadable { .. } => "IO_ERROR",
            ConfigError::InvalidYaml { .. } => "INVALID_YAML",
            ConfigError::MissingField { .. } => "MISSING_FIELD",
            ConfigError::InvalidValue { .. } => "INVALID_VALUE",
            ConfigError::ValidationError { .. } => "VALIDATION_ERROR",
        }
    }

    /// What the user can do about it, when there is something to say
    pub fn hint(&self) -> Option<String> {
        match self {
            ConfigError::FileNotFound { .. } => {
                Some("Pass --config with the path of an existing file.".to_string())
            }
            ConfigError::Unreadable { .. } => None,
            ConfigError::InvalidYaml { .. } => {
                Some("Run `bankweb --print-default-config` for a valid template.".to_string())
            }
            ConfigError::MissingField { field } => Some(format!("Add '{}' to the config file.", field)),
            ConfigError::InvalidValue { field, .. } => {
                Some(format!("Fix '{}' or remove it to use the default.", field))
            }
            ConfigError::ValidationError { .. } => {
                Some("Use different characters for currency.thousands_separator and currency.decimal_separator.".to_string())
            }
        }
    }
}
