//! Error types for bankweb-loader

use thiserror::Error;
use std::io;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Syntax error at {location}: {message}")]
    SyntaxError {
        location: String,
        message: String,
    },

    #[error("Validation error at {location}, record {index}: {field} {reason}")]
    ValidationError {
        location: String,
        index: usize,
        field: String,
        reason: String,
    },

    #[error("Duplicate product id: {id}")]
    DuplicateId { id: String },

    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Invalid file pattern: {pattern}")]
    InvalidPattern { pattern: String },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl LoadError {
    /// Name of the offending field, for validation failures
    pub fn field(&self) -> Option<&str> {
        match self {
            LoadError::ValidationError { field, .. } => Some(field),
            _ => None,
        }
    }
}
