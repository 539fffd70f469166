//! Error types for bankweb-core
//!
//! The accordion, grouping and formatting code never fails; these errors
//! cover loading the catalog and looking things up in it.

use bankweb_loader::LoadError;
use thiserror::Error;
use serde::{Deserialize, Serialize};
use std::io;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product not found
    ProductNotFound,
    /// Accordion panel not found
    PanelNotFound,
    /// Product file could not be read or parsed
    LoadError,
    /// Product record rejected at ingestion
    ValidationError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::ProductNotFound => write!(f, "PRODUCT_NOT_FOUND"),
            ErrorCode::PanelNotFound => write!(f, "PANEL_NOT_FOUND"),
            ErrorCode::LoadError => write!(f, "LOAD_ERROR"),
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational
    Info,
    /// Warning - operation may be affected
    Warning,
    /// Error - operation failed
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Main error type for bankweb-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Product not found: {id}")]
    ProductNotFound { id: String },

    #[error("Accordion panel not found: {id}")]
    PanelNotFound { id: String },

    #[error("Load error: {message}")]
    LoadError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::ProductNotFound { .. } => ErrorCode::ProductNotFound,
            CoreError::PanelNotFound { .. } => ErrorCode::PanelNotFound,
            CoreError::LoadError { .. } => ErrorCode::LoadError,
            CoreError::ValidationError { .. } => ErrorCode::ValidationError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::ProductNotFound { .. } => ErrorSeverity::Info,
            CoreError::PanelNotFound { .. } => ErrorSeverity::Info,
            CoreError::LoadError { .. } => ErrorSeverity::Error,
            CoreError::ValidationError { .. } => ErrorSeverity::Warning,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(
            self.code(),
            self.to_string(),
        );

        match self {
            CoreError::ProductNotFound { id } => {
                details = details.with_suggestion(format!(
                    "Check if the product '{}' exists in your data files.", id
                ));
                details = details.with_suggestion(
                    "Use the /api/products endpoint to list all products.".to_string()
                );
            }
            CoreError::PanelNotFound { .. } => {
                details = details.with_suggestion(
                    "Panels are recreated on reload; refresh the page.".to_string()
                );
            }
            CoreError::LoadError { message } => {
                details = details.with_detail(serde_json::json!({ "load_message": message }));
                details = details.with_suggestion(
                    "Check that the product file is a JSON array or YAML sequence.".to_string()
                );
            }
            CoreError::ValidationError { message } => {
                details = details.with_detail(serde_json::json!({ "validation_message": message }));
                details = details.with_suggestion(
                    "Every product needs a non-empty id and a valid iban.".to_string()
                );
            }
        }

        details
    }
}

impl From<LoadError> for CoreError {
    fn from(error: LoadError) -> Self {
        match error {
            LoadError::ValidationError { .. } | LoadError::DuplicateId { .. } => {
                CoreError::ValidationError { message: error.to_string() }
            }
            LoadError::IoError(ref e) if e.kind() == io::ErrorKind::NotFound => {
                CoreError::LoadError { message: format!("product file not found: {}", e) }
            }
            other => CoreError::LoadError { message: other.to_string() },
        }
    }
}

/// Log an error with its code and details
pub fn log_error(operation: &str, error: &CoreError) {
    match error.severity() {
        ErrorSeverity::Info => log::info!(
            target: "bankweb::error",
            "[{}] {} - Operation: {}", error.code(), error, operation
        ),
        ErrorSeverity::Warning => log::warn!(
            target: "bankweb::error",
            "[{}] {} - Operation: {}", error.code(), error, operation
        ),
        ErrorSeverity::Error => log::error!(
            target: "bankweb::error",
            "{} - Operation: {}", error.to_details(), operation
        ),
    }
}

// ==================== Tests ====================
