//! Centralized error handling for folio
//!
//! This module provides a unified error handling approach using:
//! - `thiserror` for library-style errors with proper error types
//! - `anyhow` for application-level error handling with context
//!
//! The motion components never return errors. Everything here belongs to
//! the configuration layer and the contact form.
//!
//! # Usage
//!
//! ```rust
//! use folio_core::utils::error::{FolioResult, ResultExt};
//!
//! fn read_config(path: &str) -> FolioResult<String> {
//!     std::fs::read_to_string(path).with_file_context(path)
//! }
//! ```

use thiserror::Error;

/// Core errors that can occur in folio
#[derive(Error, Debug)]
pub enum FolioError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A form field failed validation
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The contact desk is still processing an earlier submission
    #[error("A submission is already in progress")]
    SubmissionInFlight,
}

/// Result type alias for folio operations
pub type FolioResult<T> = anyhow::Result<T>;

/// Extension trait for adding folio-specific context to errors
pub trait ResultExt<T> {
    /// Add file operation context to an error
    fn with_file_context(self, path: &str) -> FolioResult<T>;

    /// Add configuration context to an error
    fn with_config_context(self, setting: &str) -> FolioResult<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for Result<T, E> {
    fn with_file_context(self, path: &str) -> FolioResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("File operation failed: {}", path))
    }

    fn with_config_context(self, setting: &str) -> FolioResult<T> {
        use anyhow::Context;
        self.map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("Configuration error for: {}", setting))
    }
}

/// Helper to create a validation error
pub fn validation_error(field: &'static str, message: impl Into<String>) -> FolioError {
    FolioError::Validation {
        field,
        message: message.into(),
    }
}
