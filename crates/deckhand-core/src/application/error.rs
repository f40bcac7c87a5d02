//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while generating artifacts.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A template or static asset is absent from the template root.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// Template syntax error or missing binding.
    #[error("Failed to render template {template}: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// A filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A shared store was poisoned.
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    pub fn filesystem(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::FilesystemError {
            path: path.into(),
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name } => vec![
                format!("'{}' is missing from the template directory", name),
                "Omit --templates to use the built-in templates".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Check the syntax of {}", template),
                "Every variable the template uses must be bound".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
