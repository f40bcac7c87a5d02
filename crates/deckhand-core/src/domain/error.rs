// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::profiles::PlatformProfile;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid application descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Compatibility Errors
    // ========================================================================
    #[error("Language {value} was not one of the valid languages: {}", supported.join(", "))]
    UnsupportedPlatform {
        value: String,
        supported: Vec<&'static str>,
    },
}

impl DomainError {
    /// Build an [`DomainError::UnsupportedPlatform`] listing every platform
    /// that has a deployment routine.
    pub fn unsupported_platform(value: impl Into<String>) -> Self {
        Self::UnsupportedPlatform {
            value: value.into(),
            supported: PlatformProfile::SUPPORTED
                .iter()
                .map(|p| p.as_str())
                .collect(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDescriptor(msg) => vec![
                "Check the application descriptor JSON/YAML".into(),
                format!("Details: {}", msg),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Add '{}' to the application descriptor", field),
            ],
            Self::UnsupportedPlatform { value, supported } => {
                let mut out = vec![
                    format!("'{}' has no deployment configuration", value),
                    "Supported backend platforms:".into(),
                ];
                out.extend(supported.iter().map(|p| format!("  • {p}")));
                out.push("Try: deckhand platforms".into());
                out
            }
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDescriptor(_) | Self::MissingRequiredField { .. } => {
                ErrorCategory::Validation
            }
            Self::UnsupportedPlatform { .. } => ErrorCategory::Compatibility,
            Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    Internal,
}
