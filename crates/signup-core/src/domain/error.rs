// ============================================================================
// domain/error.rs - FORM DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::field::Field;
use crate::error::ErrorCategory;
use crate::domain::validation::ValidationErrors;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the form keeps the last failure around for display)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// One or more declarative rules were violated.
    #[error("Validation failed: {0}")]
    Invalid(ValidationErrors),

    // ========================================================================
    // Usage Errors (caller bugs, not user input)
    // ========================================================================
    #[error("Unknown form field: '{0}'")]
    UnknownField(String),

    #[error("Field '{field}' expects a {expected} value")]
    FieldKindMismatch {
        field: Field,
        expected: &'static str,
    },

    #[error("Unknown locale: '{0}'")]
    UnknownLocale(String),

    #[error("Unknown terms policy: '{0}'")]
    UnknownTermsPolicy(String),
}

impl FormError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Invalid(errors) => errors
                .iter()
                .map(|e| format!("{}: {}", e.field.label(), e.message))
                .collect(),
            Self::UnknownField(name) => vec![
                format!("'{}' is not a form field", name),
                "Known fields: name, email, password, passwordConfirm, terms".into(),
            ],
            Self::UnknownLocale(_) => vec!["Supported locales: en, ru".into()],
            Self::UnknownTermsPolicy(_) => vec!["Supported policies: advisory, required".into()],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Invalid(_) => ErrorCategory::Validation,
            Self::UnknownLocale(_) | Self::UnknownTermsPolicy(_) => ErrorCategory::Configuration,
            Self::UnknownField(_) | Self::FieldKindMismatch { .. } => ErrorCategory::Internal,
        }
    }
}
