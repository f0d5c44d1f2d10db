//! Unified error handling for Signup Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{FormError, ValidationErrors};

/// Root error type for Signup Core operations.
#[derive(Debug, Error, Clone)]
pub enum SignupError {
    /// Errors from the domain layer (rule violations, misuse of the form).
    #[error("{0}")]
    Form(#[from] FormError),

    /// Errors from the application layer (sink or renderer failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SignupError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Form(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in Signup".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Form(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable without changing the input.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(
                ApplicationError::SinkFailed { .. }
                    | ApplicationError::SinkIo { .. }
                    | ApplicationError::SinkLockError
            )
        )
    }

    /// The field errors, when this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Form(FormError::Invalid(errors)) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for SignupError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Form(FormError::Invalid(errors))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type SignupResult<T> = Result<T, SignupError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> SignupResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> SignupResult<T> {
        self.map_err(|e| SignupError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Field;

    #[test]
    fn validation_errors_round_trip_through_signup_error() {
        let mut errors = ValidationErrors::new();
        errors.push(Field::Name, "Name is required");
        let err = SignupError::from(errors.clone());
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.validation_errors(), Some(&errors));
        assert!(!err.is_retryable());
    }

    #[test]
    fn sink_failures_are_retryable() {
        let err = SignupError::from(ApplicationError::SinkFailed {
            sink: "memory",
            reason: "closed".into(),
        });
        assert!(err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn form_error_category_passes_through() {
        let err = SignupError::from(FormError::UnknownLocale("fr".into()));
        assert_eq!(err.category(), ErrorCategory::Configuration);

        let err = SignupError::from(FormError::UnknownField("age".into()));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn context_wraps_foreign_errors() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = result.context("writing record").unwrap_err();
        assert!(err.to_string().contains("writing record: boom"));
    }
}
