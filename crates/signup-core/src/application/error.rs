//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `FormError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while handing a submission to the outside world.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The sink refused or failed to record the submission.
    #[error("Submission sink '{sink}' failed: {reason}")]
    SinkFailed { sink: &'static str, reason: String },

    /// Sink output file could not be opened or written.
    #[error("Sink I/O error at {path}: {reason}")]
    SinkIo { path: PathBuf, reason: String },

    /// Sink state access failed (lock poisoned, etc.).
    #[error("Submission sink lock poisoned")]
    SinkLockError,

    /// The form could not be rendered.
    #[error("Form rendering failed: {reason}")]
    RenderingFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SinkFailed { sink, .. } => vec![
                format!("The '{}' sink did not accept the submission", sink),
                "Your input was kept; submit again to retry".into(),
            ],
            Self::SinkIo { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::SinkLockError => vec!["Try again in a moment".into()],
            Self::RenderingFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SinkFailed { .. } | Self::SinkIo { .. } | Self::SinkLockError => {
                ErrorCategory::Internal
            }
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}
