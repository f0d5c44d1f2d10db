//! Application layer for Signup.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (FormController)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{FormController, SubmitEvent, SubmitOutcome};

// Re-export port traits (for adapter implementation)
pub use ports::{FormRenderer, SubmissionSink};

pub use error::ApplicationError;
