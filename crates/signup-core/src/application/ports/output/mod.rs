//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `signup-adapters` crate provides implementations.

use crate::domain::{FormState, RegistrationInput};
use crate::error::SignupResult;

/// Port for the collaborator that receives validated submissions.
///
/// Implemented by:
/// - `signup_adapters::sink::LogSink` (diagnostic output)
/// - `signup_adapters::sink::MemorySink` (testing)
/// - `signup_adapters::sink::JsonLinesSink` (append-only file)
///
/// ## Contract
///
/// - Called exactly once per successful submission
/// - Only after validation fully passed
/// - Receives the complete validated object
///
/// An `Err` means the sink could not record the submission (I/O, lock);
/// it is not a channel for backend-side rejections.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink: Send + Sync {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Record one validated submission.
    fn accept(&self, input: &RegistrationInput) -> SignupResult<()>;
}

/// Port for presenting the form.
///
/// Implemented by:
/// - `signup_adapters::renderer::TextFormRenderer` (terminal text)
pub trait FormRenderer: Send + Sync {
    /// Render every input with its current value and error message.
    fn render(&self, state: &FormState) -> SignupResult<String>;
}
