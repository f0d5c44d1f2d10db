//! Diagnostic sink: surfaces the submission on the tracing stream.

use signup_core::{application::ports::SubmissionSink, domain::RegistrationInput, error::SignupResult};
use tracing::info;

/// Sink that only logs what it receives.
///
/// Passwords never reach the log; the event carries the redacted view.
#[derive(Debug, Clone, Copy)]
pub struct LogSink;

impl LogSink {
    /// Create a new log sink.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionSink for LogSink {
    fn name(&self) -> &'static str {
        "log"
    }

    fn accept(&self, input: &RegistrationInput) -> SignupResult<()> {
        let view = input.redacted();
        info!(
            target: "signup::submission",
            name = view.name,
            email = view.email,
            terms = view.terms,
            "Registration received"
        );
        Ok(())
    }
}
