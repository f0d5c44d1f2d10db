//! In-memory sink adapter for testing.

use std::sync::{Arc, RwLock};

use signup_core::{
    application::{ApplicationError, ports::SubmissionSink},
    domain::RegistrationInput,
    error::SignupResult,
};

/// Records every accepted submission.
///
/// Clones share the same buffer, so a test can keep one handle and give
/// the other to the controller.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Arc<RwLock<MemorySinkInner>>,
}

#[derive(Debug, Default)]
struct MemorySinkInner {
    received: Vec<RegistrationInput>,
    fail_with: Option<String>,
}

impl MemorySink {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every `accept` fails with `reason` (testing helper).
    pub fn failing(reason: impl Into<String>) -> Self {
        let sink = Self::new();
        if let Ok(mut inner) = sink.inner.write() {
            inner.fail_with = Some(reason.into());
        }
        sink
    }

    /// Everything accepted so far, oldest first.
    pub fn received(&self) -> Vec<RegistrationInput> {
        self.inner
            .read()
            .map(|inner| inner.received.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.received.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all recorded submissions.
    pub fn clear(&self) -> SignupResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SinkLockError)?;
        inner.received.clear();
        Ok(())
    }
}

impl SubmissionSink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn accept(&self, input: &RegistrationInput) -> SignupResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SinkLockError)?;

        if let Some(reason) = &inner.fail_with {
            return Err(ApplicationError::SinkFailed {
                sink: "memory",
                reason: reason.clone(),
            }
            .into());
        }

        inner.received.push(input.clone());
        Ok(())
    }
}
