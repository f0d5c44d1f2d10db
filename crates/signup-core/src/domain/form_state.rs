//! Explicit form state.
//!
//! Holds the current draft, the displayed errors, dirty flags and the
//! submission phase. Every mutation is a small pure update; orchestration
//! (validate, call the sink, reset) lives in
//! [`FormController`](crate::application::FormController).

use std::collections::BTreeSet;
use std::fmt;

use crate::domain::{
    error::FormError,
    field::{Field, FieldValue},
    input::RegistrationInput,
    validation::ValidationErrors,
};

/// Where the form is within one submission attempt.
///
/// `Idle → Validating → Idle`: validation is synchronous, so callers only
/// ever observe `Idle` between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
}

impl fmt::Display for SubmitPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: RegistrationInput,
    errors: ValidationErrors,
    dirty: BTreeSet<Field>,
    phase: SubmitPhase,
    submit_count: u32,
    last_submit_successful: bool,
    loading: bool,
}

impl FormState {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change event and mark the field dirty.
    pub fn field_change(&mut self, field: Field, value: impl Into<FieldValue>) -> Result<(), FormError> {
        let value = value.into();
        value.check_kind(field)?;
        self.values.set(field, value);
        self.dirty.insert(field);
        Ok(())
    }

    /// Replace the displayed errors wholesale.
    pub fn apply_errors(&mut self, errors: ValidationErrors) {
        self.errors = errors;
    }

    /// Back to an empty form. Submission counters survive.
    pub fn reset(&mut self) {
        self.values = RegistrationInput::default();
        self.errors = ValidationErrors::default();
        self.dirty.clear();
        self.phase = SubmitPhase::Idle;
    }

    pub(crate) fn begin_submit(&mut self) {
        self.phase = SubmitPhase::Validating;
        self.submit_count = self.submit_count.saturating_add(1);
        self.last_submit_successful = false;
    }

    pub(crate) fn finish_submit(&mut self, successful: bool) {
        self.phase = SubmitPhase::Idle;
        self.last_submit_successful = successful;
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn values(&self) -> &RegistrationInput {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Message shown beneath `field`; empty when valid.
    pub fn error_for(&self, field: Field) -> &str {
        self.errors.message_or_empty(field)
    }

    pub fn is_dirty(&self, field: Field) -> bool {
        self.dirty.contains(&field)
    }

    pub fn any_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn is_submit_successful(&self) -> bool {
        self.last_submit_successful
    }

    /// Hook for an asynchronous submission path; nothing sets it today.
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_change_marks_dirty() {
        let mut state = FormState::new();
        assert!(!state.any_dirty());
        state.field_change(Field::Email, "a@b.com").unwrap();
        assert!(state.is_dirty(Field::Email));
        assert!(!state.is_dirty(Field::Name));
        assert_eq!(state.values().email, "a@b.com");
    }

    #[test]
    fn wrong_kind_leaves_state_untouched() {
        let mut state = FormState::new();
        assert!(state.field_change(Field::Terms, "yes").is_err());
        assert!(!state.any_dirty());
    }

    #[test]
    fn apply_errors_replaces_previous_set() {
        let mut state = FormState::new();
        let mut first = ValidationErrors::new();
        first.push(Field::Name, "a");
        state.apply_errors(first);

        let mut second = ValidationErrors::new();
        second.push(Field::Email, "b");
        state.apply_errors(second);

        assert_eq!(state.error_for(Field::Name), "");
        assert_eq!(state.error_for(Field::Email), "b");
    }

    #[test]
    fn reset_clears_values_errors_and_dirty() {
        let mut state = FormState::new();
        state.field_change(Field::Name, "Alice").unwrap();
        state.field_change(Field::Terms, true).unwrap();
        let mut errors = ValidationErrors::new();
        errors.push(Field::Email, "x");
        state.apply_errors(errors);

        state.reset();

        assert!(state.values().is_empty());
        assert!(state.errors().is_empty());
        assert!(!state.any_dirty());
    }

    #[test]
    fn loading_is_never_set() {
        let mut state = FormState::new();
        state.begin_submit();
        assert!(!state.is_loading());
        assert_eq!(state.phase(), SubmitPhase::Validating);
        state.finish_submit(true);
        assert!(!state.is_loading());
        assert_eq!(state.phase(), SubmitPhase::Idle);
        assert!(state.is_submit_successful());
        assert_eq!(state.submit_count(), 1);
    }
}
