//! Form Controller - owns the registration form and drives submission.
//!
//! One submission attempt:
//! 1. Intercept the submit event (no native navigation)
//! 2. Validate the full snapshot against the rule table
//! 3. On success, hand the validated input to the sink, then reset
//! 4. On failure, keep values and show the new error set

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{FormRenderer, SubmissionSink},
    domain::{
        Field, FieldValue, FormState, RegistrationInput, ValidationErrors, ValidationPolicy,
        Validator,
    },
    error::SignupResult,
};

/// A submit request coming from the render surface.
///
/// The controller always calls [`prevent_default`](Self::prevent_default):
/// submission never falls through to a native page reload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Result of a submission attempt that reached a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the sink accepted the input; the form is reset.
    Submitted(RegistrationInput),
    /// Validation failed; values are untouched and these errors are shown.
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

/// Owner of the form state.
///
/// All mutation goes through `&mut self`, so events are applied strictly in
/// call order and no one else can touch the state.
pub struct FormController {
    state: FormState,
    validator: Validator,
    sink: Box<dyn SubmissionSink>,
}

impl FormController {
    /// Create an empty form that submits into `sink`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use signup_core::application::FormController;
    /// use signup_core::domain::{Field, ValidationPolicy};
    ///
    /// let mut form = FormController::new(sink, ValidationPolicy::default());
    /// form.field_change(Field::Name, "Alice")?;
    /// ```
    pub fn new(sink: Box<dyn SubmissionSink>, policy: ValidationPolicy) -> Self {
        Self::with_validator(sink, Validator::new(policy))
    }

    pub fn with_validator(sink: Box<dyn SubmissionSink>, validator: Validator) -> Self {
        Self {
            state: FormState::new(),
            validator,
            sink,
        }
    }

    /// Record a change event for `field`.
    ///
    /// Fails only when the value kind does not fit the field (text sent to
    /// the checkbox or the reverse).
    pub fn field_change(&mut self, field: Field, value: impl Into<FieldValue>) -> SignupResult<()> {
        self.state.field_change(field, value)?;
        debug!(field = %field, "Field changed");
        Ok(())
    }

    /// Validate the current values without touching the displayed errors.
    pub fn validate(&self) -> Result<RegistrationInput, ValidationErrors> {
        self.validator.validate(self.state.values())
    }

    /// Run one submission attempt.
    ///
    /// Validation failures are a normal outcome (`Ok(Rejected)`). An `Err`
    /// means the sink failed after validation passed; the values are kept
    /// so the user can submit again.
    #[instrument(skip_all, fields(sink = self.sink.name(), attempt = self.state.submit_count() + 1))]
    pub fn submit(&mut self, event: &mut SubmitEvent) -> SignupResult<SubmitOutcome> {
        event.prevent_default();
        self.state.begin_submit();
        debug!(phase = %self.state.phase(), "Submission started");

        let validated = match self.validator.validate(self.state.values()) {
            Ok(valid) => valid,
            Err(errors) => {
                debug!(fields = ?errors.fields(), "Validation failed");
                self.state.apply_errors(errors.clone());
                self.state.finish_submit(false);
                return Ok(SubmitOutcome::Rejected(errors));
            }
        };

        self.state.apply_errors(ValidationErrors::new());

        if let Err(e) = self.sink.accept(&validated) {
            warn!(error = %e, "Sink rejected submission, keeping form values");
            self.state.finish_submit(false);
            return Err(e);
        }

        info!(submission = ?validated.redacted(), "Registration submitted");
        self.state.reset();
        self.state.finish_submit(true);
        Ok(SubmitOutcome::Submitted(validated))
    }

    /// Clear values, errors and dirty flags.
    pub fn reset(&mut self) {
        self.state.reset();
        debug!("Form reset");
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.validator.policy()
    }

    /// Render the current state through `renderer`.
    pub fn render(&self, renderer: &dyn FormRenderer) -> SignupResult<String> {
        renderer.render(&self.state)
    }
}
