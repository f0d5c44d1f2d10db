//! Plain-text form renderer.

use std::fmt::Write as _;

use signup_core::{
    application::{ApplicationError, ports::FormRenderer},
    domain::{Field, FieldKind, FormState},
    error::SignupResult,
};
use tracing::instrument;

const TITLE: &str = "Register";
const SUBMIT_LABEL: &str = "Register";

/// Renders the form as terminal text, one block per input:
///
/// ```text
/// Email *
///   > bad
///   ! Email address is invalid
/// ```
///
/// Password values are masked character by character. The helper line is
/// always emitted (blank when the field is valid) so the layout does not
/// jump between attempts.
#[derive(Debug, Clone, Copy)]
pub struct TextFormRenderer {
    mask: char,
}

impl TextFormRenderer {
    /// Create a new renderer masking with `*`.
    pub fn new() -> Self {
        Self { mask: '*' }
    }

    pub fn with_mask(mask: char) -> Self {
        Self { mask }
    }

    fn render_input(&self, out: &mut String, state: &FormState, field: Field) -> std::fmt::Result {
        let marker = if field.is_required() { " *" } else { "" };
        let values = state.values();

        match field.kind() {
            FieldKind::Checkbox => {
                let tick = if values.terms { 'x' } else { ' ' };
                writeln!(out, "[{tick}] {}{marker}", field.label())?;
            }
            FieldKind::Password => {
                let shown: String = values
                    .text(field)
                    .unwrap_or_default()
                    .chars()
                    .map(|_| self.mask)
                    .collect();
                writeln!(out, "{}{marker}", field.label())?;
                writeln!(out, "  > {shown}")?;
            }
            FieldKind::Text | FieldKind::Email => {
                writeln!(out, "{}{marker}", field.label())?;
                writeln!(out, "  > {}", values.text(field).unwrap_or_default())?;
            }
        }

        match state.errors().get(field) {
            Some(message) => writeln!(out, "  ! {message}"),
            None => writeln!(out),
        }
    }
}

impl Default for TextFormRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FormRenderer for TextFormRenderer {
    #[instrument(skip_all)]
    fn render(&self, state: &FormState) -> SignupResult<String> {
        self.write_form(state).map_err(|e| {
            ApplicationError::RenderingFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl TextFormRenderer {
    fn write_form(&self, state: &FormState) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        writeln!(out, "{TITLE}")?;
        writeln!(out)?;
        for field in Field::ALL {
            self.render_input(&mut out, state, field)?;
        }
        if state.is_loading() {
            writeln!(out, "[ {SUBMIT_LABEL} ... ]")?;
        } else {
            writeln!(out, "[ {SUBMIT_LABEL} ]")?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_core::domain::ValidationErrors;

    #[test]
    fn renders_every_input_and_submit() {
        let out = TextFormRenderer::new().render(&FormState::new()).unwrap();
        assert!(out.starts_with("Register\n"));
        for field in Field::ALL {
            assert!(out.contains(field.label()), "missing {field}");
        }
        assert!(out.contains("[ ] Accept Terms and Conditions *"));
        assert!(out.trim_end().ends_with("[ Register ]"));
    }

    #[test]
    fn masks_passwords() {
        let mut state = FormState::new();
        state.field_change(Field::Password, "hunter22").unwrap();
        let out = TextFormRenderer::new().render(&state).unwrap();
        assert!(out.contains("  > ********\n"));
        assert!(!out.contains("hunter22"));
    }

    #[test]
    fn shows_error_beneath_field() {
        let mut state = FormState::new();
        state.field_change(Field::Email, "bad").unwrap();
        let mut errors = ValidationErrors::new();
        errors.push(Field::Email, "Email address is invalid");
        state.apply_errors(errors);

        let out = TextFormRenderer::new().render(&state).unwrap();
        assert!(out.contains("Email *\n  > bad\n  ! Email address is invalid\n"));
        assert!(out.contains("Name *\n  > \n\n"));
    }

    #[test]
    fn custom_mask() {
        let mut state = FormState::new();
        state.field_change(Field::PasswordConfirm, "abc").unwrap();
        let out = TextFormRenderer::with_mask('#').render(&state).unwrap();
        assert!(out.contains("Confirm Password *\n  > ###\n"));
    }
}
