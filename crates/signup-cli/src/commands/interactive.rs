//! Prompt-driven form filling for `signup register --interactive`.
//!
//! Every answer goes through `FormController::field_change`, so the form
//! behaves exactly as with flags. After a rejected submit the rendered
//! form is shown and the user is asked again; previous answers are offered
//! as defaults, passwords excepted.

use signup_core::application::{FormController, SubmitOutcome};

use crate::{error::CliResult, output::OutputManager};

#[cfg(feature = "interactive")]
pub fn run(form: &mut FormController, output: &OutputManager) -> CliResult<SubmitOutcome> {
    use dialoguer::{Confirm, Input, Password, theme::ColorfulTheme};
    use signup_adapters::TextFormRenderer;
    use signup_core::{application::SubmitEvent, domain::Field};

    use crate::error::{CliError, IntoCli};

    let theme = ColorfulTheme::default();
    let prompt_failed = |e: dialoguer::Error| {
        let io: std::io::Error = e.into();
        if io.kind() == std::io::ErrorKind::Interrupted {
            CliError::Cancelled
        } else {
            CliError::IoError {
                message: "Prompt failed".into(),
                source: io,
            }
        }
    };

    loop {
        for field in [Field::Name, Field::Email] {
            let previous = form.state().values().text(field).unwrap_or_default().to_owned();
            let value: String = Input::with_theme(&theme)
                .with_prompt(field.label())
                .with_initial_text(previous)
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_failed)?;
            form.field_change(field, value)
                .with_cli_context(|| "updating the form")?;
        }

        for field in [Field::Password, Field::PasswordConfirm] {
            let value = Password::with_theme(&theme)
                .with_prompt(field.label())
                .allow_empty_password(true)
                .interact()
                .map_err(prompt_failed)?;
            form.field_change(field, value)
                .with_cli_context(|| "updating the form")?;
        }

        let accepted = Confirm::with_theme(&theme)
            .with_prompt(Field::Terms.label())
            .default(form.state().values().terms)
            .interact()
            .map_err(prompt_failed)?;
        form.field_change(Field::Terms, accepted)
            .with_cli_context(|| "updating the form")?;

        match form
            .submit(&mut SubmitEvent::new())
            .with_cli_context(|| "submitting the form")?
        {
            SubmitOutcome::Submitted(input) => return Ok(SubmitOutcome::Submitted(input)),
            SubmitOutcome::Rejected(errors) => {
                output.block(&form.render(&TextFormRenderer::new())?)?;
                output.warning(&format!(
                    "{} field(s) need attention, try again",
                    errors.fields().len()
                ))?;

                let again = Confirm::with_theme(&theme)
                    .with_prompt("Edit and resubmit?")
                    .default(true)
                    .interact()
                    .map_err(prompt_failed)?;
                if !again {
                    return Ok(SubmitOutcome::Rejected(errors));
                }
            }
        }
    }
}

#[cfg(not(feature = "interactive"))]
pub fn run(_form: &mut FormController, _output: &OutputManager) -> CliResult<SubmitOutcome> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
