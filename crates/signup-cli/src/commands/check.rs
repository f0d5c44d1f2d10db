//! `signup check`: validate inputs without submitting them.

use serde_json::json;
use tracing::instrument;

use signup_core::{application::FormController, domain::Field};

use signup_adapters::MemorySink;

use crate::{
    cli::CheckArgs,
    commands::{fill_form, resolve_policy},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `signup check` command.
///
/// The form is built on a throwaway memory sink and never submitted, so
/// nothing leaves the process. Exit status follows `register`: 0 when the
/// input is valid, 2 when any rule fails.
#[instrument(skip_all)]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let policy = resolve_policy(&config, &args.policy);
    let mut form = FormController::new(Box::new(MemorySink::new()), policy);
    fill_form(&mut form, &args.form).with_cli_context(|| "filling the form")?;

    match form.validate() {
        Ok(_) => {
            if output.is_json() {
                output.json(&json!({ "valid": true, "errors": {} }))?;
            } else {
                output.success("All fields are valid")?;
            }
            Ok(())
        }
        Err(errors) => {
            if output.is_json() {
                output.json(&json!({ "valid": false, "errors": &errors }))?;
            } else {
                for field in Field::ALL {
                    if let Some(message) = errors.get(field) {
                        output.error(&format!("{}: {}", field.label(), message))?;
                    }
                }
            }
            Err(CliError::ValidationFailed { errors })
        }
    }
}
