//! `signup register`: fill the form and submit it.
//!
//! Responsibility: pick a sink, feed the inputs into a `FormController`
//! as change events, submit once and print the outcome. No validation
//! logic lives here.

use serde_json::json;
use tracing::{debug, instrument};

use signup_adapters::{JsonLinesSink, LogSink, TextFormRenderer};
use signup_core::{
    application::{FormController, SubmissionSink, SubmitEvent, SubmitOutcome},
    domain::RegistrationInput,
};

use crate::{
    cli::{RegisterArgs, SinkKind},
    commands::{fill_form, interactive, resolve_policy},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `signup register` command.
#[instrument(skip_all, fields(interactive = args.interactive))]
pub fn execute(args: RegisterArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let policy = resolve_policy(&config, &args.policy);
    let sink = build_sink(args.sink, args.out.clone(), &config)?;
    let sink_name = sink.name();
    debug!(sink = sink_name, terms = %policy.terms, locale = %policy.locale, "Form configured");

    let mut form = FormController::new(sink, policy);

    let outcome = if args.interactive {
        interactive::run(&mut form, &output)?
    } else {
        fill_form(&mut form, &args.form).with_cli_context(|| "filling the form")?;
        form.submit(&mut SubmitEvent::new())
            .with_cli_context(|| "submitting the form")?
    };

    match outcome {
        SubmitOutcome::Submitted(input) => {
            report_submitted(&input, sink_name, &output)?;
            if args.show_form && !output.is_json() {
                output.block(&form.render(&TextFormRenderer::new())?)?;
            }
            Ok(())
        }
        SubmitOutcome::Rejected(errors) => {
            if output.is_json() {
                output.json(&json!({ "submitted": false, "errors": &errors }))?;
            } else if !args.interactive {
                output.block(&form.render(&TextFormRenderer::new())?)?;
            }
            Err(CliError::ValidationFailed { errors })
        }
    }
}

fn report_submitted(
    input: &RegistrationInput,
    sink_name: &str,
    output: &OutputManager,
) -> CliResult<()> {
    if output.is_json() {
        output.json(&json!({
            "submitted": true,
            "sink": sink_name,
            "registration": input.redacted(),
        }))?;
    } else {
        output.success(&format!(
            "Registration submitted for {} <{}> ({} sink)",
            input.name, input.email, sink_name
        ))?;
    }
    Ok(())
}

/// Resolve the sink from `--sink`/`--out`, falling back to `[sink]` in the
/// config.
pub(crate) fn build_sink(
    kind: Option<SinkKind>,
    out: Option<std::path::PathBuf>,
    config: &AppConfig,
) -> CliResult<Box<dyn SubmissionSink>> {
    let kind = match kind {
        Some(kind) => kind,
        None => parse_sink_kind(&config.sink.kind)?,
    };

    match kind {
        SinkKind::Log => Ok(Box::new(LogSink::new())),
        SinkKind::JsonLines => {
            let path = out
                .or_else(|| config.sink.path.clone())
                .ok_or_else(|| CliError::ConfigError {
                    message: "The json-lines sink needs --out or sink.path".into(),
                    source: None,
                })?;
            Ok(Box::new(JsonLinesSink::new(path)))
        }
    }
}

fn parse_sink_kind(raw: &str) -> CliResult<SinkKind> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "log" => Ok(SinkKind::Log),
        "json-lines" | "jsonl" => Ok(SinkKind::JsonLines),
        other => Err(CliError::ConfigError {
            message: format!("Unknown sink kind '{other}' (expected log or json-lines)"),
            source: None,
        }),
    }
}
