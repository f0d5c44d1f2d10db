//! Append-only JSON lines sink.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, instrument};
use uuid::Uuid;

use signup_core::{
    application::{ApplicationError, ports::SubmissionSink},
    domain::{RedactedInput, RegistrationInput},
    error::{Context, SignupError, SignupResult},
};

/// One line of the output file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord<'a> {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub input: RedactedInput<'a>,
}

impl<'a> SubmissionRecord<'a> {
    pub fn new(input: &'a RegistrationInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            input: input.redacted(),
        }
    }
}

/// Appends one JSON object per submission to a file.
///
/// The file and missing parent directories are created on first write.
/// Passwords are masked before anything touches disk.
#[derive(Debug, Clone)]
pub struct JsonLinesSink {
    path: PathBuf,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl SubmissionSink for JsonLinesSink {
    fn name(&self) -> &'static str {
        "json-lines"
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn accept(&self, input: &RegistrationInput) -> SignupResult<()> {
        let record = SubmissionRecord::new(input);
        let line = serde_json::to_string(&record).context("Failed to serialise submission")?;

        self.append(&line).map_err(|e| map_io_error(&self.path, e))?;

        debug!(id = %record.id, "Submission appended");
        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error) -> SignupError {
    ApplicationError::SinkIo {
        path: path.to_path_buf(),
        reason: format!("Failed to append submission: {}", e),
    }
    .into()
}
