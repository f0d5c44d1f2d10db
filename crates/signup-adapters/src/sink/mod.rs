//! Submission sink adapters.

mod json_lines;
mod log;
mod memory;

pub use json_lines::{JsonLinesSink, SubmissionRecord};
pub use log::LogSink;
pub use memory::MemorySink;
