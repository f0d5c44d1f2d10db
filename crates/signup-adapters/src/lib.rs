//! Infrastructure adapters for Signup.
//!
//! This crate implements the ports defined in `signup-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod renderer;
pub mod sink;

// Re-export commonly used adapters
pub use renderer::TextFormRenderer;
pub use sink::{JsonLinesSink, LogSink, MemorySink, SubmissionRecord};
