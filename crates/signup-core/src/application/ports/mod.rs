//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `signup-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `SubmissionSink`: Receives validated submissions
//!   - `FormRenderer`: Presents the form and its errors
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by `FormController`)

pub mod output;

pub use output::{FormRenderer, SubmissionSink};

#[cfg(test)]
pub use output::MockSubmissionSink;
