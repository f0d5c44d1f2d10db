//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "submit the registration form".

pub mod form_controller;

pub use form_controller::{FormController, SubmitEvent, SubmitOutcome};
