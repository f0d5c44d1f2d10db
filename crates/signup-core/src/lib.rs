//! Signup Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Signup
//! registration form, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           signup-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (FormController)             │
//! │      Validate-then-submit workflow      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Driven: SubmissionSink, Renderer)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     signup-adapters (Infrastructure)    │
//! │  (LogSink, JsonLinesSink, TextRenderer) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Field, RuleSet, Validator, FormState) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use signup_core::prelude::*;
//!
//! let mut form = FormController::new(Box::new(sink), ValidationPolicy::default());
//! form.field_change(Field::Name, "Alice")?;
//! form.field_change(Field::Email, "a@b.com")?;
//! form.field_change(Field::Password, "password1")?;
//! form.field_change(Field::PasswordConfirm, "password1")?;
//!
//! match form.submit(&mut SubmitEvent::new())? {
//!     SubmitOutcome::Submitted(input) => println!("welcome {}", input.name),
//!     SubmitOutcome::Rejected(errors) => println!("{errors}"),
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FormController, SubmitEvent, SubmitOutcome,
        ports::{FormRenderer, SubmissionSink},
    };
    pub use crate::domain::{
        Field, FieldKind, FieldValue, FormState, Locale, RegistrationInput, TermsPolicy,
        ValidationError, ValidationErrors, ValidationPolicy, Validator,
    };
    pub use crate::error::{SignupError, SignupResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
