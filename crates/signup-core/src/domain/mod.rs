//! Core domain layer for Signup.
//!
//! This module contains pure business logic. All I/O (logging sinks,
//! rendering, files) is handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Validation is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Value types**: All domain objects are Clone + PartialEq
//! - **Rules as data**: Validation is a table walked by one pure function

pub mod error;
pub mod field;
pub mod form_state;
pub mod input;
pub mod rules;
pub mod validation;

pub use error::FormError;
pub use field::{Field, FieldKind, FieldValue};
pub use form_state::{FormState, SubmitPhase};
pub use input::{RedactedInput, RegistrationInput};
pub use rules::{
    Check, Locale, MessageKey, NAME_MAX_CHARS, PASSWORD_MAX_CHARS, PASSWORD_MIN_CHARS, Rule,
    RuleSet, TermsPolicy, ValidationPolicy,
};
pub use validation::{ValidationError, ValidationErrors, Validator};
