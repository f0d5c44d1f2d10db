//! The declarative rule table.
//!
//! # Design
//!
//! Each rule is a `(field, check, message)` triple. The table is an ordered
//! `Vec<Rule>`; order matters only for display, because the first violated
//! rule of a field is the message shown under its input. The one cross-field
//! rule (password confirmation) is not in the table: it needs two fields and
//! is evaluated by the validator after the per-field pass.
//!
//! # Adding a Rule
//!
//! 1. Add a [`MessageKey`] variant and its text in every catalog
//! 2. Push a [`Rule`] in [`RuleSet::standard`]
//! 3. The validator picks it up

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::domain::error::FormError;
use crate::domain::field::Field;
use crate::domain::input::RegistrationInput;

pub const NAME_MAX_CHARS: usize = 32;
pub const PASSWORD_MIN_CHARS: usize = 8;
pub const PASSWORD_MAX_CHARS: usize = 32;

// ── Check ─────────────────────────────────────────────────────────────────────

/// A single-field predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Text must be non-empty. No trimming: `" "` passes.
    Required,
    /// At most `n` Unicode scalar values.
    MaxChars(usize),
    /// At least `n` Unicode scalar values.
    MinChars(usize),
    /// Must look like an email address.
    Email,
    /// Checkbox must be ticked.
    Accepted,
}

impl Check {
    /// `true` when `field` of `input` satisfies this check.
    pub fn passes(self, input: &RegistrationInput, field: Field) -> bool {
        match (self, input.text(field)) {
            (Self::Accepted, _) => input.terms,
            (_, None) => true,
            (Self::Required, Some(text)) => !text.is_empty(),
            (Self::MaxChars(n), Some(text)) => text.chars().count() <= n,
            (Self::MinChars(n), Some(text)) => text.chars().count() >= n,
            (Self::Email, Some(text)) => is_email_address(text),
        }
    }
}

/// HTML5 syntax from `validator`, narrowed further: ASCII local part that
/// does not start or end with a dot, no `..`, no IP literals, and a dotted
/// domain ending in an alphabetic TLD of two or more letters.
fn is_email_address(text: &str) -> bool {
    if !text.validate_email() || text.starts_with('.') || text.contains("..") {
        return false;
    }
    let Some((local, domain)) = text.rsplit_once('@') else {
        return false;
    };

    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "_'+-.".contains(c))
        && local
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_alphanumeric() || "_+-".contains(c));

    let Some((labels, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let labels_ok = labels.split('.').all(|label| {
        label.starts_with(|c: char| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());

    local_ok && labels_ok && tld_ok
}

// ── Messages ──────────────────────────────────────────────────────────────────

/// Identifies a message independently of its language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    NameRequired,
    NameTooLong,
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
    PasswordTooShort,
    PasswordTooLong,
    ConfirmRequired,
    PasswordsMismatch,
    TermsRequired,
}

/// Message catalog selector.
///
/// `Ru` reproduces the strings of the form this crate was modelled on,
/// which mix Russian and English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    pub const fn message(self, key: MessageKey) -> &'static str {
        match self {
            Self::En => match key {
                MessageKey::NameRequired => "Name is required",
                MessageKey::NameTooLong => "Name must be at most 32 characters",
                MessageKey::EmailRequired => "Email is required",
                MessageKey::EmailInvalid => "Email address is invalid",
                MessageKey::PasswordRequired => "Password is required",
                MessageKey::PasswordTooShort => "Password must be more than 8 characters",
                MessageKey::PasswordTooLong => "Password must be less than 32 characters",
                MessageKey::ConfirmRequired => "Please confirm your password",
                MessageKey::PasswordsMismatch => "Passwords do not match",
                MessageKey::TermsRequired => "You must accept the terms and conditions",
            },
            Self::Ru => match key {
                MessageKey::NameRequired => "Поле Логин обязательно для заполнения",
                MessageKey::NameTooLong => "Максимум 32 символа для логина",
                MessageKey::EmailRequired => "Поле Email обязательно для заполнения",
                MessageKey::EmailInvalid => "Неверно указан Email",
                MessageKey::PasswordRequired => "Пароль обязателен для заполнения",
                MessageKey::PasswordTooShort => "Password must be more than 8 characters",
                MessageKey::PasswordTooLong => "Password must be less than 32 characters",
                MessageKey::ConfirmRequired => "Please confirm your password",
                MessageKey::PasswordsMismatch => "Пароли не совпадают",
                MessageKey::TermsRequired => "Необходимо принять условия использования",
            },
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "ru" | "russian" => Ok(Self::Ru),
            other => Err(FormError::UnknownLocale(other.to_string())),
        }
    }
}

// ── Policy ────────────────────────────────────────────────────────────────────

/// Whether the terms checkbox blocks submission.
///
/// The checkbox always carries a "required" marker, but enforcement is
/// opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermsPolicy {
    /// Shown as required, never produces an error.
    #[default]
    Advisory,
    /// Unchecked terms is a validation error on `terms`.
    Required,
}

impl TermsPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Advisory => "advisory",
            Self::Required => "required",
        }
    }
}

impl fmt::Display for TermsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TermsPolicy {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "advisory" | "optional" => Ok(Self::Advisory),
            "required" | "enforced" => Ok(Self::Required),
            other => Err(FormError::UnknownTermsPolicy(other.to_string())),
        }
    }
}

/// Knobs that change which rules run and how they speak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    #[serde(default)]
    pub terms: TermsPolicy,
    #[serde(default)]
    pub locale: Locale,
}

// ── Rule table ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub field: Field,
    pub check: Check,
    pub message: MessageKey,
}

impl Rule {
    pub const fn new(field: Field, check: Check, message: MessageKey) -> Self {
        Self {
            field,
            check,
            message,
        }
    }
}

/// Builder for the ordered rule table.
pub struct RuleSet;

impl RuleSet {
    /// The registration rules, in display order.
    pub fn standard(terms: TermsPolicy) -> Vec<Rule> {
        use Check::*;
        use MessageKey::*;

        let mut rules = vec![
            Rule::new(Field::Name, Required, NameRequired),
            Rule::new(Field::Name, MaxChars(NAME_MAX_CHARS), NameTooLong),
            Rule::new(Field::Email, Required, EmailRequired),
            Rule::new(Field::Email, Email, EmailInvalid),
            Rule::new(Field::Password, Required, PasswordRequired),
            Rule::new(Field::Password, MinChars(PASSWORD_MIN_CHARS), PasswordTooShort),
            Rule::new(Field::Password, MaxChars(PASSWORD_MAX_CHARS), PasswordTooLong),
            Rule::new(Field::PasswordConfirm, Required, ConfirmRequired),
        ];

        if terms == TermsPolicy::Required {
            rules.push(Rule::new(Field::Terms, Accepted, TermsRequired));
        }

        rules
    }
}
