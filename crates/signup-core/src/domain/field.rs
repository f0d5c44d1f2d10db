//! Domain value objects: Field, FieldKind, FieldValue.
//!
//! # Design
//!
//! These are pure value types. `Field` is a closed set: the registration
//! form has exactly five inputs and the rule table in `rules.rs` is keyed
//! on this enum. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.

use crate::domain::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Field ─────────────────────────────────────────────────────────────────────

/// One input of the registration form.
///
/// Ordering follows the render order, so a `BTreeMap<Field, _>` iterates
/// fields top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "passwordConfirm")]
    PasswordConfirm,
    #[serde(rename = "terms")]
    Terms,
}

impl Field {
    /// Every field, in render order.
    pub const ALL: [Field; 5] = [
        Self::Name,
        Self::Email,
        Self::Password,
        Self::PasswordConfirm,
        Self::Terms,
    ];

    /// Stable key used in error maps and JSON output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::PasswordConfirm => "passwordConfirm",
            Self::Terms => "terms",
        }
    }

    /// Human-facing label shown next to the input.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::PasswordConfirm => "Confirm Password",
            Self::Terms => "Accept Terms and Conditions",
        }
    }

    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Name => FieldKind::Text,
            Self::Email => FieldKind::Email,
            Self::Password | Self::PasswordConfirm => FieldKind::Password,
            Self::Terms => FieldKind::Checkbox,
        }
    }

    /// Every input carries the "required" marker, `terms` included.
    ///
    /// Whether `terms` is actually enforced is a [`TermsPolicy`] decision.
    ///
    /// [`TermsPolicy`]: crate::domain::TermsPolicy
    pub const fn is_required(&self) -> bool {
        true
    }

    /// `true` for inputs whose value must be masked when displayed.
    pub const fn is_secret(&self) -> bool {
        matches!(self.kind(), FieldKind::Password)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" | "login" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "passwordconfirm" | "password_confirm" | "password-confirm" | "confirm" => {
                Ok(Self::PasswordConfirm)
            }
            "terms" => Ok(Self::Terms),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

// ── FieldKind ─────────────────────────────────────────────────────────────────

/// How an input is presented and what kind of value it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Email,
    /// Rendered as masked text.
    Password,
    Checkbox,
}

impl FieldKind {
    pub const fn holds_text(self) -> bool {
        !matches!(self, Self::Checkbox)
    }
}

// ── FieldValue ────────────────────────────────────────────────────────────────

/// A value delivered by a change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Check that this value fits `field`.
    pub fn check_kind(&self, field: Field) -> Result<(), FormError> {
        let fits = match self {
            Self::Text(_) => field.kind().holds_text(),
            Self::Flag(_) => !field.kind().holds_text(),
        };
        if fits {
            Ok(())
        } else {
            Err(FormError::FieldKindMismatch {
                field,
                expected: if field.kind().holds_text() { "text" } else { "flag" },
            })
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_keys_match_wire_names() {
        assert_eq!(Field::PasswordConfirm.to_string(), "passwordConfirm");
        assert_eq!(Field::Name.as_str(), "name");
    }

    #[test]
    fn field_from_str_accepts_aliases() {
        assert_eq!("passwordConfirm".parse::<Field>().unwrap(), Field::PasswordConfirm);
        assert_eq!("password-confirm".parse::<Field>().unwrap(), Field::PasswordConfirm);
        assert_eq!("EMAIL".parse::<Field>().unwrap(), Field::Email);
    }

    #[test]
    fn field_from_str_unknown_errors() {
        assert!(matches!(
            "phone".parse::<Field>(),
            Err(FormError::UnknownField(_))
        ));
    }

    #[test]
    fn only_password_fields_are_secret() {
        let secret: Vec<_> = Field::ALL.iter().filter(|f| f.is_secret()).collect();
        assert_eq!(secret, [&Field::Password, &Field::PasswordConfirm]);
    }

    #[test]
    fn flag_rejected_for_text_field() {
        let err = FieldValue::Flag(true).check_kind(Field::Email).unwrap_err();
        assert_eq!(
            err,
            FormError::FieldKindMismatch {
                field: Field::Email,
                expected: "text"
            }
        );
        assert!(FieldValue::Flag(true).check_kind(Field::Terms).is_ok());
        assert!(FieldValue::text("x").check_kind(Field::Terms).is_err());
    }

    #[test]
    fn serde_uses_wire_keys() {
        let json = serde_json::to_string(&Field::PasswordConfirm).unwrap();
        assert_eq!(json, "\"passwordConfirm\"");
    }
}
