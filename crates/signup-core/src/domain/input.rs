//! The registration input entity.

use serde::{Deserialize, Serialize};

use crate::domain::field::{Field, FieldValue};

const MASK: &str = "********";

/// Everything the registration form collects.
///
/// The same type carries both the in-progress draft held by
/// [`FormState`](crate::domain::FormState) and the validated value returned
/// by [`Validator::validate`](crate::domain::Validator::validate); only the
/// latter is guaranteed to satisfy the rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    #[serde(default)]
    pub terms: bool,
}

impl RegistrationInput {
    /// Text value of a field. `Terms` has no text and yields `None`.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::PasswordConfirm => Some(&self.password_confirm),
            Field::Terms => None,
        }
    }

    /// Store `value` into `field`.
    ///
    /// Callers check the value kind first; a mismatched value is ignored.
    pub(crate) fn set(&mut self, field: Field, value: FieldValue) {
        match (field, value) {
            (Field::Name, FieldValue::Text(v)) => self.name = v,
            (Field::Email, FieldValue::Text(v)) => self.email = v,
            (Field::Password, FieldValue::Text(v)) => self.password = v,
            (Field::PasswordConfirm, FieldValue::Text(v)) => self.password_confirm = v,
            (Field::Terms, FieldValue::Flag(v)) => self.terms = v,
            _ => {}
        }
    }

    /// `true` when every text field is empty and terms is unchecked.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// A copy safe to log or persist: both password fields are masked.
    pub fn redacted(&self) -> RedactedInput<'_> {
        RedactedInput {
            name: &self.name,
            email: &self.email,
            password: MASK,
            password_confirm: MASK,
            terms: self.terms,
        }
    }
}

/// Borrowed, password-free view of a [`RegistrationInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactedInput<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'static str,
    pub password_confirm: &'static str,
    pub terms: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> RegistrationInput {
        RegistrationInput {
            name: "Alice".into(),
            email: "a@b.com".into(),
            password: "password1".into(),
            password_confirm: "password1".into(),
            terms: true,
        }
    }

    #[test]
    fn default_is_empty() {
        assert!(RegistrationInput::default().is_empty());
        assert!(!alice().is_empty());
    }

    #[test]
    fn set_routes_value_to_field() {
        let mut input = RegistrationInput::default();
        input.set(Field::PasswordConfirm, "secret".into());
        input.set(Field::Terms, true.into());
        assert_eq!(input.password_confirm, "secret");
        assert!(input.terms);
    }

    #[test]
    fn mismatched_value_is_ignored() {
        let mut input = RegistrationInput::default();
        input.set(Field::Name, true.into());
        assert!(input.is_empty());
    }

    #[test]
    fn redacted_hides_passwords() {
        let input = alice();
        let json = serde_json::to_string(&input.redacted()).unwrap();
        assert!(json.contains("\"name\":\"Alice\""));
        assert!(json.contains("\"passwordConfirm\":\"********\""));
        assert!(!json.contains("password1"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(alice()).unwrap();
        assert_eq!(json["passwordConfirm"], "password1");
    }
}
