use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::domain::{
    field::Field,
    input::RegistrationInput,
    rules::{MessageKey, Rule, RuleSet, ValidationPolicy},
};

/// One violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every violation found by one validation pass, in rule order.
///
/// A field may collect several messages (empty `email` fails both the
/// required and the syntax rule); the first one is what the form shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(ValidationError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of violations, not fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The displayed message for `field`, if it has any error.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Display helper: the message for `field` or `""`.
    pub fn message_or_empty(&self, field: Field) -> &str {
        self.get(field).unwrap_or("")
    }

    pub fn has(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// All messages for `field`, in rule order.
    pub fn messages(&self, field: Field) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Distinct fields that failed, in render order.
    pub fn fields(&self) -> Vec<Field> {
        self.first_by_field().into_keys().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Field → displayed message.
    pub fn first_by_field(&self) -> BTreeMap<Field, &str> {
        let mut map = BTreeMap::new();
        for e in &self.errors {
            map.entry(e.field).or_insert(e.message.as_str());
        }
        map
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .first_by_field()
            .into_iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Serialized as `{ "fieldKey": "displayed message" }`.
impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let shown = self.first_by_field();
        let mut map = serializer.serialize_map(Some(shown.len()))?;
        for (field, message) in shown {
            map.serialize_entry(field.as_str(), message)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Evaluates the rule table against a full input snapshot.
///
/// Pure: the same input always yields the same outcome.
#[derive(Debug, Clone)]
pub struct Validator {
    rules: Vec<Rule>,
    policy: ValidationPolicy,
}

impl Validator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            rules: RuleSet::standard(policy.terms),
            policy,
        }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Run every rule, then the password-match check.
    ///
    /// All violations are collected. The match check runs only when both
    /// password fields are non-empty and reports on `passwordConfirm` only.
    pub fn validate(&self, input: &RegistrationInput) -> Result<RegistrationInput, ValidationErrors> {
        let locale = self.policy.locale;
        let mut errors = ValidationErrors::new();

        for rule in &self.rules {
            if !rule.check.passes(input, rule.field) {
                errors.push(rule.field, locale.message(rule.message));
            }
        }

        if !input.password.is_empty()
            && !input.password_confirm.is_empty()
            && input.password != input.password_confirm
        {
            errors.push(
                Field::PasswordConfirm,
                locale.message(MessageKey::PasswordsMismatch),
            );
        }

        if errors.is_empty() {
            Ok(input.clone())
        } else {
            Err(errors)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::{Locale, TermsPolicy};

    fn valid() -> RegistrationInput {
        RegistrationInput {
            name: "Alice".into(),
            email: "a@b.com".into(),
            password: "password1".into(),
            password_confirm: "password1".into(),
            terms: true,
        }
    }

    #[test]
    fn email_without_dotted_domain_is_rejected() {
        for email in ["a@b", "a@localhost", "a..b@c.com", ".a@c.com", "a@[127.0.0.1]", "a@b.c"] {
            let input = RegistrationInput {
                email: email.into(),
                ..valid()
            };
            let errors = Validator::default().validate(&input).unwrap_err();
            assert_eq!(errors.fields(), vec![Field::Email], "{email}");
            assert_eq!(errors.get(Field::Email), Some("Email address is invalid"));
        }
    }

    #[test]
    fn valid_input_passes_unchanged() {
        let input = valid();
        assert_eq!(Validator::default().validate(&input), Ok(input));
    }

    #[test]
    fn empty_input_reports_every_required_field() {
        let errors = Validator::default()
            .validate(&RegistrationInput::default())
            .unwrap_err();
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Password), Some("Password is required"));
        assert_eq!(
            errors.get(Field::PasswordConfirm),
            Some("Please confirm your password")
        );
        assert!(!errors.has(Field::Terms));
    }

    #[test]
    fn empty_email_collects_both_messages() {
        let input = RegistrationInput {
            email: String::new(),
            ..valid()
        };
        let errors = Validator::default().validate(&input).unwrap_err();
        let messages: Vec<_> = errors.messages(Field::Email).collect();
        assert_eq!(messages, ["Email is required", "Email address is invalid"]);
        assert_eq!(errors.fields(), [Field::Email]);
    }

    #[test]
    fn long_name_fails_max_length() {
        let input = RegistrationInput {
            name: "x".repeat(33),
            ..valid()
        };
        let errors = Validator::default().validate(&input).unwrap_err();
        assert_eq!(
            errors.get(Field::Name),
            Some("Name must be at most 32 characters")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn password_length_bounds() {
        let validator = Validator::default();
        let cases = [
            ("p".repeat(7), false),
            ("p".repeat(8), true),
            ("p".repeat(32), true),
            ("p".repeat(33), false),
        ];
        for (pw, ok) in cases {
            let input = RegistrationInput {
                password: pw.clone(),
                password_confirm: pw.clone(),
                ..valid()
            };
            assert_eq!(validator.validate(&input).is_ok(), ok, "password {pw:?}");
        }
    }

    #[test]
    fn mismatch_reported_only_on_confirm() {
        let input = RegistrationInput {
            password_confirm: "password2".into(),
            ..valid()
        };
        let errors = Validator::default().validate(&input).unwrap_err();
        assert_eq!(errors.fields(), [Field::PasswordConfirm]);
        assert_eq!(errors.get(Field::PasswordConfirm), Some("Passwords do not match"));
    }

    #[test]
    fn mismatch_skipped_when_confirm_empty() {
        let input = RegistrationInput {
            password_confirm: String::new(),
            ..valid()
        };
        let errors = Validator::default().validate(&input).unwrap_err();
        let messages: Vec<_> = errors.messages(Field::PasswordConfirm).collect();
        assert_eq!(messages, ["Please confirm your password"]);
    }

    #[test]
    fn validate_is_idempotent() {
        let input = RegistrationInput {
            name: String::new(),
            email: "bad".into(),
            ..valid()
        };
        let validator = Validator::default();
        assert_eq!(validator.validate(&input), validator.validate(&input));
    }

    #[test]
    fn required_terms_policy_blocks_unchecked() {
        let validator = Validator::new(ValidationPolicy {
            terms: TermsPolicy::Required,
            locale: Locale::En,
        });
        let input = RegistrationInput {
            terms: false,
            ..valid()
        };
        let errors = validator.validate(&input).unwrap_err();
        assert_eq!(errors.fields(), [Field::Terms]);
        assert!(Validator::default().validate(&input).is_ok());
    }

    #[test]
    fn russian_locale_messages() {
        let validator = Validator::new(ValidationPolicy {
            locale: Locale::Ru,
            ..Default::default()
        });
        let errors = validator
            .validate(&RegistrationInput::default())
            .unwrap_err();
        assert_eq!(
            errors.get(Field::Name),
            Some("Поле Логин обязательно для заполнения")
        );
    }

    #[test]
    fn serializes_first_message_per_field() {
        let errors = Validator::default()
            .validate(&RegistrationInput {
                email: String::new(),
                ..valid()
            })
            .unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "Email is required" }));
    }

    #[test]
    fn display_joins_fields() {
        let mut errors = ValidationErrors::new();
        errors.push(Field::Name, "a");
        errors.push(Field::Email, "b");
        assert_eq!(errors.to_string(), "name: a; email: b");
    }
}
