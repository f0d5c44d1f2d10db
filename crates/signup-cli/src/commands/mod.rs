//! Command handlers. Each one translates parsed arguments into calls on the
//! core `FormController` and prints the result.

pub mod check;
pub mod completions;
pub mod config;
pub mod init;
pub mod interactive;
pub mod register;

use signup_core::{
    application::FormController,
    domain::{Field, Locale, TermsPolicy, ValidationPolicy},
    error::SignupResult,
};

use crate::{
    cli::{FormArgs, LocaleArg, PolicyArgs, TermsPolicyArg},
    config::AppConfig,
};

/// Config values overridden by whatever flags were given.
pub(crate) fn resolve_policy(config: &AppConfig, args: &PolicyArgs) -> ValidationPolicy {
    let mut policy = ValidationPolicy {
        terms: config.terms_policy(),
        locale: config.locale(),
    };
    if let Some(terms) = args.terms_policy {
        policy.terms = match terms {
            TermsPolicyArg::Advisory => TermsPolicy::Advisory,
            TermsPolicyArg::Required => TermsPolicy::Required,
        };
    }
    if let Some(locale) = args.locale {
        policy.locale = match locale {
            LocaleArg::En => Locale::En,
            LocaleArg::Ru => Locale::Ru,
        };
    }
    policy
}

/// Feed every flag into the form as a change event, in display order.
pub(crate) fn fill_form(form: &mut FormController, args: &FormArgs) -> SignupResult<()> {
    form.field_change(Field::Name, args.name.as_str())?;
    form.field_change(Field::Email, args.email.as_str())?;
    form.field_change(Field::Password, args.password.as_str())?;
    form.field_change(Field::PasswordConfirm, args.password_confirm.as_str())?;
    form.field_change(Field::Terms, args.accept_terms)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_policy() {
        let config = AppConfig::default();
        let args = PolicyArgs {
            terms_policy: Some(TermsPolicyArg::Required),
            locale: Some(LocaleArg::Ru),
        };
        let policy = resolve_policy(&config, &args);
        assert_eq!(policy.terms, TermsPolicy::Required);
        assert_eq!(policy.locale, Locale::Ru);
    }

    #[test]
    fn config_policy_kept_without_flags() {
        let mut config = AppConfig::default();
        config.validation.terms = TermsPolicy::Required;
        let policy = resolve_policy(&config, &PolicyArgs::default());
        assert_eq!(policy.terms, TermsPolicy::Required);
        assert_eq!(policy.locale, Locale::En);
    }
}
