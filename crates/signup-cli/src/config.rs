//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the
//! [`ValidationPolicy`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `SIGNUP_` prefix, `__` between sections
//!    (`SIGNUP_VALIDATION__TERMS=required`)
//! 3. Config file (`--config`, else [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use signup_core::domain::{Locale, TermsPolicy, ValidationPolicy};

use crate::cli::SinkKind;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Rule table knobs.
    pub validation: ValidationPolicy,
    /// Output settings.
    pub output: OutputConfig,
    /// Where submissions go.
    pub sink: SinkConfig,
    /// Log file settings.
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    /// `log` or `json-lines`.
    pub kind: String,
    /// Target file for `json-lines`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            kind: SinkKind::Log.to_string(),
            path: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to this file (daily rotation).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(p) => (p.clone(), true),
            None => (Self::config_path(), false),
        };

        Self::load_from(&path, required, Self::environment())
    }

    /// `SIGNUP_` prefix, `__` between nested keys.
    fn environment() -> Environment {
        Environment::with_prefix("SIGNUP")
            .prefix_separator("_")
            .separator("__")
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(env)
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.signup.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "signup", "signup")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".signup.toml"))
    }

    pub fn terms_policy(&self) -> TermsPolicy {
        self.validation.terms
    }

    pub fn locale(&self) -> Locale {
        self.validation.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_with(vars: &[(&str, &str)]) -> Environment {
        AppConfig::environment().source(Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        ))
    }

    fn no_env() -> Environment {
        env_with(&[])
    }

    #[test]
    fn default_terms_policy_is_advisory() {
        assert_eq!(AppConfig::default().terms_policy(), TermsPolicy::Advisory);
    }

    #[test]
    fn default_sink_is_log() {
        assert_eq!(AppConfig::default().sink.kind, "log");
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("absent.toml"), false, no_env()).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn missing_required_file_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(AppConfig::load_from(&dir.path().join("absent.toml"), true, no_env()).is_err());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[validation]\nterms = \"required\"\nlocale = \"ru\"\n\n[sink]\nkind = \"json-lines\"\npath = \"out.jsonl\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path, true, no_env()).unwrap();
        assert_eq!(cfg.terms_policy(), TermsPolicy::Required);
        assert_eq!(cfg.locale(), Locale::Ru);
        assert_eq!(cfg.sink.kind, "json-lines");
        assert_eq!(cfg.sink.path, Some(PathBuf::from("out.jsonl")));
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[validation]\nterms = \"advisory\"\n").unwrap();
        let env = env_with(&[("SIGNUP_VALIDATION__TERMS", "required")]);

        let cfg = AppConfig::load_from(&path, true, env).unwrap();
        assert_eq!(cfg.terms_policy(), TermsPolicy::Required);
    }

    #[test]
    fn documented_env_names_reach_nested_keys() {
        let dir = tempfile::TempDir::new().unwrap();
        let env = env_with(&[
            ("SIGNUP_VALIDATION__LOCALE", "ru"),
            ("SIGNUP_SINK__KIND", "json-lines"),
            ("SIGNUP_OUTPUT__FORMAT", "plain"),
        ]);

        let cfg = AppConfig::load_from(&dir.path().join("absent.toml"), false, env).unwrap();
        assert_eq!(cfg.locale(), Locale::Ru);
        assert_eq!(cfg.sink.kind, "json-lines");
        assert_eq!(cfg.output.format, "plain");
    }

    #[test]
    fn double_underscore_prefix_is_not_read() {
        let dir = tempfile::TempDir::new().unwrap();
        let env = env_with(&[("SIGNUP__VALIDATION__TERMS", "required")]);

        let cfg = AppConfig::load_from(&dir.path().join("absent.toml"), false, env).unwrap();
        assert_eq!(cfg.terms_policy(), TermsPolicy::Advisory);
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
