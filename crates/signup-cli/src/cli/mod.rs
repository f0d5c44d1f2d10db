//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "signup",
    bin_name = "signup",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Registration form with declarative validation",
    long_about = "Signup collects a name, email, password and terms acceptance, \
                  validates them against a fixed rule table and hands valid \
                  registrations to a submission sink.",
    after_help = "EXAMPLES:\n\
        \x20 signup register --name Alice --email a@b.com --password password1 --password-confirm password1\n\
        \x20 signup register --interactive\n\
        \x20 signup check --email bad --output-format json\n\
        \x20 signup completions bash > /usr/share/bash-completion/completions/signup",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fill in and submit the registration form.
    #[command(
        visible_alias = "r",
        about = "Submit a registration",
        after_help = "EXAMPLES:\n\
            \x20 signup register --name Alice --email a@b.com --password password1 --password-confirm password1 --accept-terms\n\
            \x20 signup register --interactive\n\
            \x20 signup register ... --sink json-lines --out signups.jsonl"
    )]
    Register(RegisterArgs),

    /// Validate input without submitting it anywhere.
    #[command(
        about = "Validate form input only",
        after_help = "EXAMPLES:\n\
            \x20 signup check --name Alice --email bad\n\
            \x20 signup check --password short --output-format json"
    )]
    Check(CheckArgs),

    /// Initialise a Signup configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 signup init\n\
            \x20 signup init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 signup completions bash > ~/.local/share/bash-completion/completions/signup\n\
            \x20 signup completions zsh  > ~/.zfunc/_signup\n\
            \x20 signup completions fish > ~/.config/fish/completions/signup.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Signup configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 signup config get validation.terms\n\
            \x20 signup config list\n\
            \x20 signup config path"
    )]
    Config(ConfigCommands),
}

// ── form input ────────────────────────────────────────────────────────────────

/// The five form inputs as flags. Omitted text flags mean an empty input.
#[derive(Debug, Clone, Default, Args)]
pub struct FormArgs {
    /// Display name (at most 32 characters).
    #[arg(long = "name", value_name = "NAME", default_value = "", hide_default_value = true)]
    pub name: String,

    /// Email address.
    #[arg(long = "email", value_name = "EMAIL", default_value = "", hide_default_value = true)]
    pub email: String,

    /// Password (8 to 32 characters).
    #[arg(
        long = "password",
        value_name = "PASSWORD",
        env = "SIGNUP_PASSWORD",
        hide_env_values = true,
        default_value = "",
        hide_default_value = true
    )]
    pub password: String,

    /// Password again.
    #[arg(
        long = "password-confirm",
        value_name = "PASSWORD",
        env = "SIGNUP_PASSWORD_CONFIRM",
        hide_env_values = true,
        default_value = "",
        hide_default_value = true
    )]
    pub password_confirm: String,

    /// Tick the "Accept Terms and Conditions" checkbox.
    #[arg(long = "accept-terms", help = "Accept the terms and conditions")]
    pub accept_terms: bool,
}

/// Validation overrides shared by `register` and `check`.
#[derive(Debug, Clone, Default, Args)]
pub struct PolicyArgs {
    /// Override `validation.terms` from the config.
    #[arg(long = "terms-policy", value_enum, value_name = "POLICY")]
    pub terms_policy: Option<TermsPolicyArg>,

    /// Override `validation.locale` from the config.
    #[arg(long = "locale", value_enum, value_name = "LOCALE")]
    pub locale: Option<LocaleArg>,
}

// ── register ──────────────────────────────────────────────────────────────────

/// Arguments for `signup register`.
#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[command(flatten)]
    pub form: FormArgs,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Prompt for each input instead of reading flags.
    #[arg(
        short = 'i',
        long = "interactive",
        help = "Fill the form through prompts",
        conflicts_with_all = ["name", "email", "password", "password_confirm", "accept_terms"]
    )]
    pub interactive: bool,

    /// Where validated registrations go.
    #[arg(long = "sink", value_enum, value_name = "SINK", help = "Submission sink")]
    pub sink: Option<SinkKind>,

    /// Output file for the `json-lines` sink.
    #[arg(long = "out", value_name = "FILE", help = "File for the json-lines sink")]
    pub out: Option<PathBuf>,

    /// Print the rendered form even when submission succeeds.
    #[arg(long = "show-form", help = "Always print the rendered form")]
    pub show_form: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `signup check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub form: FormArgs,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `signup init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `signup completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `signup config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `validation.terms`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Available submission sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum SinkKind {
    /// Log the submission on stderr (passwords masked).
    Log,
    /// Append one JSON record per submission to a file.
    #[value(alias = "jsonl")]
    JsonLines,
}

impl std::fmt::Display for SinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Log => write!(f, "log"),
            Self::JsonLines => write!(f, "json-lines"),
        }
    }
}

/// Terms checkbox enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TermsPolicyArg {
    Advisory,
    Required,
}

/// Message language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LocaleArg {
    En,
    Ru,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn sink_display() {
        assert_eq!(SinkKind::Log.to_string(), "log");
        assert_eq!(SinkKind::JsonLines.to_string(), "json-lines");
    }

    #[test]
    fn parse_register_command() {
        let cli = Cli::parse_from([
            "signup",
            "register",
            "--name",
            "Alice",
            "--email",
            "a@b.com",
            "--password",
            "password1",
            "--password-confirm",
            "password1",
            "--accept-terms",
        ]);
        let Commands::Register(args) = cli.command else {
            panic!("expected Register command");
        };
        assert_eq!(args.form.name, "Alice");
        assert!(args.form.accept_terms);
        assert!(!args.interactive);
    }

    #[test]
    fn omitted_inputs_are_empty() {
        let cli = Cli::parse_from(["signup", "check", "--email", "bad"]);
        let Commands::Check(args) = cli.command else {
            panic!("expected Check command");
        };
        assert_eq!(args.form.name, "");
        assert_eq!(args.form.email, "bad");
    }

    #[test]
    fn jsonl_alias() {
        let cli = Cli::parse_from(["signup", "register", "--sink", "jsonl"]);
        let Commands::Register(args) = cli.command else {
            panic!("expected Register command");
        };
        assert_eq!(args.sink, Some(SinkKind::JsonLines));
    }

    #[test]
    fn interactive_conflicts_with_inputs() {
        let result = Cli::try_parse_from(["signup", "register", "-i", "--name", "Alice"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["signup", "--quiet", "--verbose", "check"]);
        assert!(result.is_err());
    }
}
