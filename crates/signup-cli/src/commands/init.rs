//! `signup init`: write a default configuration file.

use std::path::Path;

use tracing::instrument;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli, write_failed},
    output::OutputManager,
};

/// Create a default configuration file at `--config` or the platform
/// default location.
#[instrument(skip_all, fields(force = args.force))]
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let path = global.config.unwrap_or_else(AppConfig::config_path);
    output.info(&format!("Initialising configuration at {}", path.display()))?;

    if write_default_config(&path, args.force)? {
        output.success(&format!("Configuration created at {}", path.display()))?;
    } else {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            path.display(),
        ))?;
    }
    Ok(())
}

/// Returns `false` when the file exists and `force` is not set.
fn write_default_config(path: &Path, force: bool) -> CliResult<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, toml).map_err(|e| write_failed(path, e))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use signup_core::domain::TermsPolicy;

    #[test]
    fn writes_loadable_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(write_default_config(&path, false).unwrap());

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("[validation]"));
        assert!(written.contains("terms = \"advisory\""));

        let cfg: AppConfig = toml::from_str(&written).unwrap();
        assert_eq!(cfg.terms_policy(), TermsPolicy::Advisory);
    }

    #[test]
    fn existing_file_kept_without_force() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(!write_default_config(&path, false).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");
    }

    #[test]
    fn force_overwrites() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(write_default_config(&path, true).unwrap());
        assert!(std::fs::read_to_string(&path).unwrap().contains("[output]"));
    }
}
