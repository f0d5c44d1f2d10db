//! `signup config`: inspect configuration values.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            let path = global.config.unwrap_or_else(AppConfig::config_path);
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let display_path = |p: &Option<std::path::PathBuf>| {
        p.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    };

    match key {
        "validation.terms" => Ok(config.validation.terms.to_string()),
        "validation.locale" => Ok(config.validation.locale.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "sink.kind" => Ok(config.sink.kind.clone()),
        "sink.path" => Ok(display_path(&config.sink.path)),
        "logging.file" => Ok(display_path(&config.logging.file)),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "validation.terms").unwrap(), "advisory");
        assert_eq!(get_config_value(&cfg, "validation.locale").unwrap(), "en");
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
        assert_eq!(get_config_value(&cfg, "sink.kind").unwrap(), "log");
    }

    #[test]
    fn unset_paths_are_empty() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "sink.path").unwrap(), "");
        assert_eq!(get_config_value(&cfg, "logging.file").unwrap(), "");
    }

    #[test]
    fn set_path_is_displayed() {
        let mut cfg = AppConfig::default();
        cfg.sink.path = Some(PathBuf::from("signups.jsonl"));
        assert_eq!(get_config_value(&cfg, "sink.path").unwrap(), "signups.jsonl");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }
}
