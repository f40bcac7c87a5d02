//! `deckhand config` — inspect configuration values.

use toml::Value;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
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
            let serialised = config
                .to_toml()
                .map_err(|e| CliError::config("Failed to serialise config", e))?;
            output.print(&serialised)?;
        }
        ConfigCommands::Path => {
            let path = AppConfig::resolve_path(global.config.as_deref());
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

/// Look up a dotted key such as `android.fastlane_lane`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let unknown = || CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    };

    let root = Value::try_from(config).map_err(|e| CliError::config("Failed to serialise config", e))?;
    let value = key
        .split('.')
        .try_fold(&root, |node, segment| node.get(segment))
        .ok_or_else(unknown)?;

    Ok(match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}
