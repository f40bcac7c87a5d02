//! `deckhand init` — write a default configuration file.

use std::fs;

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliError, CliResult, IoContext},
    output::OutputManager,
};

/// Writes the built-in defaults to `--config` or the default location.
pub fn execute(args: InitArgs, global: &GlobalArgs, output: OutputManager) -> CliResult<()> {
    let config_path = AppConfig::resolve_path(global.config.as_deref());

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = AppConfig::default()
        .to_toml()
        .map_err(|e| CliError::config("Failed to serialise default config", e))?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_path("Failed to create config directory", parent)?;
    }
    fs::write(&config_path, toml).with_path("Failed to write config to", &config_path)?;

    output.success(&format!("Configuration created at {}", config_path.display()))?;
    Ok(())
}
