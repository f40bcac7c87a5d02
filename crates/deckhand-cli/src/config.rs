//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The CLI
//! layer owns config; the core crate only sees the [`GenerateOptions`] built
//! from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, see [`AppConfig::generate_options`])
//! 2. `DECKHAND_*` environment variables, `__` between key segments,
//!    e.g. `DECKHAND_ANDROID__FASTLANE_LANE=release`
//! 3. Config file (`--config` or the platform config directory)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use deckhand_core::domain::{AndroidPipelineSettings, GenerateOptions, RepoType};

/// Prefix of environment variables that override config values.
pub const ENV_PREFIX: &str = "DECKHAND";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generate: GenerateConfig,
    pub output: OutputConfig,
    /// Values baked into the Android pipeline scripts.
    pub android: AndroidPipelineSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub repo_type: RepoType,
    /// Template directory used instead of the built-in set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// `config_file` is the `--config` path. An explicit file must exist when
    /// `require_file` is set; the default location is always optional.
    pub fn load(config_file: Option<&PathBuf>, require_file: bool) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), require_file),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "loading configuration");

        let defaults = Config::try_from(&Self::default())
            .context("could not convert built-in defaults")?;

        Config::builder()
            .add_source(defaults)
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("could not read configuration from {}", path.display()))?
            .try_deserialize()
            .context("invalid configuration values")
    }

    /// Default configuration file location.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.deckhand.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "deckhand", "deckhand")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".deckhand.toml"))
    }

    /// The file `init` and `config path` refer to.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        explicit.map_or_else(Self::config_path, Path::to_path_buf)
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Build core options, letting flags win over configured values.
    pub fn generate_options(
        &self,
        platforms: Option<Vec<String>>,
        repo_type: Option<RepoType>,
        app_name: Option<String>,
    ) -> GenerateOptions {
        GenerateOptions {
            platforms,
            repo_type: repo_type.unwrap_or(self.generate.repo_type),
            app_name,
            android: self.android.clone(),
        }
    }
}
