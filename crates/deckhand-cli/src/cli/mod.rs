//! CLI argument definitions using the clap derive API.
//!
//! This module is the only place that knows about argument names, aliases,
//! help text and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use deckhand_core::domain::RepoType;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name    = "deckhand",
    bin_name = "deckhand",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Deployment and CI scaffolding for cloud applications",
    long_about = "Deckhand reads an application descriptor and writes the \
                  Cloud Foundry manifest, DevOps toolchain and delivery \
                  pipeline files needed to deploy it.",
    after_help = "EXAMPLES:\n\
        \x20 deckhand generate --descriptor app.json -o ./out\n\
        \x20 deckhand generate --bluemix '{\"name\":\"acme\",\"backendPlatform\":\"SWIFT\"}'\n\
        \x20 deckhand platforms\n\
        \x20 deckhand completions bash > /usr/share/bash-completion/completions/deckhand",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate deployment artifacts from a descriptor.
    #[command(
        visible_alias = "gen",
        about = "Generate deployment artifacts",
        after_help = "EXAMPLES:\n\
            \x20 deckhand generate --descriptor app.yml\n\
            \x20 deckhand generate --descriptor app.json --repo-type fork -o build\n\
            \x20 deckhand generate --descriptor droid.json --app-name store-app --dry-run"
    )]
    Generate(GenerateArgs),

    /// List requestable backend platforms.
    #[command(visible_alias = "ls", about = "List backend platforms")]
    Platforms(PlatformsArgs),

    /// Initialise a Deckhand configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 deckhand init\n\
            \x20 deckhand init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 deckhand completions bash > ~/.local/share/bash-completion/completions/deckhand\n\
            \x20 deckhand completions zsh  > ~/.zfunc/_deckhand\n\
            \x20 deckhand completions fish > ~/.config/fish/completions/deckhand.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Deckhand configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 deckhand config get generate.repo_type\n\
            \x20 deckhand config get android.fastlane_lane\n\
            \x20 deckhand config list"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Descriptor file (JSON or YAML).
    #[arg(
        short = 'd',
        long = "descriptor",
        value_name = "FILE",
        conflicts_with = "bluemix",
        required_unless_present = "bluemix",
        help = "Application descriptor file (JSON or YAML)"
    )]
    pub descriptor: Option<PathBuf>,

    /// Inline descriptor JSON.
    #[arg(
        long = "bluemix",
        value_name = "JSON",
        help = "Inline application descriptor JSON"
    )]
    pub bluemix: Option<String>,

    /// Output directory. Falls back to `[generate] output_dir`, then `.`.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Restrict generation to these platform categories.
    #[arg(
        long = "platforms",
        value_name = "LIST",
        value_delimiter = ',',
        help = "Comma-separated platform categories (e.g. bluemix)"
    )]
    pub platforms: Option<Vec<String>>,

    #[arg(
        long = "repo-type",
        value_enum,
        value_name = "TYPE",
        help = "How the toolchain provisions the app repository"
    )]
    pub repo_type: Option<RepoTypeArg>,

    /// Application name override, honoured for Android.
    #[arg(long = "app-name", value_name = "NAME", help = "Application name override")]
    pub app_name: Option<String>,

    /// Template directory replacing the built-in set.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Directory of templates and assets to use instead of the built-in set"
    )]
    pub templates: Option<PathBuf>,

    /// Render in memory and list what would be written.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RepoTypeArg {
    Clone,
    Fork,
    #[value(alias = "existing")]
    Link,
    New,
}

impl From<RepoTypeArg> for RepoType {
    fn from(arg: RepoTypeArg) -> Self {
        match arg {
            RepoTypeArg::Clone => RepoType::Clone,
            RepoTypeArg::Fork => RepoType::Fork,
            RepoTypeArg::Link => RepoType::Link,
            RepoTypeArg::New => RepoType::New,
        }
    }
}

// ── platforms ─────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PlatformsArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Platform and routine status side by side.
    Table,
    /// One platform per line.
    List,
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `android.java_home`.
        key: String,
    },
    /// Print the effective configuration as TOML.
    List,
    /// Print the path of the configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
