//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generators need from external systems.
//! The `deckhand-adapters` crate provides implementations.

use std::path::Path;

use crate::error::DeckhandResult;

/// Port for filesystem writes under the output root.
///
/// Implemented by:
/// - `deckhand_adapters::filesystem::LocalFilesystem` (production)
/// - `deckhand_adapters::filesystem::MemoryFilesystem` (dry runs, tests)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DeckhandResult<()>;

    /// Write text content, replacing any existing file.
    fn write_file(&self, path: &Path, content: &str) -> DeckhandResult<()>;

    /// Write binary content, replacing any existing file.
    fn write_bytes(&self, path: &Path, content: &[u8]) -> DeckhandResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// One file of a static asset, read from the template root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    /// Forward-slash path relative to the template root, starting with the
    /// asset name (`nls/messages.json`, `deploy.json`).
    pub relative_path: String,
    pub contents: Vec<u8>,
}

/// Port for reading templates and static assets by logical name.
///
/// Implemented by:
/// - `deckhand_adapters::template_store::BuiltinTemplateStore` (embedded)
/// - `deckhand_adapters::template_store::DirectoryTemplateStore` (user templates)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Source text of a template.
    fn read_template(&self, name: &str) -> DeckhandResult<String>;

    /// Every file under an asset name: the file itself, or a directory tree
    /// in a stable order.
    fn assets(&self, name: &str) -> DeckhandResult<Vec<AssetFile>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `deckhand_adapters::renderer::MiniJinjaRenderer`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` against a JSON context.
    ///
    /// `name` is used in error messages only.
    fn render(&self, name: &str, source: &str, context: &serde_json::Value)
    -> DeckhandResult<String>;
}
