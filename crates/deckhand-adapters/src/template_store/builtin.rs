//! Templates and assets compiled into the binary.

use deckhand_core::{
    application::{
        ApplicationError,
        ports::{AssetFile, TemplateStore},
    },
    error::DeckhandResult,
};

macro_rules! embedded {
    ($($path:literal),+ $(,)?) => {
        &[$(($path, include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $path)) as &[u8])),+]
    };
}

/// Every embedded file, sorted by path.
static FILES: &[(&str, &[u8])] = embedded![
    "deploy.json",
    "deploy_master.json",
    "fastlane/README.md",
    "fastlane_appfile",
    "fastlane_fastfile",
    "icon.svg",
    "locales.yml",
    "manifest_master.yml",
    "nls/messages.json",
    "pipeline_master.yml",
    "toolchain.png",
    "toolchain.svg",
    "toolchain_dark.png",
    "toolchain_master.yml",
];

/// The default template root shipped with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplateStore;

impl BuiltinTemplateStore {
    pub fn new() -> Self {
        Self
    }

    /// Paths of every embedded file.
    pub fn file_names(&self) -> impl Iterator<Item = &'static str> {
        FILES.iter().map(|(path, _)| *path)
    }
}

impl TemplateStore for BuiltinTemplateStore {
    fn read_template(&self, name: &str) -> DeckhandResult<String> {
        let (_, bytes) = FILES
            .iter()
            .find(|(path, _)| *path == name)
            .ok_or_else(|| ApplicationError::TemplateNotFound { name: name.into() })?;

        String::from_utf8(bytes.to_vec()).map_err(|e| {
            ApplicationError::RenderingFailed {
                template: name.into(),
                reason: format!("template is not UTF-8: {e}"),
            }
            .into()
        })
    }

    fn assets(&self, name: &str) -> DeckhandResult<Vec<AssetFile>> {
        let prefix = format!("{}/", name.trim_end_matches('/'));
        let files: Vec<AssetFile> = FILES
            .iter()
            .filter(|(path, _)| *path == name || path.starts_with(&prefix))
            .map(|(path, bytes)| AssetFile {
                relative_path: (*path).to_string(),
                contents: bytes.to_vec(),
            })
            .collect();

        if files.is_empty() {
            return Err(ApplicationError::TemplateNotFound { name: name.into() }.into());
        }
        Ok(files)
    }
}
