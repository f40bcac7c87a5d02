//! Filesystem-based template root.
//!
//! # Directory layout expected
//!
//! ```text
//! templates/
//! ├── manifest_master.yml
//! ├── toolchain_master.yml
//! ├── deploy_master.json
//! ├── pipeline_master.yml
//! ├── fastlane_appfile
//! ├── fastlane_fastfile
//! ├── deploy.json
//! ├── locales.yml
//! ├── icon.svg, toolchain.svg, toolchain.png, toolchain_dark.png
//! ├── nls/             ← copied as a tree
//! └── fastlane/        ← copied as a tree
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use deckhand_core::{
    application::{
        ApplicationError,
        ports::{AssetFile, TemplateStore},
    },
    domain::RelativePath,
    error::DeckhandResult,
};

use super::normalize_path;

/// Reads templates and assets from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateStore {
    root: PathBuf,
}

impl DirectoryTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve `name` under the root, refusing names that leave it.
    fn resolve(&self, name: &str) -> DeckhandResult<PathBuf> {
        let relative = RelativePath::try_new(name)?;
        Ok(self.root.join(relative))
    }

    fn read_asset(&self, path: &Path) -> DeckhandResult<AssetFile> {
        let relative = path.strip_prefix(&self.root).map_err(|_| {
            ApplicationError::filesystem(path, "asset lies outside the template root")
        })?;
        let contents = fs::read(path).map_err(|e| ApplicationError::filesystem(path, e))?;
        Ok(AssetFile {
            relative_path: normalize_path(&relative.to_string_lossy()),
            contents,
        })
    }
}

impl TemplateStore for DirectoryTemplateStore {
    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn read_template(&self, name: &str) -> DeckhandResult<String> {
        let path = self.resolve(name)?;
        if !path.is_file() {
            return Err(ApplicationError::TemplateNotFound { name: name.into() }.into());
        }
        fs::read_to_string(&path).map_err(|e| ApplicationError::filesystem(&path, e).into())
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn assets(&self, name: &str) -> DeckhandResult<Vec<AssetFile>> {
        let path = self.resolve(name)?;

        if path.is_file() {
            return Ok(vec![self.read_asset(&path)?]);
        }
        if !path.is_dir() {
            return Err(ApplicationError::TemplateNotFound { name: name.into() }.into());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&path).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::filesystem(&path, e))?;
            // Skip directories, symlinks and other special types.
            if !entry.file_type().is_file() {
                continue;
            }
            files.push(self.read_asset(entry.path())?);
        }
        debug!(count = files.len(), "asset files collected");
        Ok(files)
    }
}
