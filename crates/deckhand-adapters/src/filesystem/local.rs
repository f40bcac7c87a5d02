//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use deckhand_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{DeckhandError, DeckhandResult},
};

/// Production filesystem implementation using `std::fs`.
///
/// Writes replace existing files; nothing is ever deleted.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> DeckhandResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> DeckhandResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> DeckhandResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> DeckhandError {
    ApplicationError::filesystem(path, format!("Failed to {operation}: {e}")).into()
}
