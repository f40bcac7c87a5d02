//! Infrastructure adapters for Deckhand.
//!
//! This crate implements the ports defined in `deckhand_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::MiniJinjaRenderer;
pub use template_store::{BuiltinTemplateStore, DirectoryTemplateStore};
