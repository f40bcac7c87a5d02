//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `deckhand-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by generators, implemented by infrastructure
//!   - `Filesystem`: File writes
//!   - `TemplateStore`: Template and static asset retrieval
//!   - `TemplateRenderer`: Template rendering
//!
//! - **Driving (Input) Ports**: `GenerationService`, called by the CLI

pub mod output;

pub use output::{AssetFile, Filesystem, TemplateRenderer, TemplateStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateRenderer, MockTemplateStore};
