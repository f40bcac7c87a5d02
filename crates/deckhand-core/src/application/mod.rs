//! Application layer for Deckhand.
//!
//! This layer contains:
//! - **Generators**: the deployment and fastlane artifact generators
//! - **Services**: `GenerationService`, which runs every generator in order
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Configuration rules live in `crate::domain`; this layer only moves the
//! finalized plan through templates onto the filesystem.

pub mod error;
pub mod generators;
pub mod ports;
pub mod services;

pub use generators::{
    ArtifactWrite, DeploymentGenerator, FastlaneGenerator, GenerationContext, GenerationReport,
    Generator, WriteKind,
};
pub use services::GenerationService;

pub use ports::{AssetFile, Filesystem, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
