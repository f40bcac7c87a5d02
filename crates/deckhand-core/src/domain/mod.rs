//! Core domain layer for Deckhand.
//!
//! Pure configuration logic: descriptor parsing, platform dispatch, the
//! configuration builder and the cleanup pass. All template and filesystem
//! concerns are handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: no filesystem, network, or template engine
//! - **Deterministic**: the same descriptor and options give the same plan
//! - **By-value plans**: each step returns a new plan; cleanup consumes it
//!
pub mod builder;
pub mod entities;
pub mod error;
pub mod profiles;
pub mod value_objects;

mod validation;

pub use builder::ConfigurationBuilder;
pub use entities::{
    AndroidPipelineSettings, ApplicationDescriptor, BuildJob, DeploymentDescriptor,
    DeploymentPlan, FinalizedPlan, GenerateOptions, IgnorePatterns, JobConfig, ManifestConfig,
    PipelineConfig, RelativePath, ServerSettings, ShellScript, ToolchainConfig,
};
pub use error::{DomainError, ErrorCategory};
pub use profiles::{AndroidProfile, PlatformProfile, SwiftProfile};
pub use validation::DomainValidator;
pub use value_objects::{BackendPlatform, DeploymentKind, RepoType, TriggerType};
