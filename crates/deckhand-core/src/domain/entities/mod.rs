pub mod deployment;
pub mod descriptor;
pub mod options;
pub mod path;
pub mod plan;
pub mod script;

pub use deployment::{
    BuildJob, DeploymentDescriptor, IgnorePatterns, JobConfig, ManifestConfig, PipelineConfig,
    ToolchainConfig,
};
pub use descriptor::{ApplicationDescriptor, ServerSettings};
pub use options::{AndroidPipelineSettings, GenerateOptions};
pub use path::RelativePath;
pub use plan::{DeploymentPlan, FinalizedPlan};
pub use script::ShellScript;
