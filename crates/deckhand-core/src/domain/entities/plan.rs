//! The per-run configuration aggregate and its cleanup pass.
//!
//! A [`DeploymentPlan`] is seeded with defaults, transformed by value through
//! the platform routine, and consumed by [`DeploymentPlan::cleanup`] into a
//! [`FinalizedPlan`]. Only the finalized form is handed to templates, so the
//! ignore file is serialised exactly once and nothing mutates configuration
//! after cleanup.

use crate::domain::entities::{
    deployment::{
        DeploymentDescriptor, IgnorePatterns, JobConfig, ManifestConfig, PipelineConfig,
        ToolchainConfig,
    },
    descriptor::ApplicationDescriptor,
    options::GenerateOptions,
};

/// Configuration under construction for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentPlan {
    name: Option<String>,
    apprepo: Option<String>,
    testrepo: Option<String>,
    manifest: ManifestConfig,
    pipeline: PipelineConfig,
    test_job: JobConfig,
    publish_job: JobConfig,
    deployment: DeploymentDescriptor,
    toolchain: ToolchainConfig,
    ignore: IgnorePatterns,
}

impl DeploymentPlan {
    /// Defaults shared by every platform.
    pub fn seed(descriptor: &ApplicationDescriptor, options: &GenerateOptions) -> Self {
        Self {
            name: descriptor.name.clone(),
            apprepo: descriptor.apprepo.clone(),
            testrepo: descriptor.testrepo.clone(),
            manifest: ManifestConfig {
                name: descriptor.name.clone(),
                memory: descriptor.memory().map(str::to_owned),
                env: Some(descriptor.env()),
                ..ManifestConfig::default()
            },
            pipeline: PipelineConfig::default(),
            test_job: JobConfig::default(),
            publish_job: JobConfig::default(),
            deployment: DeploymentDescriptor {
                name: descriptor.name.clone(),
                ..DeploymentDescriptor::default()
            },
            toolchain: ToolchainConfig {
                repo_type: options.repo_type,
            },
            ignore: IgnorePatterns::new(),
        }
    }

    // ── By-value steps ────────────────────────────────────────────────────────

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_manifest(mut self, manifest: ManifestConfig) -> Self {
        self.manifest = manifest;
        self
    }

    pub fn with_pipeline(mut self, pipeline: PipelineConfig) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn with_test_job(mut self, job: JobConfig) -> Self {
        self.test_job = job;
        self
    }

    pub fn with_publish_job(mut self, job: JobConfig) -> Self {
        self.publish_job = job;
        self
    }

    pub fn with_ignore_patterns(mut self, ignore: IgnorePatterns) -> Self {
        self.ignore = ignore;
        self
    }

    /// Append the manifest's declared ignore paths to the ignore patterns.
    pub fn merge_manifest_ignores(mut self) -> Self {
        let paths = std::mem::take(&mut self.manifest.ignore_paths);
        self.ignore = self.ignore.with(paths);
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn manifest(&self) -> &ManifestConfig {
        &self.manifest
    }
    pub fn pipeline(&self) -> &PipelineConfig {
        &self.pipeline
    }
    pub fn test_job(&self) -> &JobConfig {
        &self.test_job
    }
    pub fn publish_job(&self) -> &JobConfig {
        &self.publish_job
    }
    pub fn deployment(&self) -> &DeploymentDescriptor {
        &self.deployment
    }
    pub fn ignore_patterns(&self) -> &IgnorePatterns {
        &self.ignore
    }

    // ── Cleanup ───────────────────────────────────────────────────────────────

    /// Normalise the plan for rendering.
    ///
    /// - an `env` map that exists but is empty is removed entirely
    /// - ignore patterns are joined with `\n`; none at all means no ignore file
    pub fn cleanup(self) -> FinalizedPlan {
        let mut manifest = self.manifest;
        if manifest.env.as_ref().is_some_and(|env| env.is_empty()) {
            manifest.env = None;
        }

        FinalizedPlan {
            name: self.name,
            apprepo: self.apprepo,
            testrepo: self.testrepo,
            manifest,
            pipeline: self.pipeline,
            test_job: self.test_job,
            publish_job: self.publish_job,
            deployment: self.deployment,
            toolchain: self.toolchain,
            ignore_content: self.ignore.into_content(),
        }
    }
}

/// Read-only configuration ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizedPlan {
    name: Option<String>,
    apprepo: Option<String>,
    testrepo: Option<String>,
    manifest: ManifestConfig,
    pipeline: PipelineConfig,
    test_job: JobConfig,
    publish_job: JobConfig,
    deployment: DeploymentDescriptor,
    toolchain: ToolchainConfig,
    ignore_content: Option<String>,
}

impl FinalizedPlan {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn apprepo(&self) -> Option<&str> {
        self.apprepo.as_deref()
    }
    pub fn testrepo(&self) -> Option<&str> {
        self.testrepo.as_deref()
    }
    pub fn manifest(&self) -> &ManifestConfig {
        &self.manifest
    }
    pub fn pipeline(&self) -> &PipelineConfig {
        &self.pipeline
    }
    pub fn test_job(&self) -> &JobConfig {
        &self.test_job
    }
    pub fn publish_job(&self) -> &JobConfig {
        &self.publish_job
    }
    pub fn deployment(&self) -> &DeploymentDescriptor {
        &self.deployment
    }
    pub fn toolchain(&self) -> &ToolchainConfig {
        &self.toolchain
    }
    /// Content of the ignore file, if any pattern was contributed.
    pub fn ignore_content(&self) -> Option<&str> {
        self.ignore_content.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::descriptor::ServerSettings;

    fn plan_for(descriptor: &ApplicationDescriptor) -> DeploymentPlan {
        DeploymentPlan::seed(descriptor, &GenerateOptions::default())
    }

    #[test]
    fn seed_copies_descriptor_identity() {
        let d = ApplicationDescriptor::new("SWIFT")
            .with_name("AcmeProject")
            .with_repos("https://a", "https://t");
        let plan = plan_for(&d);

        assert_eq!(plan.name(), Some("AcmeProject"));
        assert_eq!(plan.manifest().name.as_deref(), Some("AcmeProject"));
        assert_eq!(plan.deployment().name.as_deref(), Some("AcmeProject"));
        assert_eq!(plan.manifest().env, Some(Default::default()));
    }

    #[test]
    fn cleanup_removes_empty_env() {
        let plan = plan_for(&ApplicationDescriptor::new("SWIFT")).cleanup();
        assert!(plan.manifest().env.is_none());
    }

    #[test]
    fn cleanup_keeps_non_empty_env() {
        let d = ApplicationDescriptor::new("SWIFT")
            .with_server(ServerSettings::default().with_env("LOG_LEVEL", "debug"));
        let plan = plan_for(&d).cleanup();

        let env = plan.manifest().env.as_ref().expect("env kept");
        assert_eq!(env.get("LOG_LEVEL").map(String::as_str), Some("debug"));
    }

    #[test]
    fn cleanup_without_patterns_has_no_ignore_content() {
        let plan = plan_for(&ApplicationDescriptor::new("SWIFT")).cleanup();
        assert_eq!(plan.ignore_content(), None);
    }

    #[test]
    fn manifest_ignore_paths_are_appended_after_platform_patterns() {
        let d = ApplicationDescriptor::new("SWIFT");
        let plan = plan_for(&d);
        let manifest = ManifestConfig {
            ignore_paths: vec!["node_modules".into()],
            ..plan.manifest().clone()
        };
        let plan = plan
            .with_ignore_patterns(IgnorePatterns::new().with([".build/*"]))
            .with_manifest(manifest)
            .merge_manifest_ignores()
            .cleanup();

        assert_eq!(plan.ignore_content(), Some(".build/*\nnode_modules"));
    }
}
