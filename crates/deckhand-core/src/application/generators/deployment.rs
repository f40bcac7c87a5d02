//! Cloud deployment artifacts: manifest, ignore file and the `.bluemix` set.

use serde::Serialize;
use tracing::{info, instrument};

use crate::application::generators::{
    ArtifactWriter, BLUEMIX_CATEGORY, GenerationContext, GenerationReport, Generator, WriteKind,
};
use crate::domain::{
    ConfigurationBuilder, DeploymentDescriptor, FinalizedPlan, JobConfig, PipelineConfig,
    RepoType,
};
use crate::error::DeckhandResult;

/// Directory holding the toolchain and pipeline descriptors.
pub const BLUEMIX_DIR: &str = ".bluemix";

/// Static assets copied into [`BLUEMIX_DIR`] unchanged, in copy order.
pub const STATIC_ASSETS: [&str; 8] = [
    "nls",
    "fastlane",
    "deploy.json",
    "toolchain.png",
    "toolchain.svg",
    "icon.svg",
    "toolchain_dark.png",
    "locales.yml",
];

pub const MANIFEST_TEMPLATE: &str = "manifest_master.yml";
pub const TOOLCHAIN_TEMPLATE: &str = "toolchain_master.yml";
pub const DEPLOY_TEMPLATE: &str = "deploy_master.json";
pub const PIPELINE_TEMPLATE: &str = "pipeline_master.yml";

/// Placeholders the toolchain service substitutes itself. They are bound as
/// literal strings so they survive rendering unchanged.
mod passthrough {
    pub const TIMESTAMP: &str = "{{timestamp}}";
    pub const PROD_SPACE: &str = "{{form.pipeline.parameters.prod-space}}";
    pub const PROD_ORG: &str = "{{form.pipeline.parameters.prod-organization}}";
    pub const PROD_REGION: &str = "{{form.pipeline.parameters.prod-region}}";
    pub const PROD_APP: &str = "{{services.app-repo.parameters.repo_name}}";
    /// Pipeline name resolved by the CI system.
    pub const APP_REPO: &str = "${APP_REPO}";
}

/// Generates the manifest, `.cfignore`, toolchain, deploy and pipeline
/// descriptors plus the static `.bluemix` assets.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeploymentGenerator;

impl Generator for DeploymentGenerator {
    fn name(&self) -> &'static str {
        "deployment"
    }

    fn category(&self) -> &'static str {
        BLUEMIX_CATEGORY
    }

    #[instrument(skip_all, fields(generator = self.name()))]
    fn generate(&self, ctx: &GenerationContext<'_>) -> DeckhandResult<GenerationReport> {
        if !ctx.includes(self.category()) {
            info!("'{}' not among requested platforms, skipping", self.category());
            return Ok(GenerationReport::new());
        }

        let plan = ConfigurationBuilder::build(ctx.descriptor, ctx.options)?.cleanup();
        let mut out = ArtifactWriter::new(*ctx);

        for asset in STATIC_ASSETS {
            out.copy_asset(asset, BLUEMIX_DIR)?;
        }

        out.render(MANIFEST_TEMPLATE, "manifest.yml", plan.manifest())?;

        if let Some(content) = plan.ignore_content() {
            out.write_text(".cfignore", content, WriteKind::Rendered)?;
        }

        out.render(
            TOOLCHAIN_TEMPLATE,
            ".bluemix/toolchain.yml",
            &ToolchainContext::from_plan(&plan),
        )?;
        // Overwrites the copied deploy.json.
        out.render(
            DEPLOY_TEMPLATE,
            ".bluemix/deploy.json",
            &DeployContext {
                deployment: plan.deployment(),
            },
        )?;
        out.render(
            PIPELINE_TEMPLATE,
            ".bluemix/pipeline.yml",
            &PipelineContext::from_plan(&plan),
        )?;

        let report = out.finish();
        info!(artifacts = report.len(), "deployment artifacts written");
        Ok(report)
    }
}

// ── Template contexts ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolchainContext<'a> {
    name: Option<&'a str>,
    repo_type: RepoType,
    deployment: &'a DeploymentDescriptor,
    apprepo: Option<&'a str>,
    testrepo: Option<&'a str>,
    timestamp: &'static str,
    prodspacename: &'static str,
    prodorgname: &'static str,
    prodregion: &'static str,
    prodappname: &'static str,
}

impl<'a> ToolchainContext<'a> {
    fn from_plan(plan: &'a FinalizedPlan) -> Self {
        Self {
            name: plan.name(),
            repo_type: plan.toolchain().repo_type,
            deployment: plan.deployment(),
            apprepo: plan.apprepo(),
            testrepo: plan.testrepo(),
            timestamp: passthrough::TIMESTAMP,
            prodspacename: passthrough::PROD_SPACE,
            prodorgname: passthrough::PROD_ORG,
            prodregion: passthrough::PROD_REGION,
            prodappname: passthrough::PROD_APP,
        }
    }
}

#[derive(Debug, Serialize)]
struct DeployContext<'a> {
    deployment: &'a DeploymentDescriptor,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PipelineContext<'a> {
    name: &'static str,
    config: &'a PipelineConfig,
    deployment: &'a DeploymentDescriptor,
    testconfig: &'a JobConfig,
    publish_config: &'a JobConfig,
    apprepo: Option<&'a str>,
}

impl<'a> PipelineContext<'a> {
    fn from_plan(plan: &'a FinalizedPlan) -> Self {
        Self {
            name: passthrough::APP_REPO,
            config: plan.pipeline(),
            deployment: plan.deployment(),
            testconfig: plan.test_job(),
            publish_config: plan.publish_job(),
            apprepo: plan.apprepo(),
        }
    }
}
