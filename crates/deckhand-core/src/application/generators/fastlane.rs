//! Fastlane configuration for Android applications.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::application::generators::{
    ArtifactWriter, BLUEMIX_CATEGORY, GenerationContext, GenerationReport, Generator,
};
use crate::domain::BackendPlatform;
use crate::error::DeckhandResult;

pub const APPFILE_TEMPLATE: &str = "fastlane_appfile";
pub const FASTFILE_TEMPLATE: &str = "fastlane_fastfile";

/// Writes `fastlane/Appfile` and `fastlane/Fastfile` for Android descriptors
/// that carry a package name. Any other descriptor is left alone; rejecting
/// unsupported platforms is the deployment generator's job.
#[derive(Debug, Default, Clone, Copy)]
pub struct FastlaneGenerator;

#[derive(Debug, Serialize)]
struct FastlaneContext<'a> {
    package_name: &'a str,
    lane: &'a str,
}

impl Generator for FastlaneGenerator {
    fn name(&self) -> &'static str {
        "fastlane"
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

        let is_android = ctx
            .descriptor
            .backend_platform
            .parse::<BackendPlatform>()
            .is_ok_and(|p| p == BackendPlatform::Android);
        let package_name = match ctx.descriptor.packagename.as_deref() {
            Some(name) if is_android && !name.trim().is_empty() => name,
            _ => {
                debug!("no Android package name, nothing to do");
                return Ok(GenerationReport::new());
            }
        };

        let data = FastlaneContext {
            package_name,
            lane: &ctx.options.android.fastlane_lane,
        };
        let mut out = ArtifactWriter::new(*ctx);
        out.render(APPFILE_TEMPLATE, "fastlane/Appfile", &data)?;
        out.render(FASTFILE_TEMPLATE, "fastlane/Fastfile", &data)?;
        Ok(out.finish())
    }
}
