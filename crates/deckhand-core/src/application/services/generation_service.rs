//! Generation Service - main application orchestrator.
//!
//! Runs every registered generator over one descriptor:
//! 1. Each generator checks the platform filter
//! 2. Builds and finalizes its configuration
//! 3. Writes through the filesystem port
//!
//! Reports are concatenated in generator order. The first error aborts the
//! run; files already written stay on disk.

use std::path::Path;
use tracing::{info, instrument};

use crate::{
    application::{
        generators::{
            DeploymentGenerator, FastlaneGenerator, GenerationContext, GenerationReport,
            Generator,
        },
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    },
    domain::{ApplicationDescriptor, GenerateOptions},
    error::DeckhandResult,
};

/// Main generation service.
pub struct GenerationService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    generators: Vec<Box<dyn Generator>>,
}

impl GenerationService {
    /// Create a service running the deployment and fastlane generators.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use deckhand_core::application::GenerationService;
    ///
    /// let service = GenerationService::new(
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
            generators: vec![Box::new(DeploymentGenerator), Box::new(FastlaneGenerator)],
        }
    }

    pub fn generator_names(&self) -> Vec<&'static str> {
        self.generators.iter().map(|g| g.name()).collect()
    }

    /// Generate every artifact for `descriptor` under `output_root`.
    #[instrument(
        skip_all,
        fields(
            platform = %descriptor.backend_platform,
            output_root = %output_root.as_ref().display()
        )
    )]
    pub fn generate(
        &self,
        descriptor: &ApplicationDescriptor,
        options: &GenerateOptions,
        output_root: impl AsRef<Path>,
    ) -> DeckhandResult<GenerationReport> {
        let ctx = GenerationContext {
            descriptor,
            options,
            output_root: output_root.as_ref(),
            store: self.store.as_ref(),
            renderer: self.renderer.as_ref(),
            filesystem: self.filesystem.as_ref(),
        };

        let mut report = GenerationReport::new();
        for generator in &self.generators {
            report.merge(generator.generate(&ctx)?);
        }

        info!(artifacts = report.len(), "generation completed");
        Ok(report)
    }
}
