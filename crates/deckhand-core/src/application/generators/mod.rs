//! Artifact generators.
//!
//! A [`Generator`] owns one family of output files. It receives a
//! [`GenerationContext`] that bundles the run input with the three ports, and
//! returns a [`GenerationReport`] of everything it wrote. Writes go through
//! [`ArtifactWriter`], which resolves destinations against the output root
//! and records each one.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::application::ports::{Filesystem, TemplateRenderer, TemplateStore};
use crate::domain::{ApplicationDescriptor, GenerateOptions, RelativePath};
use crate::error::{DeckhandError, DeckhandResult};

pub mod deployment;
pub mod fastlane;

pub use deployment::DeploymentGenerator;
pub use fastlane::FastlaneGenerator;

/// Platform category shared by the deployment-family generators.
pub const BLUEMIX_CATEGORY: &str = "bluemix";

/// A family of output artifacts.
pub trait Generator: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Category matched against `GenerateOptions::platforms`.
    fn category(&self) -> &'static str;

    fn generate(&self, ctx: &GenerationContext<'_>) -> DeckhandResult<GenerationReport>;
}

/// Input and ports for one generation run.
#[derive(Clone, Copy)]
pub struct GenerationContext<'a> {
    pub descriptor: &'a ApplicationDescriptor,
    pub options: &'a GenerateOptions,
    pub output_root: &'a Path,
    pub store: &'a dyn TemplateStore,
    pub renderer: &'a dyn TemplateRenderer,
    pub filesystem: &'a dyn Filesystem,
}

impl GenerationContext<'_> {
    /// Whether a generator of `category` is selected for this run.
    pub fn includes(&self, category: &str) -> bool {
        self.options.includes_category(category)
    }
}

// ── Report ───────────────────────────────────────────────────────────────────

/// How an artifact was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteKind {
    /// Static asset copied byte for byte.
    Copied,
    /// Produced by rendering a template or serialising configuration.
    Rendered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactWrite {
    #[serde(serialize_with = "serialize_display")]
    pub path: RelativePath,
    pub kind: WriteKind,
}

fn serialize_display<S: serde::Serializer>(
    path: &RelativePath,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(path)
}

/// Artifacts written by one or more generators, in write order.
///
/// A path written twice keeps its first position and takes the latest kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    writes: Vec<ArtifactWrite>,
}

impl GenerationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: RelativePath, kind: WriteKind) {
        match self.writes.iter_mut().find(|w| w.path == path) {
            Some(existing) => existing.kind = kind,
            None => self.writes.push(ArtifactWrite { path, kind }),
        }
    }

    pub fn merge(&mut self, other: GenerationReport) {
        for write in other.writes {
            self.record(write.path, write.kind);
        }
    }

    pub fn writes(&self) -> &[ArtifactWrite] {
        &self.writes
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.writes.iter().any(|w| w.path.to_string() == path)
    }

    pub fn kind_of(&self, path: &str) -> Option<WriteKind> {
        self.writes
            .iter()
            .find(|w| w.path.to_string() == path)
            .map(|w| w.kind)
    }
}

// ── Writer ───────────────────────────────────────────────────────────────────

/// Writes artifacts under the output root and records them.
///
/// Every write is attempted once; the first failure is returned unchanged and
/// nothing already written is undone.
pub struct ArtifactWriter<'a> {
    ctx: GenerationContext<'a>,
    report: GenerationReport,
}

impl<'a> ArtifactWriter<'a> {
    pub fn new(ctx: GenerationContext<'a>) -> Self {
        Self {
            ctx,
            report: GenerationReport::new(),
        }
    }

    /// Render template `name` with `data` and write it to `dest`.
    pub fn render<T: Serialize>(&mut self, name: &str, dest: &str, data: &T) -> DeckhandResult<()> {
        let context = serde_json::to_value(data).map_err(|e| DeckhandError::Internal {
            message: format!("could not serialise context for {name}: {e}"),
        })?;
        let source = self.ctx.store.read_template(name)?;
        let output = self.ctx.renderer.render(name, &source, &context)?;
        self.write_text(dest, &output, WriteKind::Rendered)
    }

    /// Write text content that needs no template.
    pub fn write_text(&mut self, dest: &str, content: &str, kind: WriteKind) -> DeckhandResult<()> {
        let relative = RelativePath::try_new(dest)?;
        let path = self.prepare(&relative)?;
        self.ctx.filesystem.write_file(&path, content)?;
        debug!(path = %relative, ?kind, "wrote artifact");
        self.report.record(relative, kind);
        Ok(())
    }

    /// Copy every file of asset `name` into `dest_dir`, keeping its layout.
    pub fn copy_asset(&mut self, name: &str, dest_dir: &str) -> DeckhandResult<()> {
        let dest_dir = RelativePath::try_new(dest_dir)?;
        for file in self.ctx.store.assets(name)? {
            let relative = dest_dir.join(&file.relative_path)?;
            let path = self.prepare(&relative)?;
            self.ctx.filesystem.write_bytes(&path, &file.contents)?;
            debug!(path = %relative, "copied asset");
            self.report.record(relative, WriteKind::Copied);
        }
        Ok(())
    }

    pub fn finish(self) -> GenerationReport {
        self.report
    }

    fn prepare(&self, relative: &RelativePath) -> DeckhandResult<PathBuf> {
        let path = self.ctx.output_root.join(relative);
        if let Some(parent) = path.parent() {
            self.ctx.filesystem.create_dir_all(parent)?;
        }
        Ok(path)
    }
}
