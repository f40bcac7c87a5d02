//! `deckhand generate` — write deployment artifacts for a descriptor.
//!
//! Translates arguments and configuration into core input, wires the
//! adapters, runs the service and reports what was written. No generation
//! logic lives here.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info, instrument};

use deckhand_adapters::{
    BuiltinTemplateStore, DirectoryTemplateStore, LocalFilesystem, MemoryFilesystem,
    MiniJinjaRenderer,
};
use deckhand_core::{
    application::{
        GenerationService, WriteKind,
        ports::{Filesystem, TemplateStore},
    },
    domain::ApplicationDescriptor,
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let descriptor = load_descriptor(&args)?;
    let options = config.generate_options(
        args.platforms.clone(),
        args.repo_type.map(Into::into),
        args.app_name.clone(),
    );
    let output_dir = args
        .output
        .clone()
        .or_else(|| config.generate.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let store = template_store(args.templates.as_ref().or(config.generate.templates_dir.as_ref()))?;

    debug!(
        platform = %descriptor.backend_platform,
        repo_type = %options.repo_type,
        output = %output_dir.display(),
        "generation input resolved"
    );

    let memory = MemoryFilesystem::new();
    let filesystem: Box<dyn Filesystem> = if args.dry_run {
        Box::new(memory.clone())
    } else {
        Box::new(LocalFilesystem::new())
    };

    let service = GenerationService::new(store, Box::new(MiniJinjaRenderer::new()), filesystem);
    let report = service.generate(&descriptor, &options, &output_dir)?;
    info!(artifacts = report.len(), "generate finished");

    if output.format() == OutputFormat::Json {
        output.json(&report)?;
        return Ok(());
    }

    if report.is_empty() {
        output.warning("No artifacts generated: no requested platform has a generator")?;
        return Ok(());
    }

    if args.dry_run {
        output.header(&format!(
            "Dry run: would write {} files under {}",
            report.len(),
            output_dir.display()
        ))?;
        for write in report.writes() {
            let size = memory
                .file_size(&output_dir.join(&write.path))
                .unwrap_or_default();
            output.print(&format!(
                "  {:<32} {:<8} {size} bytes",
                write.path.to_string(),
                kind_label(write.kind)
            ))?;
        }
        return Ok(());
    }

    for write in report.writes() {
        output.print(&format!("  {:<8} {}", kind_label(write.kind), write.path))?;
    }
    output.success(&format!(
        "Generated {} files in {}",
        report.len(),
        output_dir.display()
    ))?;
    Ok(())
}

/// Read the descriptor from `--descriptor` or `--bluemix`.
fn load_descriptor(args: &GenerateArgs) -> CliResult<ApplicationDescriptor> {
    match (&args.descriptor, &args.bluemix) {
        (Some(path), _) => {
            let content = fs::read_to_string(path)
                .map_err(|e| CliError::descriptor(path.display().to_string(), e))?;
            ApplicationDescriptor::from_str_auto(&content)
                .map_err(|e| CliError::descriptor(path.display().to_string(), e))
        }
        (None, Some(json)) => ApplicationDescriptor::from_json(json)
            .map_err(|e| CliError::descriptor("--bluemix", e)),
        (None, None) => Err(CliError::InvalidInput {
            message: "pass --descriptor FILE or --bluemix JSON".into(),
        }),
    }
}

fn template_store(dir: Option<&PathBuf>) -> CliResult<Box<dyn TemplateStore>> {
    match dir {
        None => Ok(Box::new(BuiltinTemplateStore::new())),
        Some(dir) => {
            if !dir.is_dir() {
                return Err(CliError::InvalidInput {
                    message: format!("'{}' is not a directory", dir.display()),
                });
            }
            debug!(root = %dir.display(), "using template directory");
            Ok(Box::new(DirectoryTemplateStore::new(dir.as_path())))
        }
    }
}

fn kind_label(kind: WriteKind) -> &'static str {
    match kind {
        WriteKind::Copied => "copied",
        WriteKind::Rendered => "rendered",
    }
}
