//! `deckhand platforms` — list requestable backend platforms.

use serde::Serialize;

use deckhand_core::domain::{BackendPlatform, PlatformProfile};

use crate::{
    cli::{ListFormat, PlatformsArgs},
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct PlatformRow {
    name: &'static str,
    /// Whether a deployment routine exists for it.
    supported: bool,
}

fn rows() -> Vec<PlatformRow> {
    BackendPlatform::ALL
        .iter()
        .map(|p| PlatformRow {
            name: p.as_str(),
            supported: PlatformProfile::is_supported(*p),
        })
        .collect()
}

pub fn execute(args: PlatformsArgs, output: OutputManager) -> CliResult<()> {
    let rows = rows();

    match args.format {
        ListFormat::Table => {
            output.header("Backend platforms:")?;
            for row in &rows {
                let status = if row.supported { "supported" } else { "unsupported" };
                output.print(&format!("  {:<10} {status}", row.name))?;
            }
        }
        ListFormat::List => {
            for row in &rows {
                output.print(row.name)?;
            }
        }
        ListFormat::Json => output.json(&rows)?,
    }

    Ok(())
}
