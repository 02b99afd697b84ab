//! Implementation of the `slicegen list` command.
//!
//! Enumerates the slices root explicitly; a slice is "complete" when both
//! its service provider and routes file are present.

use std::path::PathBuf;

use slicegen_adapters::LocalFilesystem;
use slicegen_core::application::SliceRegistry;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let slices_root: PathBuf = args.slices_root.unwrap_or(config.paths.slices_root);

    let fs = LocalFilesystem::new();
    let registry = SliceRegistry::discover(&fs, &slices_root).map_err(CliError::Core)?;

    if registry.is_empty() {
        output.info(&format!("No slices found under {}", slices_root.display()))?;
        return Ok(());
    }

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Slices in {}:", slices_root.display()))?;
            for entry in registry.entries() {
                if entry.complete {
                    output.print(&format!("  {}", entry.name))?;
                } else {
                    output.warning(&format!("  {} (incomplete)", entry.name))?;
                }
            }
        }

        ListFormat::List => {
            for entry in registry.entries() {
                println!("{}", entry.name);
            }
        }

        ListFormat::Json => {
            // Serialise straight to stdout, bypassing the OutputManager:
            // JSON output must be parseable even in non-TTY pipes.
            let json = serde_json::to_string_pretty(registry.entries())
                .unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(())
}
