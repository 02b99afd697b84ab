//! Implementation of the `slicegen make` command.
//!
//! Responsibility: translate CLI arguments into [`GenerateOptions`], call the
//! core slice service, and display results.  No business logic lives here.

use std::path::PathBuf;

use tracing::{info, instrument};

use slicegen_adapters::{LocalFilesystem, laravel_blueprint};
use slicegen_core::application::{GenerateOptions, GenerateReport, SliceService};

use crate::{
    cli::{MakeArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `slicegen make` command.
///
/// Dispatch sequence:
/// 1. Resolve output roots (CLI flags override config)
/// 2. Run the generation (the service validates the name and stages all
///    writes; `--dry-run` stops after staging)
/// 3. Display the created tree and next-steps guidance
#[instrument(skip_all, fields(slice = %args.name))]
pub fn execute(
    args: MakeArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let slices_root = resolve_root(args.slices_root, config.paths.slices_root);
    let migrations_root = resolve_root(args.migrations_root, config.paths.migrations_root);

    let service = SliceService::new(
        Box::new(LocalFilesystem::new()),
        laravel_blueprint(),
        &slices_root,
        &migrations_root,
    );

    let options = GenerateOptions {
        migration: args.migration,
        dry_run: args.dry_run,
    };

    let report = service.generate(&args.name, options).map_err(CliError::Core)?;

    if report.dry_run {
        show_dry_run(&report, &output)?;
        return Ok(());
    }

    info!(slice = %report.pascal, root = %report.root.display(), "slice generated");

    output.success(&format!(
        "Slice '{}' created at {}",
        report.pascal,
        report.root.display()
    ))?;

    for file in &report.files {
        output.print(&format!("  + {}", file.display()))?;
    }
    if let Some(migration) = &report.migration {
        output.print(&format!("  + {}", migration.display()))?;
    }

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!(
            "  Register App\\Slices\\{p}\\Providers\\{p}ServiceProvider in bootstrap/providers.php",
            p = report.pascal
        ))?;
        output.print(&format!("  POST /{} is ready to handle requests", report.kebab))?;
        if report.migration.is_some() {
            output.print("  php artisan migrate")?;
        }
    }

    Ok(())
}

fn resolve_root(flag: Option<PathBuf>, configured: PathBuf) -> PathBuf {
    flag.unwrap_or(configured)
}

fn show_dry_run(report: &GenerateReport, output: &OutputManager) -> CliResult<()> {
    output.info(&format!(
        "Dry run: would create slice '{}' at {}",
        report.pascal,
        report.root.display()
    ))?;
    for dir in &report.directories {
        output.print(&format!("  dir  {}", dir.display()))?;
    }
    for file in &report.files {
        output.print(&format!("  file {}", file.display()))?;
    }
    if let Some(migration) = &report.migration {
        output.print(&format!("  file {}", migration.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_configured_root() {
        let resolved = resolve_root(
            Some(PathBuf::from("src/Slices")),
            PathBuf::from("app/Slices"),
        );
        assert_eq!(resolved, PathBuf::from("src/Slices"));
    }

    #[test]
    fn configured_root_used_without_flag() {
        let resolved = resolve_root(None, PathBuf::from("app/Slices"));
        assert_eq!(resolved, PathBuf::from("app/Slices"));
    }
}
