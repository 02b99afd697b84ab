//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "slicegen",
    bin_name = "slicegen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Laravel vertical-slice generator",
    long_about = "Slicegen generates self-contained Laravel vertical slices: \
                  controller, request, routes, action handler, model, \
                  service provider, view, and test in one directory.",
    after_help = "EXAMPLES:\n\
        \x20 slicegen make CreateOrder\n\
        \x20 slicegen make create-order --migration\n\
        \x20 slicegen list --format json\n\
        \x20 slicegen completions bash > /usr/share/bash-completion/completions/slicegen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new vertical slice.
    #[command(
        visible_alias = "m",
        about = "Generate a new vertical slice",
        after_help = "EXAMPLES:\n\
            \x20 slicegen make CreateOrder\n\
            \x20 slicegen make create-order --migration\n\
            \x20 slicegen make Invoice --dry-run"
    )]
    Make(MakeArgs),

    /// List existing slices.
    #[command(
        visible_alias = "ls",
        about = "List existing slices",
        after_help = "EXAMPLES:\n\
            \x20 slicegen list\n\
            \x20 slicegen list --format json\n\
            \x20 slicegen list --slices-root src/Slices"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 slicegen completions bash > ~/.local/share/bash-completion/completions/slicegen\n\
            \x20 slicegen completions zsh  > ~/.zfunc/_slicegen\n\
            \x20 slicegen completions fish > ~/.config/fish/completions/slicegen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── make ──────────────────────────────────────────────────────────────────────

/// Arguments for `slicegen make`.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Slice name.  Any casing is accepted; `create-order`, `create_order`
    /// and `CreateOrder` all produce the `CreateOrder` slice.
    #[arg(value_name = "NAME", help = "Slice name (any casing)")]
    pub name: String,

    /// Also generate a timestamped database migration.
    #[arg(short = 'm', long = "migration", help = "Also generate a migration")]
    pub migration: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Directory slices are generated under.
    #[arg(
        long = "slices-root",
        value_name = "DIR",
        help = "Slices root directory (default: app/Slices)"
    )]
    pub slices_root: Option<PathBuf>,

    /// Directory migrations are written to.
    #[arg(
        long = "migrations-root",
        value_name = "DIR",
        help = "Migrations directory (default: database/migrations)"
    )]
    pub migrations_root: Option<PathBuf>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `slicegen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Directory to scan for slices.
    #[arg(
        long = "slices-root",
        value_name = "DIR",
        help = "Slices root directory (default: app/Slices)"
    )]
    pub slices_root: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `slicegen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_make_command() {
        let cli = Cli::parse_from(["slicegen", "make", "CreateOrder", "--migration"]);
        match cli.command {
            Commands::Make(args) => {
                assert_eq!(args.name, "CreateOrder");
                assert!(args.migration);
                assert!(!args.dry_run);
            }
            other => panic!("expected Make, got {other:?}"),
        }
    }

    #[test]
    fn make_alias() {
        let cli = Cli::parse_from(["slicegen", "m", "Order"]);
        assert!(matches!(cli.command, Commands::Make(_)));
    }

    #[test]
    fn parse_list_with_format() {
        let cli = Cli::parse_from(["slicegen", "list", "--format", "json"]);
        match cli.command {
            Commands::List(args) => assert!(matches!(args.format, ListFormat::Json)),
            other => panic!("expected List, got {other:?}"),
        }
    }

    #[test]
    fn slices_root_override() {
        let cli = Cli::parse_from(["slicegen", "make", "Order", "--slices-root", "src/Slices"]);
        if let Commands::Make(args) = cli.command {
            assert_eq!(args.slices_root, Some(PathBuf::from("src/Slices")));
        } else {
            panic!("expected Make command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["slicegen", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
