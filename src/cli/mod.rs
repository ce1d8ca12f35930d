//! CLI argument parsing for specdocs.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Specdocs: generate implementation plans and task breakdowns from feature specs.
///
/// Scans `specs/<feature>/spec.md` files and writes a `plan.md` and a
/// `tasks.md` next to each one that does not have them yet. Existing files
/// are never overwritten. Running without a subcommand is `generate`.
#[derive(Parser, Debug)]
#[command(name = "specdocs")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root (defaults to the nearest ancestor containing `.specify/` or `specs/`).
    #[arg(long, global = true, env = "SPECDOCS_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands for specdocs.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate missing plan and tasks documents (the default).
    ///
    /// Every feature directory is processed in name order. A failure in one
    /// directory is reported and the run continues with the next.
    Generate(GenerateArgs),

    /// Show which documents each feature directory has.
    ///
    /// Read-only: nothing is rendered or written.
    Status,

    /// Print the facts extracted from one spec file.
    ///
    /// Shows each field and whether it was found or defaulted.
    Extract(ExtractArgs),
}

/// Arguments for the `generate` command.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Render documents but write nothing.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run tally as JSON instead of the progress report.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `extract` command.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Path to a feature spec file.
    pub path: PathBuf,

    /// Print the record as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
