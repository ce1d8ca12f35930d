//! Command implementations for specdocs.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Running without a subcommand is the same as `generate`
//! with default arguments.

mod extract;
pub mod generate;
mod status;

use crate::cli::{Cli, Command, GenerateArgs};
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let root = cli.root.as_deref();

    match cli.command {
        None => generate::cmd_generate(root, GenerateArgs::default()),
        Some(Command::Generate(args)) => generate::cmd_generate(root, args),
        Some(Command::Status) => status::cmd_status(root),
        Some(Command::Extract(args)) => extract::cmd_extract(args),
    }
}
