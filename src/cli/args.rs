//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Verify default-language integrity of a content snapshot
//! - `init`: Initialize locheck configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Snapshot file to verify (overrides config file)
    #[arg(long, env = "LOCHECK_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Show detailed output for each entity
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Stop at the first hard error instead of continuing
    #[arg(long)]
    pub fail_fast: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Verify default-language integrity (null, invalid, and unmatched default_iso values)
    Check(CheckCommand),
    /// Initialize a new .locheckrc.json configuration file
    Init,
}
