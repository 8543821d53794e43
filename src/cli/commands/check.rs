use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary};
use crate::checker::{CheckOptions, run_integrity_checks};
use crate::cli::args::CheckCommand;
use crate::config::load_config;
use crate::store::load_snapshot;

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let loaded = load_config(&cwd)?;

    // CLI args > config file > defaults.
    let snapshot_path = cmd
        .common
        .snapshot
        .unwrap_or_else(|| PathBuf::from(&loaded.config.snapshot));
    let registry = loaded.config.registry();

    let store = load_snapshot(&snapshot_path)?;
    let options = CheckOptions {
        verbose: cmd.common.verbose,
        fail_fast: cmd.fail_fast,
    };
    let report = run_integrity_checks(&store, &registry, &options);

    let error_count = report.error_count();
    let warning_count = report.warning_count();
    Ok(CommandResult {
        summary: CommandSummary::Check(report),
        error_count,
        warning_count,
    })
}
