//! Report formatting and printing utilities.
//!
//! This module is separate from the checker logic so locheck can be used
//! as a library without printing side effects; everything renders into an
//! injected writer.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issue::{Issue, Severity};
use crate::report::{IntegrityReport, KindStats, PassOutcome, PassStatus};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Warning mark for consistent output formatting.
pub const WARNING_MARK: &str = "\u{26a0}"; // ⚠

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Check(report) => print_check(report, &mut io::stdout().lock()),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

/// Render a full integrity report: pass status lines, issues, statistics,
/// and the summary line.
pub fn print_check<W: Write>(report: &IntegrityReport, writer: &mut W) {
    let _ = writeln!(writer, "{}", "Verifying default language integrity".bold());
    let _ = writeln!(writer);

    for status in &report.passes {
        print_pass_line(status, writer);
    }
    let _ = writeln!(writer);

    for issue in &report.issues {
        print_issue(issue, writer);
    }

    for stats in &report.stats {
        print_stats(stats, writer);
    }

    print_summary(report, writer);
}

fn print_pass_line<W: Write>(status: &PassStatus, writer: &mut W) {
    let prefix = format!("{}. {}", status.pass.number(), status.pass.label());
    let _ = match status.outcome {
        PassOutcome::Clean => writeln!(writer, "{} ... {}", prefix, SUCCESS_MARK.green()),
        PassOutcome::Errors(count) => writeln!(
            writer,
            "{} ... {} {}",
            prefix,
            FAILURE_MARK.red(),
            format!(
                "{} {}",
                count,
                if count == 1 { "error" } else { "errors" }
            )
            .red()
        ),
        PassOutcome::Warnings(count) => writeln!(
            writer,
            "{} ... {} {}",
            prefix,
            WARNING_MARK.yellow(),
            format!(
                "{} {}",
                count,
                if count == 1 { "warning" } else { "warnings" }
            )
            .yellow()
        ),
        PassOutcome::Skipped => {
            writeln!(writer, "{} ... {}", prefix, "skipped (fail-fast)".dimmed())
        }
    };
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message,
        issue.check.to_string().dimmed().cyan()
    );

    if let Some(kind) = issue.kind {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), kind);
    }

    for note in &issue.notes {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), note);
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_stats<W: Write>(stats: &KindStats, writer: &mut W) {
    let _ = writeln!(writer, "{}:", stats.kind.to_string().bold());
    let _ = writeln!(writer, "   Total entities: {}", stats.total);

    if !stats.distribution.is_empty() {
        let _ = writeln!(writer, "   Default ISO distribution:");
        for row in &stats.distribution {
            let marker = if row.valid {
                SUCCESS_MARK.green()
            } else {
                FAILURE_MARK.red()
            };
            let _ = writeln!(
                writer,
                "      {} {}: {} ({:.1}%)",
                marker,
                row.iso,
                row.count,
                stats.percent(row.count)
            );
        }
    }

    if let Some(count) = stats.without_texts
        && count > 0
    {
        let _ = writeln!(writer, "   Entities without any texts: {}", count);
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(report: &IntegrityReport, writer: &mut W) {
    let total_errors = report.error_count();
    let total_warnings = report.warning_count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
        if report.halted {
            let _ = writeln!(
                writer,
                "{}",
                "verification halted after first error (fail-fast)".dimmed()
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} {} across {} kinds - no issues found",
                report.entities_checked(),
                if report.entities_checked() == 1 {
                    "entity"
                } else {
                    "entities"
                },
                report.stats.len()
            )
            .green()
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::{CheckOptions, run_integrity_checks};
    use crate::model::{Entity, EntityKind, TextRecord};
    use crate::registry::IsoRegistry;
    use crate::store::MemoryStore;

    fn strip_ansi(s: &str) -> String {
        // Simple ANSI escape code stripper for testing
        let mut result = String::new();
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                // Skip until 'm'
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    fn render(report: &IntegrityReport) -> String {
        let mut output = Vec::new();
        print_check(report, &mut output);
        strip_ansi(&String::from_utf8(output).unwrap())
    }

    fn problem_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert_entity(
            EntityKind::Organization,
            Entity::new("org-1", "Org").with_default_iso("xx"),
        );
        store.insert_entity(
            EntityKind::Organization,
            Entity::new("org-2", "Other").with_default_iso("en"),
        );
        store.insert_text(EntityKind::Organization, TextRecord::new("t-1", "org-2", "en"));
        store
    }

    #[test]
    fn test_render_pass_lines_and_issues() {
        let report = run_integrity_checks(
            &problem_store(),
            &IsoRegistry::default(),
            &CheckOptions::default(),
        );
        let output = render(&report);

        assert!(output.contains("1. Checking declared default_iso schemas ... \u{2713}"));
        assert!(output.contains("3. Verifying default_iso values against the registry ... \u{2718} 1 error"));
        assert!(output.contains("error: \"invalid default_iso values: xx\"  invalid-iso"));
        assert!(output.contains("--> Organization"));
        assert!(output.contains("= note: 1 entity affected"));
        assert!(output.contains("warning: \"1 entity where default_iso has no matching text\""));
    }

    #[test]
    fn test_render_statistics_block() {
        let report = run_integrity_checks(
            &problem_store(),
            &IsoRegistry::default(),
            &CheckOptions {
                verbose: true,
                fail_fast: false,
            },
        );
        let output = render(&report);

        assert!(output.contains("Organization:"));
        assert!(output.contains("Total entities: 2"));
        assert!(output.contains("\u{2713} en: 1 (50.0%)"));
        assert!(output.contains("\u{2718} xx: 1 (50.0%)"));
        assert!(output.contains("Entities without any texts: 1"));
    }

    #[test]
    fn test_render_summary_counts() {
        let report = run_integrity_checks(
            &problem_store(),
            &IsoRegistry::default(),
            &CheckOptions::default(),
        );
        let output = render(&report);

        assert!(output.contains("2 problems (1 error, 1 warning)"));
    }

    #[test]
    fn test_render_skipped_passes_under_fail_fast() {
        let mut store = problem_store();
        store.insert_entity(
            EntityKind::Event,
            Entity::new("ev-1", "Event").without_default_iso(),
        );

        let report = run_integrity_checks(
            &store,
            &IsoRegistry::default(),
            &CheckOptions {
                verbose: false,
                fail_fast: true,
            },
        );
        let output = render(&report);

        assert!(output.contains("4. Checking that default_iso has matching texts ... skipped (fail-fast)"));
        assert!(output.contains("verification halted after first error (fail-fast)"));
    }

    #[test]
    fn test_render_success() {
        let mut store = MemoryStore::new();
        store.insert_entity(EntityKind::Group, Entity::new("g-1", "Group"));
        store.insert_text(EntityKind::Group, TextRecord::new("t-1", "g-1", "en"));

        let report =
            run_integrity_checks(&store, &IsoRegistry::default(), &CheckOptions::default());
        let output = render(&report);

        assert!(output.contains("Checked 1 entity across 3 kinds - no issues found"));
        assert!(!output.contains("problems"));
    }

    #[test]
    fn test_render_verbose_alignment_notes() {
        let mut store = MemoryStore::new();
        for i in 0..7 {
            store.insert_entity(
                EntityKind::Event,
                Entity::new(format!("ev-{}", i), format!("Event {}", i)),
            );
        }

        let report = run_integrity_checks(
            &store,
            &IsoRegistry::default(),
            &CheckOptions {
                verbose: true,
                fail_fast: false,
            },
        );
        let output = render(&report);

        assert!(output.contains("ev-0: default_iso='en' but no text with this ISO exists"));
        assert!(output.contains("= note: ... and 2 more"));
    }
}
