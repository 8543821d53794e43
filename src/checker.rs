//! Integrity check orchestration.
//!
//! A linear sequence of independent read-only passes over an injected
//! store. Every pass is fault-isolated: a failing store query becomes a
//! report entry with the severity of the pass that issued it, so one
//! broken query never takes down the whole run.

use crate::checks::{
    alignment::{check_text_alignment, misalignment_issue},
    nulls::check_null_defaults,
    schema::check_schema_contract,
    stats::collect_statistics,
    validity::check_registry_validity,
};
use crate::issue::{Issue, Severity};
use crate::model::EntityKind;
use crate::registry::IsoRegistry;
use crate::report::{IntegrityReport, Pass, PassOutcome, PassStatus};
use crate::store::EntityStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Include per-entity detail in the report.
    pub verbose: bool,
    /// Halt after the first pass that produced a hard error; the
    /// remaining passes are recorded as skipped.
    pub fail_fast: bool,
}

pub fn run_integrity_checks<S: EntityStore>(
    store: &S,
    registry: &IsoRegistry,
    options: &CheckOptions,
) -> IntegrityReport {
    let mut report = IntegrityReport::default();

    // 1. Declared schema contract.
    let issues: Vec<Issue> = EntityKind::all()
        .into_iter()
        .flat_map(|kind| check_schema_contract(kind, store.schema(kind)))
        .collect();
    if record_hard_pass(&mut report, Pass::Schema, issues, options.fail_fast) {
        return finish(report);
    }

    // 2. Null default_iso values.
    let mut issues = Vec::new();
    for kind in EntityKind::all() {
        match check_null_defaults(store, kind) {
            Ok(found) => issues.extend(found),
            Err(err) => issues.push(Issue::store_failure(
                Severity::Error,
                "Error checking null values",
                &err,
            )),
        }
    }
    if record_hard_pass(&mut report, Pass::Nulls, issues, options.fail_fast) {
        return finish(report);
    }

    // 3. Registry validity.
    let mut issues = Vec::new();
    for kind in EntityKind::all() {
        match check_registry_validity(store, kind, registry) {
            Ok(found) => issues.extend(found),
            Err(err) => issues.push(Issue::store_failure(
                Severity::Error,
                "Error checking ISO codes",
                &err,
            )),
        }
    }
    if record_hard_pass(&mut report, Pass::Validity, issues, options.fail_fast) {
        return finish(report);
    }

    // 4. Default-text alignment. Warnings only; never halts.
    let mut issues = Vec::new();
    for kind in EntityKind::all() {
        match check_text_alignment(store, kind) {
            Ok(found) => issues.extend(misalignment_issue(kind, &found, options.verbose)),
            Err(err) => issues.push(Issue::store_failure(
                Severity::Warning,
                "Error checking default text alignment",
                &err,
            )),
        }
    }
    record_soft_pass(&mut report, Pass::Alignment, issues);

    // 5. Statistics.
    let mut issues = Vec::new();
    for kind in EntityKind::all() {
        match collect_statistics(store, kind, registry, options.verbose) {
            Ok(stats) => report.stats.push(stats),
            Err(err) => issues.push(Issue::store_failure(
                Severity::Warning,
                "Error collecting statistics",
                &err,
            )),
        }
    }
    record_soft_pass(&mut report, Pass::Statistics, issues);

    finish(report)
}

/// Record a hard-error pass; returns true when fail-fast should halt the
/// run.
fn record_hard_pass(
    report: &mut IntegrityReport,
    pass: Pass,
    issues: Vec<Issue>,
    fail_fast: bool,
) -> bool {
    let outcome = if issues.is_empty() {
        PassOutcome::Clean
    } else {
        PassOutcome::Errors(issues.len())
    };
    report.passes.push(PassStatus { pass, outcome });

    let failed = !issues.is_empty();
    report.issues.extend(issues);

    if failed && fail_fast {
        mark_remaining_skipped(report);
        report.halted = true;
        return true;
    }
    false
}

fn record_soft_pass(report: &mut IntegrityReport, pass: Pass, issues: Vec<Issue>) {
    let outcome = if issues.is_empty() {
        PassOutcome::Clean
    } else {
        PassOutcome::Warnings(issues.len())
    };
    report.passes.push(PassStatus { pass, outcome });
    report.issues.extend(issues);
}

fn mark_remaining_skipped(report: &mut IntegrityReport) {
    for pass in Pass::all() {
        if !report.passes.iter().any(|status| status.pass == pass) {
            report.passes.push(PassStatus {
                pass,
                outcome: PassOutcome::Skipped,
            });
        }
    }
}

fn finish(mut report: IntegrityReport) -> IntegrityReport {
    report.issues.sort();
    report
}
