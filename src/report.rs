//! Aggregated result of an integrity run.
//!
//! The report is plain data: the checker fills it, the CLI layer renders
//! it. Keeping the two apart lets the checker run against in-memory
//! fixtures without printing side effects.

use crate::issue::{Issue, Severity};
use crate::model::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Schema,
    Nulls,
    Validity,
    Alignment,
    Statistics,
}

impl Pass {
    pub fn all() -> [Pass; 5] {
        [
            Pass::Schema,
            Pass::Nulls,
            Pass::Validity,
            Pass::Alignment,
            Pass::Statistics,
        ]
    }

    pub fn number(&self) -> usize {
        match self {
            Pass::Schema => 1,
            Pass::Nulls => 2,
            Pass::Validity => 3,
            Pass::Alignment => 4,
            Pass::Statistics => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Pass::Schema => "Checking declared default_iso schemas",
            Pass::Nulls => "Scanning for null default_iso values",
            Pass::Validity => "Verifying default_iso values against the registry",
            Pass::Alignment => "Checking that default_iso has matching texts",
            Pass::Statistics => "Collecting snapshot statistics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    Clean,
    Errors(usize),
    Warnings(usize),
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassStatus {
    pub pass: Pass,
    pub outcome: PassOutcome,
}

/// One row of the `default_iso` distribution for a kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoCount {
    pub iso: String,
    pub count: usize,
    pub valid: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindStats {
    pub kind: EntityKind,
    pub total: usize,
    /// Distribution ordered by count descending, ties alphabetical.
    pub distribution: Vec<IsoCount>,
    /// Entities owning zero text records; collected in verbose runs only.
    pub without_texts: Option<usize>,
}

impl KindStats {
    /// Share of the kind's entities carrying the given count, in percent.
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntegrityReport {
    pub passes: Vec<PassStatus>,
    pub issues: Vec<Issue>,
    pub stats: Vec<KindStats>,
    /// True when fail-fast aborted the run after a hard error.
    pub halted: bool,
}

impl IntegrityReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Total entities across all kinds, from the statistics pass.
    pub fn entities_checked(&self) -> usize {
        self.stats.iter().map(|stats| stats.total).sum()
    }
}
