use std::{cmp::Ordering, fmt};

use crate::checks::alignment::MisalignedEntity;
use crate::model::EntityKind;

/// Maximum number of entities listed per kind in verbose output.
pub const MAX_LISTED_ENTITIES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Check {
    SchemaContract,
    NullDefault,
    InvalidIso,
    MissingDefaultText,
    StoreFailure,
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::SchemaContract => write!(f, "schema-contract"),
            Check::NullDefault => write!(f, "null-default"),
            Check::InvalidIso => write!(f, "invalid-iso"),
            Check::MissingDefaultText => write!(f, "missing-default-text"),
            Check::StoreFailure => write!(f, "store-failure"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Entity kind the finding belongs to; `None` for failures that are not
    /// tied to one kind.
    pub kind: Option<EntityKind>,
    pub message: String,
    pub severity: Severity,
    pub check: Check,
    /// Extra lines rendered as notes under the issue.
    pub notes: Vec<String>,
}

impl Issue {
    pub fn schema_contract(kind: EntityKind, message: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            message: message.into(),
            severity: Severity::Error,
            check: Check::SchemaContract,
            notes: Vec::new(),
        }
    }

    pub fn null_defaults(kind: EntityKind, count: usize) -> Self {
        Self {
            kind: Some(kind),
            message: format!(
                "{} {} with null default_iso",
                count,
                if count == 1 { "entity" } else { "entities" }
            ),
            severity: Severity::Error,
            check: Check::NullDefault,
            notes: Vec::new(),
        }
    }

    pub fn invalid_defaults(kind: EntityKind, affected: usize, values: &[String]) -> Self {
        Self {
            kind: Some(kind),
            message: format!("invalid default_iso values: {}", values.join(", ")),
            severity: Severity::Error,
            check: Check::InvalidIso,
            notes: vec![format!(
                "{} {} affected",
                affected,
                if affected == 1 { "entity" } else { "entities" }
            )],
        }
    }

    pub fn missing_default_texts(
        kind: EntityKind,
        misaligned: &[MisalignedEntity],
        verbose: bool,
    ) -> Self {
        let mut notes = Vec::new();
        if verbose {
            for entry in misaligned.iter().take(MAX_LISTED_ENTITIES) {
                notes.push(format!(
                    "{}: default_iso='{}' but no text with this ISO exists",
                    entry.id, entry.iso
                ));
            }
            if misaligned.len() > MAX_LISTED_ENTITIES {
                notes.push(format!(
                    "... and {} more",
                    misaligned.len() - MAX_LISTED_ENTITIES
                ));
            }
        }

        Self {
            kind: Some(kind),
            message: format!(
                "{} {} where default_iso has no matching text",
                misaligned.len(),
                if misaligned.len() == 1 {
                    "entity"
                } else {
                    "entities"
                }
            ),
            severity: Severity::Warning,
            check: Check::MissingDefaultText,
            notes,
        }
    }

    pub fn store_failure(severity: Severity, context: &str, error: &anyhow::Error) -> Self {
        Self {
            kind: None,
            message: format!("{}: {}", context, error),
            severity,
            check: Check::StoreFailure,
            notes: Vec::new(),
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        // Sort by: check (pass order), kind (None last), message.
        //
        // Message comparison keeps the ordering total so repeated runs over
        // unchanged data produce identical reports.
        self.check
            .cmp(&other.check)
            .then_with(|| match (&self.kind, &other.kind) {
                (Some(a), Some(b)) => a.cmp(b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_check_display() {
        assert_eq!(Check::SchemaContract.to_string(), "schema-contract");
        assert_eq!(Check::NullDefault.to_string(), "null-default");
        assert_eq!(Check::InvalidIso.to_string(), "invalid-iso");
        assert_eq!(
            Check::MissingDefaultText.to_string(),
            "missing-default-text"
        );
        assert_eq!(Check::StoreFailure.to_string(), "store-failure");
    }

    #[test]
    fn test_null_defaults_message_pluralizes() {
        let one = Issue::null_defaults(EntityKind::Group, 1);
        assert_eq!(one.message, "1 entity with null default_iso");
        let many = Issue::null_defaults(EntityKind::Group, 3);
        assert_eq!(many.message, "3 entities with null default_iso");
        assert_eq!(many.severity, Severity::Error);
    }

    #[test]
    fn test_missing_default_texts_verbose_truncates() {
        let misaligned: Vec<MisalignedEntity> = (0..7)
            .map(|i| MisalignedEntity {
                kind: EntityKind::Event,
                id: format!("event-{}", i),
                iso: "fr".to_string(),
            })
            .collect();

        let issue = Issue::missing_default_texts(EntityKind::Event, &misaligned, true);
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.notes.len(), MAX_LISTED_ENTITIES + 1);
        assert_eq!(
            issue.notes[0],
            "event-0: default_iso='fr' but no text with this ISO exists"
        );
        assert_eq!(issue.notes.last().unwrap(), "... and 2 more");
    }

    #[test]
    fn test_missing_default_texts_quiet_has_no_notes() {
        let misaligned = vec![MisalignedEntity {
            kind: EntityKind::Event,
            id: "event-1".to_string(),
            iso: "de".to_string(),
        }];
        let issue = Issue::missing_default_texts(EntityKind::Event, &misaligned, false);
        assert!(issue.notes.is_empty());
        assert_eq!(
            issue.message,
            "1 entity where default_iso has no matching text"
        );
    }

    #[test]
    fn test_issue_ordering_is_deterministic() {
        let mut issues = vec![
            Issue::missing_default_texts(EntityKind::Event, &[], false),
            Issue::null_defaults(EntityKind::Organization, 2),
            Issue::null_defaults(EntityKind::Group, 2),
            Issue::schema_contract(EntityKind::Event, "broken"),
        ];
        issues.sort();

        assert_eq!(issues[0].check, Check::SchemaContract);
        assert_eq!(issues[1].kind, Some(EntityKind::Organization));
        assert_eq!(issues[2].kind, Some(EntityKind::Group));
        assert_eq!(issues[3].check, Check::MissingDefaultText);
    }
}
