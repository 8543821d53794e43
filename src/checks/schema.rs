//! Declared schema verification.
//!
//! A store declares what its backing export promises about the
//! `default_iso` field; this pass compares each kind's declaration
//! against the conforming contract. A wrong field name short-circuits
//! the remaining properties since nothing else about the declaration
//! can be trusted.

use crate::issue::Issue;
use crate::model::{DEFAULT_ISO_FIELD, EntityKind, FALLBACK_ISO, KindSchema};

pub fn check_schema_contract(kind: EntityKind, schema: &KindSchema) -> Vec<Issue> {
    let mut issues = Vec::new();

    if schema.default_field != DEFAULT_ISO_FIELD {
        issues.push(Issue::schema_contract(
            kind,
            format!(
                "{} is missing the {} field (declared '{}')",
                kind, DEFAULT_ISO_FIELD, schema.default_field
            ),
        ));
        return issues;
    }

    if schema.nullable {
        issues.push(Issue::schema_contract(
            kind,
            format!("{}.{} should not be nullable", kind, DEFAULT_ISO_FIELD),
        ));
    }

    if schema.fallback != FALLBACK_ISO {
        issues.push(Issue::schema_contract(
            kind,
            format!(
                "{}.{} default should be '{}', got '{}'",
                kind, DEFAULT_ISO_FIELD, FALLBACK_ISO, schema.fallback
            ),
        ));
    }

    issues
}
