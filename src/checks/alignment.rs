//! Default-text alignment scan.
//!
//! For every entity, the default language should have a matching text
//! record. Entities failing this are warnings, never hard errors: the
//! entity still renders through its other texts, it just falls back
//! inconsistently.

use anyhow::Result;

use crate::issue::Issue;
use crate::model::EntityKind;
use crate::store::EntityStore;

/// An entity whose `default_iso` has no matching text record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MisalignedEntity {
    pub kind: EntityKind,
    pub id: String,
    pub iso: String,
}

/// Scan all entities of the kind. Entities with `default_iso` unset are
/// skipped here; the null scan already reports them.
pub fn check_text_alignment<S: EntityStore>(
    store: &S,
    kind: EntityKind,
) -> Result<Vec<MisalignedEntity>> {
    let mut misaligned = Vec::new();
    for entity in store.entities(kind)? {
        let Some(iso) = entity.default_iso.as_deref() else {
            continue;
        };
        if !store.has_text(kind, &entity.id, iso)? {
            misaligned.push(MisalignedEntity {
                kind,
                id: entity.id.clone(),
                iso: iso.to_string(),
            });
        }
    }
    Ok(misaligned)
}

/// Aggregate a kind's findings into one warning, or nothing when the
/// kind is clean.
pub fn misalignment_issue(
    kind: EntityKind,
    misaligned: &[MisalignedEntity],
    verbose: bool,
) -> Option<Issue> {
    (!misaligned.is_empty()).then(|| Issue::missing_default_texts(kind, misaligned, verbose))
}
