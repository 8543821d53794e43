//! Read-only access to entity storage.
//!
//! The checker never talks to a backend directly: it receives an
//! [`EntityStore`] and issues only the handful of queries it needs. All
//! query methods are fallible so a failing backend surfaces as a report
//! entry instead of tearing down the run.

pub mod memory;
pub mod snapshot;

pub use memory::MemoryStore;
pub use snapshot::{load_snapshot, parse_snapshot};

use anyhow::Result;

use crate::model::{Entity, EntityKind, KindSchema};
use crate::registry::IsoRegistry;

pub trait EntityStore {
    /// Declared field contract for the kind.
    fn schema(&self, kind: EntityKind) -> &KindSchema;

    /// Number of entities of the kind.
    fn total(&self, kind: EntityKind) -> Result<usize>;

    /// Number of entities of the kind with `default_iso` unset.
    fn count_missing_default(&self, kind: EntityKind) -> Result<usize>;

    /// The `default_iso` values not present in `allowed`, one per
    /// offending entity (duplicates preserved).
    fn defaults_not_in(&self, kind: EntityKind, allowed: &IsoRegistry) -> Result<Vec<String>>;

    /// All entities of the kind.
    fn entities(&self, kind: EntityKind) -> Result<Vec<&Entity>>;

    /// Whether the entity owns at least one text record with the given ISO.
    fn has_text(&self, kind: EntityKind, entity_id: &str, iso: &str) -> Result<bool>;

    /// Grouped count of `default_iso` values, ordered by count descending
    /// with alphabetical ties. Unset values are not grouped.
    fn default_distribution(&self, kind: EntityKind) -> Result<Vec<(String, usize)>>;

    /// Number of entities of the kind owning zero text records.
    fn count_without_texts(&self, kind: EntityKind) -> Result<usize>;
}
