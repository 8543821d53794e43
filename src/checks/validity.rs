//! Registry validity scan.

use anyhow::Result;

use crate::issue::Issue;
use crate::model::EntityKind;
use crate::registry::IsoRegistry;
use crate::store::EntityStore;

/// Collect the set of `default_iso` values of the kind that are not in
/// the registry. A nonempty set is a hard error listing the offending
/// values (deduplicated, sorted) and how many entities carry one.
pub fn check_registry_validity<S: EntityStore>(
    store: &S,
    kind: EntityKind,
    registry: &IsoRegistry,
) -> Result<Option<Issue>> {
    let offending = store.defaults_not_in(kind, registry)?;
    if offending.is_empty() {
        return Ok(None);
    }

    let affected = offending.len();
    let mut values = offending;
    values.sort();
    values.dedup();

    Ok(Some(Issue::invalid_defaults(kind, affected, &values)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Entity;
    use crate::store::MemoryStore;

    #[test]
    fn test_valid_defaults_report_nothing() {
        let mut store = MemoryStore::new();
        store.insert_entity(
            EntityKind::Organization,
            Entity::new("a", "A").with_default_iso("fr"),
        );
        store.insert_entity(EntityKind::Organization, Entity::new("b", "B"));

        let issue = check_registry_validity(&store, EntityKind::Organization, &IsoRegistry::default())
            .unwrap();
        assert_eq!(issue, None);
    }

    #[test]
    fn test_invalid_default_is_a_hard_error() {
        let mut store = MemoryStore::new();
        store.insert_entity(
            EntityKind::Organization,
            Entity::new("a", "A").with_default_iso("xx"),
        );

        let issue =
            check_registry_validity(&store, EntityKind::Organization, &IsoRegistry::default())
                .unwrap()
                .unwrap();
        assert_eq!(issue.message, "invalid default_iso values: xx");
        assert_eq!(issue.notes, vec!["1 entity affected"]);
    }

    #[test]
    fn test_offending_values_deduplicated_and_sorted() {
        let mut store = MemoryStore::new();
        for (id, iso) in [("a", "zz"), ("b", "xx"), ("c", "zz"), ("d", "xx")] {
            store.insert_entity(EntityKind::Event, Entity::new(id, id).with_default_iso(iso));
        }

        let issue = check_registry_validity(&store, EntityKind::Event, &IsoRegistry::default())
            .unwrap()
            .unwrap();
        assert_eq!(issue.message, "invalid default_iso values: xx, zz");
        assert_eq!(issue.notes, vec!["4 entities affected"]);
    }

    #[test]
    fn test_unset_defaults_are_not_validity_findings() {
        let mut store = MemoryStore::new();
        store.insert_entity(
            EntityKind::Group,
            Entity::new("a", "A").without_default_iso(),
        );

        let issue =
            check_registry_validity(&store, EntityKind::Group, &IsoRegistry::default()).unwrap();
        assert_eq!(issue, None);
    }
}
