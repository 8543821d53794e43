//! Per-kind statistics.

use anyhow::Result;

use crate::model::EntityKind;
use crate::registry::IsoRegistry;
use crate::report::{IsoCount, KindStats};
use crate::store::EntityStore;

/// Total count plus `default_iso` distribution for the kind, each value
/// flagged against the registry. Verbose runs additionally count
/// entities owning zero text records.
pub fn collect_statistics<S: EntityStore>(
    store: &S,
    kind: EntityKind,
    registry: &IsoRegistry,
    verbose: bool,
) -> Result<KindStats> {
    let total = store.total(kind)?;
    let distribution = store
        .default_distribution(kind)?
        .into_iter()
        .map(|(iso, count)| IsoCount {
            valid: registry.contains(&iso),
            iso,
            count,
        })
        .collect();
    let without_texts = verbose
        .then(|| store.count_without_texts(kind))
        .transpose()?;

    Ok(KindStats {
        kind,
        total,
        distribution,
        without_texts,
    })
}
