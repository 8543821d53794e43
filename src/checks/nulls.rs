//! Null `default_iso` scan.

use anyhow::Result;

use crate::issue::Issue;
use crate::model::EntityKind;
use crate::store::EntityStore;

/// Count entities of the kind with `default_iso` unset. A nonzero count
/// is a hard error.
pub fn check_null_defaults<S: EntityStore>(store: &S, kind: EntityKind) -> Result<Option<Issue>> {
    let count = store.count_missing_default(kind)?;
    Ok((count > 0).then(|| Issue::null_defaults(kind, count)))
}
