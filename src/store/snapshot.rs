//! JSON snapshot loading.
//!
//! A snapshot is one JSON document exported from the content database:
//! an optional `schema` block describing what the export promises about
//! `default_iso`, plus per-kind sections of entities and texts.
//!
//! ```json
//! {
//!   "schema": { "defaultField": "default_iso", "fallback": "en", "nullable": false },
//!   "organizations": {
//!     "entities": [{ "id": "org-1", "name": "Org", "default_iso": "en" }],
//!     "texts": [{ "id": "t-1", "owner": "org-1", "iso": "en", "description": "..." }]
//!   },
//!   "groups": { "entities": [], "texts": [] },
//!   "events": { "entities": [], "texts": [] }
//! }
//! ```

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Entity, EntityKind, KindSchema, TextRecord};

use super::MemoryStore;

#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    schema: KindSchema,
    #[serde(default)]
    organizations: KindDump,
    #[serde(default)]
    groups: KindDump,
    #[serde(default)]
    events: KindDump,
}

#[derive(Debug, Default, Deserialize)]
struct KindDump {
    #[serde(default)]
    entities: Vec<Entity>,
    #[serde(default)]
    texts: Vec<TextRecord>,
}

pub fn load_snapshot(path: &Path) -> Result<MemoryStore> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;
    parse_snapshot(&content)
        .with_context(|| format!("Failed to parse snapshot file: {}", path.display()))
}

pub fn parse_snapshot(content: &str) -> Result<MemoryStore> {
    let snapshot: Snapshot = serde_json::from_str(content)?;
    let mut store = MemoryStore::new();

    let sections = [
        (EntityKind::Organization, snapshot.organizations),
        (EntityKind::Group, snapshot.groups),
        (EntityKind::Event, snapshot.events),
    ];
    for (kind, dump) in sections {
        // The export declares one contract for all kinds.
        store.declare_schema(kind, snapshot.schema.clone());
        for entity in dump.entities {
            store.insert_entity(kind, entity);
        }
        for text in dump.texts {
            store.insert_text(kind, text);
        }
    }

    Ok(store)
}
