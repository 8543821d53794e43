//! In-memory entity store.
//!
//! Backs the snapshot loader and serves as the fixture store in tests.

use std::collections::HashMap;

use anyhow::Result;

use crate::model::{Entity, EntityKind, KindSchema, TextRecord};
use crate::registry::IsoRegistry;

use super::EntityStore;

#[derive(Debug)]
struct KindData {
    schema: KindSchema,
    entities: Vec<Entity>,
    texts: Vec<TextRecord>,
}

impl Default for KindData {
    fn default() -> Self {
        Self {
            schema: KindSchema::conforming(),
            entities: Vec::new(),
            texts: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    organizations: KindData,
    groups: KindData,
    events: KindData,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn data(&self, kind: EntityKind) -> &KindData {
        match kind {
            EntityKind::Organization => &self.organizations,
            EntityKind::Group => &self.groups,
            EntityKind::Event => &self.events,
        }
    }

    fn data_mut(&mut self, kind: EntityKind) -> &mut KindData {
        match kind {
            EntityKind::Organization => &mut self.organizations,
            EntityKind::Group => &mut self.groups,
            EntityKind::Event => &mut self.events,
        }
    }

    pub fn insert_entity(&mut self, kind: EntityKind, entity: Entity) {
        self.data_mut(kind).entities.push(entity);
    }

    pub fn insert_text(&mut self, kind: EntityKind, text: TextRecord) {
        self.data_mut(kind).texts.push(text);
    }

    /// Override the declared contract for a kind, e.g. when loading a
    /// snapshot whose export declares its own schema.
    pub fn declare_schema(&mut self, kind: EntityKind, schema: KindSchema) {
        self.data_mut(kind).schema = schema;
    }
}

impl EntityStore for MemoryStore {
    fn schema(&self, kind: EntityKind) -> &KindSchema {
        &self.data(kind).schema
    }

    fn total(&self, kind: EntityKind) -> Result<usize> {
        Ok(self.data(kind).entities.len())
    }

    fn count_missing_default(&self, kind: EntityKind) -> Result<usize> {
        Ok(self
            .data(kind)
            .entities
            .iter()
            .filter(|entity| entity.default_iso.is_none())
            .count())
    }

    fn defaults_not_in(&self, kind: EntityKind, allowed: &IsoRegistry) -> Result<Vec<String>> {
        Ok(self
            .data(kind)
            .entities
            .iter()
            .filter_map(|entity| entity.default_iso.as_deref())
            .filter(|iso| !allowed.contains(iso))
            .map(str::to_string)
            .collect())
    }

    fn entities(&self, kind: EntityKind) -> Result<Vec<&Entity>> {
        Ok(self.data(kind).entities.iter().collect())
    }

    fn has_text(&self, kind: EntityKind, entity_id: &str, iso: &str) -> Result<bool> {
        Ok(self
            .data(kind)
            .texts
            .iter()
            .any(|text| text.owner == entity_id && text.iso == iso))
    }

    fn default_distribution(&self, kind: EntityKind) -> Result<Vec<(String, usize)>> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for entity in &self.data(kind).entities {
            if let Some(iso) = entity.default_iso.as_deref() {
                *counts.entry(iso).or_insert(0) += 1;
            }
        }

        let mut distribution: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(iso, count)| (iso.to_string(), count))
            .collect();
        distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(distribution)
    }

    fn count_without_texts(&self, kind: EntityKind) -> Result<usize> {
        let data = self.data(kind);
        Ok(data
            .entities
            .iter()
            .filter(|entity| !data.texts.iter().any(|text| text.owner == entity.id))
            .count())
    }
}
