//! Entity and text-record data model.
//!
//! Three entity kinds share one shape: a content record carrying a
//! `default_iso` naming its default language, plus owned text records
//! holding per-language translations keyed by `(owner, iso)`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of the field every entity kind must declare.
pub const DEFAULT_ISO_FIELD: &str = "default_iso";

/// Language assigned to newly created entities.
pub const FALLBACK_ISO: &str = "en";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum EntityKind {
    Organization,
    Group,
    Event,
}

impl EntityKind {
    pub fn all() -> [EntityKind; 3] {
        [
            EntityKind::Organization,
            EntityKind::Group,
            EntityKind::Event,
        ]
    }

    /// Snapshot section name for this kind (e.g. `"organizations"`).
    pub fn section(&self) -> &'static str {
        match self {
            EntityKind::Organization => "organizations",
            EntityKind::Group => "groups",
            EntityKind::Event => "events",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Organization => write!(f, "Organization"),
            EntityKind::Group => write!(f, "Group"),
            EntityKind::Event => write!(f, "Event"),
        }
    }
}

/// A top-level content record owning localized texts.
///
/// `default_iso` is optional here because the checker must be able to
/// represent broken data; the constructor always assigns the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub default_iso: Option<String>,
}

impl Entity {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            default_iso: Some(FALLBACK_ISO.to_string()),
        }
    }

    pub fn with_default_iso(mut self, iso: impl Into<String>) -> Self {
        self.default_iso = Some(iso.into());
        self
    }

    pub fn without_default_iso(mut self) -> Self {
        self.default_iso = None;
        self
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A localized-content row belonging to exactly one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub id: String,
    pub owner: String,
    pub iso: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub get_involved: String,
    #[serde(default)]
    pub donate_prompt: String,
}

impl TextRecord {
    pub fn new(id: impl Into<String>, owner: impl Into<String>, iso: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            iso: iso.into(),
            description: String::new(),
            get_involved: String::new(),
            donate_prompt: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl fmt::Display for TextRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.owner, self.iso)
    }
}

/// Declared field contract for one entity kind.
///
/// Replaces per-field reflection at check time: a store declares what its
/// backing data promises about `default_iso`, and the schema pass compares
/// the declaration against the conforming contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KindSchema {
    pub default_field: String,
    pub fallback: String,
    pub nullable: bool,
}

impl KindSchema {
    /// The contract every kind is expected to meet: a non-nullable
    /// `default_iso` field defaulting to `"en"`.
    pub fn conforming() -> Self {
        Self {
            default_field: DEFAULT_ISO_FIELD.to_string(),
            fallback: FALLBACK_ISO.to_string(),
            nullable: false,
        }
    }
}

impl Default for KindSchema {
    fn default() -> Self {
        Self::conforming()
    }
}
