//! Locheck - default-language integrity checker
//!
//! Locheck is a CLI tool and library for verifying that localized content
//! entities (organizations, groups, events) are consistent about their
//! default language: every entity carries a non-null, registry-valid
//! `default_iso`, and the default language has a matching text record.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and output)
//! - `config`: Configuration file loading and parsing
//! - `checker`: Pass orchestration and fail-fast handling
//! - `checks`: The individual integrity passes
//! - `issue`: Issue type definitions
//! - `model`: Entity, text record, and schema contract types
//! - `registry`: Valid ISO code registry
//! - `report`: Aggregated run results
//! - `store`: Read-only entity storage (in-memory store, JSON snapshots)

pub mod checker;
pub mod checks;
pub mod cli;
pub mod config;
pub mod issue;
pub mod model;
pub mod registry;
pub mod report;
pub mod store;
