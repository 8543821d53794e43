//! Integrity passes.
//!
//! Each pass is a pure function over an injected [`EntityStore`] that
//! returns typed findings for one entity kind. The checker orchestrates
//! the passes and turns findings into report entries.
//!
//! ## Module Structure
//!
//! - `schema`: declared `default_iso` contract verification
//! - `nulls`: null `default_iso` scan
//! - `validity`: `default_iso` membership in the ISO registry
//! - `alignment`: default language has a matching text record
//! - `stats`: per-kind totals and `default_iso` distribution

pub mod alignment;
pub mod nulls;
pub mod schema;
pub mod stats;
pub mod validity;
