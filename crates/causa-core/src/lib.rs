#![deny(missing_docs)]

//! # causa-core — Foundational Types for the Causa Discovery Engine
//!
//! This crate defines the types that every other crate in the workspace
//! depends on. It has no internal crate dependencies, only `serde`,
//! `serde_json`, and `thiserror` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** [`EntryId`] and [`StepId`] are
//!    distinct, validated types. You cannot look up a catalog entry with a
//!    quiz step identifier.
//!
//! 2. **One [`Entry`] shape for every catalog item.** Resources, causes, and
//!    regions share the same record; the [`EntryKind`] discriminant and the
//!    open `attributes` map carry what differs between them.
//!
//! 3. **Case-insensitive labels by construction.** A [`TagSet`] cannot hold
//!    two tags that differ only in case. All comparisons go through the
//!    folding helpers in [`text`], so the filter and the scorer agree on
//!    what "the same label" means.
//!
//! 4. **[`CausaError`] hierarchy.** Structured errors with `thiserror`, no
//!    `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod entry;
pub mod error;
pub mod identity;
pub mod text;

// Re-export primary types at crate root for ergonomic imports.
pub use entry::{Entry, EntryKind, TagSet};
pub use error::{CatalogError, CausaError, SessionError, ValidationError};
pub use identity::{EntryId, StepId};
