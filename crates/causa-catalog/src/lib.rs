//! # causa-catalog — Catalog Store & Filter Engine
//!
//! - **Store** (`store.rs`): the immutable, insertion-ordered collection of
//!   catalog entries. Populated once by [`CatalogStore::load`], which rejects
//!   duplicate identifiers.
//!
//! - **Filter** (`filter.rs`): the pure function computing the visible
//!   subset of the catalog for a [`FilterCriteria`]: a free-text query, an
//!   optional category, and an optional entry kind. Stable: matches keep
//!   store order.
//!
//! - **Views** (`views.rs`): typed readers over the open attribute map for
//!   each entry kind: dates and read times for resources, skills and
//!   organizations for causes, issues, initiatives and map coordinates for
//!   regions.
//!
//! - **Seed** (`seed.rs`): the built-in catalog the discovery site ships with.
//!
//! The store is read-only after load; a `&CatalogStore` can be shared freely.

pub mod filter;
pub mod seed;
pub mod store;
pub mod views;

pub use filter::{filter, FilterCriteria, ALL_CATEGORIES};
pub use store::CatalogStore;
pub use views::{CauseView, Coordinates, Organization, RegionView, ResourceView};
