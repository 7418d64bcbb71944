//! # Catalog Store
//!
//! Holds the fixed collection of entries. The store is built once and never
//! mutated afterwards: there is no insert, no remove, and no interior
//! mutability, so shared references are all any consumer ever needs.

use std::collections::HashMap;

use causa_core::text::fold;
use causa_core::{CatalogError, Entry, EntryId, EntryKind};

/// Immutable, insertion-ordered collection of catalog entries.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    entries: Vec<Entry>,
    index: HashMap<EntryId, usize>,
}

impl CatalogStore {
    /// Load a catalog from a sequence of entries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two entries share an `id`.
    /// The whole load fails; no partially populated store is returned.
    pub fn load(entries: impl IntoIterator<Item = Entry>) -> Result<Self, CatalogError> {
        let mut store = Self::default();
        for entry in entries {
            if store.index.contains_key(&entry.id) {
                tracing::warn!(id = %entry.id, "rejecting catalog with duplicate entry id");
                return Err(CatalogError::DuplicateId {
                    id: entry.id.to_string(),
                });
            }
            store.index.insert(entry.id.clone(), store.entries.len());
            store.entries.push(entry);
        }
        tracing::debug!(entries = store.entries.len(), "catalog loaded");
        Ok(store)
    }

    /// All entries in insertion order.
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up an entry by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no entry has this identifier.
    pub fn by_id(&self, id: &str) -> Result<&Entry, CatalogError> {
        self.position(id)
            .map(|i| &self.entries[i])
            .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }

    /// Insertion position of an entry, used for stable tie-breaking.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one kind, in insertion order.
    pub fn of_kind(&self, kind: EntryKind) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    /// Distinct categories in first-seen order, folded to lowercase.
    ///
    /// These are the values a category filter can usefully take, besides
    /// the `"all"` sentinel.
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for category in self.entries.iter().filter_map(|e| e.category.as_deref()) {
            let folded = fold(category);
            if !out.contains(&folded) {
                out.push(folded);
            }
        }
        out
    }
}
