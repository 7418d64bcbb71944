//! # Filter Engine
//!
//! Computes the visible subset of a catalog for a [`FilterCriteria`].
//!
//! ## Matching rule
//!
//! An entry is included iff every active condition holds:
//!
//! - **Category**: the criteria category is unset, blank, or the `"all"`
//!   sentinel, OR the entry's category equals it case-insensitively.
//!   Entries without a category never satisfy an active category.
//! - **Text**: the query is empty or whitespace-only, OR it is a
//!   case-insensitive substring of the title, the description, or any tag.
//! - **Kind**: the criteria kind is unset, OR equals the entry's kind.
//!
//! The result preserves store order; nothing is re-sorted.

use serde::{Deserialize, Serialize};

use causa_core::text::{contains_folded, eq_folded, fold, is_blank};
use causa_core::{Entry, EntryKind};

use crate::store::CatalogStore;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// A query + category (+ kind) filter request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text query. Empty or whitespace-only matches everything.
    #[serde(default)]
    pub query: String,
    /// Category to restrict to. `None` or `"all"` disables the restriction.
    #[serde(default)]
    pub category: Option<String>,
    /// Entry kind to restrict to.
    #[serde(default)]
    pub kind: Option<EntryKind>,
}

impl FilterCriteria {
    /// Criteria with the given query and no category or kind restriction.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restrict to an entry kind.
    pub fn with_kind(mut self, kind: EntryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Whether a single entry satisfies these criteria.
    pub fn matches(&self, entry: &Entry) -> bool {
        Compiled::from(self).matches(entry)
    }
}

/// Criteria with the query folded once, so a filter pass does not refold
/// the needle for every entry.
struct Compiled<'a> {
    query: Option<String>,
    category: Option<&'a str>,
    kind: Option<EntryKind>,
}

impl<'a> From<&'a FilterCriteria> for Compiled<'a> {
    fn from(criteria: &'a FilterCriteria) -> Self {
        let query = (!is_blank(&criteria.query)).then(|| fold(&criteria.query));
        let category = criteria
            .category
            .as_deref()
            .filter(|c| !is_blank(c) && !eq_folded(c, ALL_CATEGORIES));
        Self {
            query,
            category,
            kind: criteria.kind,
        }
    }
}

impl Compiled<'_> {
    fn matches(&self, entry: &Entry) -> bool {
        self.kind_matches(entry) && self.category_matches(entry) && self.text_matches(entry)
    }

    fn kind_matches(&self, entry: &Entry) -> bool {
        self.kind.map_or(true, |k| entry.kind == k)
    }

    fn category_matches(&self, entry: &Entry) -> bool {
        match self.category {
            None => true,
            Some(wanted) => entry
                .category
                .as_deref()
                .is_some_and(|c| eq_folded(c, wanted)),
        }
    }

    fn text_matches(&self, entry: &Entry) -> bool {
        let Some(needle) = self.query.as_deref() else {
            return true;
        };
        contains_folded(&entry.title, needle)
            || contains_folded(&entry.description, needle)
            || entry.tags.iter().any(|t| contains_folded(t, needle))
    }
}

/// Compute the entries of `store` that satisfy `criteria`, in store order.
pub fn filter<'a>(store: &'a CatalogStore, criteria: &FilterCriteria) -> Vec<&'a Entry> {
    let compiled = Compiled::from(criteria);
    let visible: Vec<&Entry> = store.all().iter().filter(|e| compiled.matches(e)).collect();
    tracing::trace!(
        query = %criteria.query,
        category = ?criteria.category,
        kind = ?criteria.kind,
        matched = visible.len(),
        total = store.len(),
        "filtered catalog"
    );
    visible
}
