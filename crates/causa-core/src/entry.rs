//! # Catalog Entries
//!
//! An [`Entry`] is one catalog item: a library resource, a cause, or a
//! region. All three share the same record so that a single filter and a
//! single scorer can operate over the whole catalog.
//!
//! Entry-specific fields (publication date, read time, map coordinates,
//! organizations, initiatives, ...) live in the open `attributes` map. The
//! filter engine never looks at them; typed views in `causa-catalog` read
//! them when a caller needs structure.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::EntryId;
use crate::text::{eq_folded, fold};

/// The kind of catalog item an entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A library resource (guide, report, toolkit).
    #[default]
    Resource,
    /// A social cause a visitor can support.
    Cause,
    /// A world region with its issues and initiatives.
    Region,
}

impl EntryKind {
    /// Returns all kinds in canonical order.
    pub fn all_kinds() -> &'static [EntryKind] {
        &[Self::Resource, Self::Cause, Self::Region]
    }

    /// Returns the snake_case string identifier for this kind.
    ///
    /// Matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resource => "resource",
            Self::Cause => "cause",
            Self::Region => "region",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resource" => Ok(Self::Resource),
            "cause" => Ok(Self::Cause),
            "region" => Ok(Self::Region),
            other => Err(ValidationError::UnknownKind(other.to_string())),
        }
    }
}

/// A set of free-form labels with no case-insensitive duplicates.
///
/// Tags keep their first spelling and insertion order for display, but
/// equality between two sets ignores both order and case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Build a tag set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateTag`] if two tags are equal
    /// after case folding.
    pub fn new<I, S>(tags: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        let mut seen = std::collections::HashSet::new();
        for tag in tags {
            let tag = tag.into();
            if !seen.insert(fold(&tag)) {
                return Err(ValidationError::DuplicateTag(tag));
            }
            out.push(tag);
        }
        Ok(Self(out))
    }

    /// Iterate tags in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no tags.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any tag equals `label` case-insensitively.
    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|t| eq_folded(t, label))
    }
}

impl PartialEq for TagSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|t| other.contains(t))
    }
}

impl Eq for TagSet {}

impl TryFrom<Vec<String>> for TagSet {
    type Error = ValidationError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TagSet> for Vec<String> {
    fn from(tags: TagSet) -> Self {
        tags.0
    }
}

/// One catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier within a catalog.
    pub id: EntryId,
    /// What kind of item this is.
    #[serde(default)]
    pub kind: EntryKind,
    /// Display name.
    pub title: String,
    /// Free text description.
    #[serde(default)]
    pub description: String,
    /// Single classification label. Regions carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-form labels.
    #[serde(default)]
    pub tags: TagSet,
    /// Entry-specific fields, opaque to filtering and scoring.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl Entry {
    /// Create an entry with no description, category, tags, or attributes.
    pub fn new(id: EntryId, kind: EntryKind, title: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
            description: String::new(),
            category: None,
            tags: TagSet::default(),
            attributes: BTreeMap::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the tags.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateTag`] on case-insensitive duplicates.
    pub fn with_tags<I, S>(mut self, tags: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = TagSet::new(tags)?;
        Ok(self)
    }

    /// Set one attribute, replacing any previous value under the same key.
    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Look up an attribute.
    pub fn attribute(&self, key: &str) -> Option<&serde_json::Value> {
        self.attributes.get(key)
    }

    /// Whether `label` equals the category or any tag, case-insensitively.
    pub fn has_label(&self, label: &str) -> bool {
        self.tags.contains(label)
            || self
                .category
                .as_deref()
                .is_some_and(|c| eq_folded(c, label))
    }
}
