//! # Typed Entry Views
//!
//! The filter engine treats `attributes` as opaque. Callers that render a
//! resource card, a cause detail panel, or a region on the map need those
//! fields with structure; the views here read them on demand.
//!
//! A missing attribute is `None` (or empty). An attribute that is present
//! with the wrong shape is a [`CatalogError::Attribute`].

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use causa_core::text::{contains_folded, fold, is_blank};
use causa_core::{CatalogError, Entry, EntryKind};

/// Read and decode one attribute.
fn attribute<T: DeserializeOwned>(entry: &Entry, key: &str) -> Result<Option<T>, CatalogError> {
    match entry.attribute(key) {
        None => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| CatalogError::Attribute {
                id: entry.id.to_string(),
                attribute: key.to_string(),
                reason: e.to_string(),
            }),
    }
}

fn require_kind(entry: &Entry, kind: EntryKind) -> Result<(), CatalogError> {
    if entry.kind != kind {
        return Err(CatalogError::Attribute {
            id: entry.id.to_string(),
            attribute: "kind".to_string(),
            reason: format!("expected a {kind}, found a {}", entry.kind),
        });
    }
    Ok(())
}

// ─── Resource ────────────────────────────────────────────────────────

/// A library resource: guide, report, toolkit.
#[derive(Debug, Clone)]
pub struct ResourceView<'a> {
    /// The underlying entry.
    pub entry: &'a Entry,
    /// Publication date (`date` attribute, `YYYY-MM-DD`).
    pub date: Option<NaiveDate>,
    /// Estimated reading time (`read_time` attribute), e.g. `"8 min read"`.
    pub read_time: Option<String>,
    /// Cover image (`image_url` attribute).
    pub image_url: Option<String>,
}

impl<'a> ResourceView<'a> {
    /// Read the resource attributes of an entry.
    pub fn from_entry(entry: &'a Entry) -> Result<Self, CatalogError> {
        require_kind(entry, EntryKind::Resource)?;
        Ok(Self {
            entry,
            date: attribute(entry, "date")?,
            read_time: attribute(entry, "read_time")?,
            image_url: attribute(entry, "image_url")?,
        })
    }

    /// Publication date rendered as `May 15, 2023`.
    pub fn display_date(&self) -> Option<String> {
        self.date.map(|d| d.format("%b %-d, %Y").to_string())
    }
}

// ─── Cause ───────────────────────────────────────────────────────────

/// An organization working on a cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization name.
    pub name: String,
    /// Website link.
    #[serde(default)]
    pub website: String,
}

/// A cause a visitor can support.
#[derive(Debug, Clone)]
pub struct CauseView<'a> {
    /// The underlying entry.
    pub entry: &'a Entry,
    /// Skills the cause needs (`skills` attribute).
    pub skills: Vec<String>,
    /// Organizations working on it (`organizations` attribute).
    pub organizations: Vec<Organization>,
    /// Cover image (`image_url` attribute).
    pub image_url: Option<String>,
}

impl<'a> CauseView<'a> {
    /// Read the cause attributes of an entry.
    pub fn from_entry(entry: &'a Entry) -> Result<Self, CatalogError> {
        require_kind(entry, EntryKind::Cause)?;
        Ok(Self {
            entry,
            skills: attribute(entry, "skills")?.unwrap_or_default(),
            organizations: attribute(entry, "organizations")?.unwrap_or_default(),
            image_url: attribute(entry, "image_url")?,
        })
    }
}

// ─── Region ──────────────────────────────────────────────────────────

/// Marker position on the world map, as CSS-style percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Offset from the top edge, e.g. `"30%"`.
    pub top: String,
    /// Offset from the left edge, e.g. `"20%"`.
    pub left: String,
}

/// A world region with its issues and initiatives.
#[derive(Debug, Clone)]
pub struct RegionView<'a> {
    /// The underlying entry.
    pub entry: &'a Entry,
    /// Initiatives active in the region (`initiatives` attribute).
    pub initiatives: Vec<String>,
    /// Map marker position (`coordinates` attribute).
    pub coordinates: Option<Coordinates>,
}

impl<'a> RegionView<'a> {
    /// Read the region attributes of an entry.
    pub fn from_entry(entry: &'a Entry) -> Result<Self, CatalogError> {
        require_kind(entry, EntryKind::Region)?;
        Ok(Self {
            entry,
            initiatives: attribute(entry, "initiatives")?.unwrap_or_default(),
            coordinates: attribute(entry, "coordinates")?,
        })
    }

    /// The region's issues. Issues are the entry's tags, so they take part
    /// in filtering and scoring like any other label.
    pub fn issues(&self) -> impl Iterator<Item = &'a str> {
        self.entry.tags.iter()
    }

    /// Initiatives whose name contains `query`, case-insensitively.
    /// A blank query returns every initiative.
    pub fn initiatives_matching(&self, query: &str) -> Vec<&str> {
        if is_blank(query) {
            return self.initiatives.iter().map(String::as_str).collect();
        }
        let needle = fold(query);
        self.initiatives
            .iter()
            .map(String::as_str)
            .filter(|i| contains_folded(i, &needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use causa_core::EntryId;
    use serde_json::json;

    fn region() -> Entry {
        Entry::new(EntryId::new("europe").unwrap(), EntryKind::Region, "Europe")
            .with_tags(["Migration Crisis", "Climate Action", "Digital Rights"])
            .unwrap()
            .with_attribute(
                "initiatives",
                json!([
                    "Refugee Support Network",
                    "Climate Pact Alliance",
                    "Digital Rights Observatory"
                ]),
            )
            .with_attribute("coordinates", json!({"top": "25%", "left": "48%"}))
    }

    #[test]
    fn region_view_reads_attributes() {
        let entry = region();
        let view = RegionView::from_entry(&entry).unwrap();
        assert_eq!(view.initiatives.len(), 3);
        assert_eq!(
            view.coordinates,
            Some(Coordinates {
                top: "25%".to_string(),
                left: "48%".to_string()
            })
        );
        let issues: Vec<&str> = view.issues().collect();
        assert_eq!(issues[0], "Migration Crisis");
    }

    #[test]
    fn initiatives_matching_is_case_insensitive() {
        let entry = region();
        let view = RegionView::from_entry(&entry).unwrap();
        assert_eq!(view.initiatives_matching("RIGHTS"), vec!["Digital Rights Observatory"]);
        assert_eq!(view.initiatives_matching("  ").len(), 3);
        assert!(view.initiatives_matching("ocean").is_empty());
    }

    #[test]
    fn region_view_rejects_malformed_initiatives() {
        let entry = region().with_attribute("initiatives", json!("not a list"));
        let err = RegionView::from_entry(&entry).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Attribute { ref attribute, .. } if attribute == "initiatives"
        ));
    }

    #[test]
    fn region_view_rejects_wrong_kind() {
        let entry = Entry::new(EntryId::new("1").unwrap(), EntryKind::Resource, "Guide");
        let err = RegionView::from_entry(&entry).unwrap_err();
        assert!(err.to_string().contains("expected a region"));
    }

    #[test]
    fn resource_view_parses_date() {
        let entry = Entry::new(
            EntryId::new("1").unwrap(),
            EntryKind::Resource,
            "Understanding Climate Justice",
        )
        .with_attribute("date", json!("2023-05-15"))
        .with_attribute("read_time", json!("8 min read"));
        let view = ResourceView::from_entry(&entry).unwrap();
        assert_eq!(view.date, NaiveDate::from_ymd_opt(2023, 5, 15));
        assert_eq!(view.display_date().as_deref(), Some("May 15, 2023"));
        assert_eq!(view.read_time.as_deref(), Some("8 min read"));
        assert!(view.image_url.is_none());
    }

    #[test]
    fn resource_view_rejects_bad_date() {
        let entry = Entry::new(EntryId::new("1").unwrap(), EntryKind::Resource, "Guide")
            .with_attribute("date", json!("15/05/2023"));
        assert!(ResourceView::from_entry(&entry).is_err());
    }

    #[test]
    fn cause_view_reads_organizations() {
        let entry = Entry::new(EntryId::new("2").unwrap(), EntryKind::Cause, "Digital Rights")
            .with_attribute("skills", json!(["Programming", "Research"]))
            .with_attribute(
                "organizations",
                json!([{"name": "Access Now", "website": "#"}]),
            );
        let view = CauseView::from_entry(&entry).unwrap();
        assert_eq!(view.skills, vec!["Programming", "Research"]);
        assert_eq!(view.organizations[0].name, "Access Now");
    }

    #[test]
    fn cause_view_defaults_missing_lists() {
        let entry = Entry::new(EntryId::new("3").unwrap(), EntryKind::Cause, "Food Security");
        let view = CauseView::from_entry(&entry).unwrap();
        assert!(view.skills.is_empty());
        assert!(view.organizations.is_empty());
    }
}
