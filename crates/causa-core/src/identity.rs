//! # Identity Newtypes
//!
//! Each identifier is a distinct type; you cannot pass a [`StepId`] where
//! an [`EntryId`] is expected. Both are free-form strings validated to be
//! non-empty at construction and at deserialization.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Stable identifier of a catalog entry (`"1"`, `"north-america"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntryId(String);

impl EntryId {
    /// Create an entry identifier, rejecting empty or whitespace-only input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyEntryId`] for blank input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::EmptyEntryId);
        }
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EntryId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntryId> for String {
    fn from(id: EntryId) -> Self {
        id.0
    }
}

impl Borrow<str> for EntryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a question step in a preference session (`"interests"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StepId(String);

impl StepId {
    /// Create a step identifier, rejecting empty or whitespace-only input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyStepId`] for blank input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.trim().is_empty() {
            return Err(ValidationError::EmptyStepId);
        }
        Ok(Self(s))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StepId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StepId> for String {
    fn from(id: StepId) -> Self {
        id.0
    }
}

impl Borrow<str> for StepId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_id_accepts_non_empty() {
        let id = EntryId::new("north-america").unwrap();
        assert_eq!(id.as_str(), "north-america");
        assert_eq!(id.to_string(), "north-america");
    }

    #[test]
    fn entry_id_rejects_blank() {
        assert_eq!(EntryId::new(""), Err(ValidationError::EmptyEntryId));
        assert_eq!(EntryId::new("   "), Err(ValidationError::EmptyEntryId));
    }

    #[test]
    fn step_id_rejects_blank() {
        assert_eq!(StepId::new("\t"), Err(ValidationError::EmptyStepId));
    }

    #[test]
    fn entry_id_deserialize_validates() {
        let ok: EntryId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(ok.as_str(), "7");
        assert!(serde_json::from_str::<EntryId>("\"\"").is_err());
    }

    #[test]
    fn entry_id_serializes_as_plain_string() {
        let id = EntryId::new("3").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"3\"");
    }

    #[test]
    fn borrow_allows_str_lookup() {
        let mut map = std::collections::HashMap::new();
        map.insert(StepId::new("skills").unwrap(), 1usize);
        assert_eq!(map.get("skills"), Some(&1));
    }
}
