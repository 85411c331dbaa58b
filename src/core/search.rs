//! Case-insensitive free-text search over a record's fields

use crate::core::record::Record;
use serde::{Deserialize, Serialize};

/// A free-text search query.
///
/// An empty query matches every record. Otherwise a record matches when the
/// lowercase query is a substring of the lowercase text of at least one of the
/// searched fields. Fields are tested one at a time, so a query never matches
/// across a field boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        let raw = query.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// The query as typed
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Test a single piece of text
    pub fn matches_text(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.needle)
    }

    /// Test a record against the given fields
    pub fn matches<T, F>(&self, record: &T, fields: &[F]) -> bool
    where
        T: Record,
        F: AsRef<str>,
    {
        if self.is_empty() {
            return true;
        }

        fields
            .iter()
            .any(|field| self.matches_text(&record.field_text(field.as_ref())))
    }
}

impl From<String> for SearchQuery {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SearchQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<SearchQuery> for String {
    fn from(value: SearchQuery) -> Self {
        value.raw
    }
}
