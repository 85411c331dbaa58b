//! List pipeline shared by every list page
//!
//! ```text
//! source → archive partition → search → filters → sort (optional) → paginate
//! ```
//!
//! [`ListQuery`] is the pure part: it turns a source collection into the
//! ordered, filtered result. [`ListView`] owns the page state and reruns the
//! query whenever an input changes.

pub mod list;

pub use list::ListView;

use crate::core::filter::{FilterCriteria, FilterSet};
use crate::core::record::Record;
use crate::core::search::SearchQuery;
use crate::core::sort::{SortKind, SortSpec, sort_records};
use std::collections::HashMap;

/// Everything that decides which records are listed and in what order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    /// Free-text search
    pub search: SearchQuery,

    /// Fields the search looks at
    pub search_fields: Vec<String>,

    /// User-selected filters
    pub criteria: FilterCriteria,

    /// Optional ordering; `None` keeps source order
    pub sort: Option<SortSpec>,

    /// `Some(flag)` restricts the list to records whose archived flag equals
    /// `flag`. `None` for pages without an archive.
    pub archived: Option<bool>,
}

impl ListQuery {
    /// Query searching the record type's default fields
    pub fn for_record<T: Record>() -> Self {
        Self {
            search_fields: T::searchable_fields().iter().map(|f| f.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Whether a record passes the partition, search and filters
    pub fn includes<T: Record>(&self, record: &T, filters: &FilterSet<T>) -> bool {
        self.archived.is_none_or(|flag| record.is_archived() == flag)
            && self.search.matches(record, &self.search_fields)
            && filters.matches(record, &self.criteria)
    }

    /// Run the pipeline up to (not including) pagination
    pub fn apply<'a, T, I>(
        &self,
        source: I,
        filters: &FilterSet<T>,
        sort_kinds: &HashMap<String, SortKind>,
    ) -> Vec<T>
    where
        T: Record,
        I: IntoIterator<Item = &'a T>,
    {
        let mut result: Vec<T> = source
            .into_iter()
            .filter(|record| self.includes(*record, filters))
            .cloned()
            .collect();

        if let Some(spec) = &self.sort {
            sort_records(&mut result, spec, sort_kinds);
        }

        result
    }
}
