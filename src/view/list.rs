//! Stateful list controller owned by one page

use crate::core::error::{ConsoleError, QueryError, RecordError};
use crate::core::events::NotificationBus;
use crate::core::filter::{FilterCriteria, FilterSet, FilterValue};
use crate::core::pagination::{DEFAULT_PAGE_SIZE, Page, PageInfo, first_page, paginate};
use crate::core::query::QueryParams;
use crate::core::record::Record;
use crate::core::search::SearchQuery;
use crate::core::sort::{SortKind, SortSpec};
use crate::core::store::RecordStore;
use crate::view::ListQuery;
use indexmap::IndexMap;
use std::collections::HashMap;
use validator::Validate;

/// View-model of a list page.
///
/// Every setter that changes what is listed (search, filters, sort, page size,
/// archive toggle, source records) reruns the pipeline and goes back to page 1.
/// Page navigation only re-slices the cached result.
#[derive(Debug, Clone)]
pub struct ListView<T: Record + Validate> {
    store: RecordStore<T>,
    query: ListQuery,
    filters: FilterSet<T>,
    sort_kinds: HashMap<String, SortKind>,
    page_size: usize,
    result: Vec<T>,
    current: Page<T>,
}

impl<T: Record + Validate> ListView<T> {
    pub fn new(store: RecordStore<T>) -> Self {
        let mut view = Self {
            store,
            query: ListQuery::for_record::<T>(),
            filters: FilterSet::new(),
            sort_kinds: HashMap::new(),
            page_size: DEFAULT_PAGE_SIZE,
            result: Vec::new(),
            current: first_page(&[], DEFAULT_PAGE_SIZE),
        };
        view.refresh();
        view
    }

    /// View over seed records
    pub fn from_records(records: impl IntoIterator<Item = T>) -> Self {
        Self::new(RecordStore::seeded(records))
    }

    // === Configuration ===

    pub fn with_filters(mut self, filters: FilterSet<T>) -> Self {
        self.filters = filters;
        self.refresh();
        self
    }

    pub fn with_search_fields(mut self, fields: &[&str]) -> Self {
        self.query.search_fields = fields.iter().map(|f| f.to_string()).collect();
        self.refresh();
        self
    }

    pub fn with_sort_kind(mut self, field: &str, kind: SortKind) -> Self {
        self.sort_kinds.insert(field.to_string(), kind);
        self.refresh();
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.query.sort = Some(sort);
        self.refresh();
        self
    }

    /// Page size for a fresh view; zero is treated as 1
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self.refresh();
        self
    }

    /// Report record actions as toasts
    pub fn with_notifications(mut self, bus: NotificationBus) -> Self {
        self.store.attach_notifications(bus);
        self
    }

    /// Split the list into active and archived records, starting on active
    pub fn with_archive_partition(mut self) -> Self {
        self.query.archived = Some(false);
        self.refresh();
        self
    }

    // === Inputs ===

    pub fn set_search(&mut self, search: impl Into<SearchQuery>) {
        self.query.search = search.into();
        self.refresh();
    }

    pub fn set_filter(&mut self, key: &str, value: impl Into<FilterValue>) {
        self.query.criteria.set(key, value);
        self.refresh();
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.query.criteria = criteria;
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.query.criteria.clear();
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.query.sort = sort;
        self.refresh();
    }

    pub fn clear_sort(&mut self) {
        self.set_sort(None);
    }

    /// Column-header click: flip the current field, or start a new one descending
    pub fn toggle_sort(&mut self, field: &str) -> SortSpec {
        let next = SortSpec::toggle(self.query.sort.as_ref(), field);
        self.set_sort(Some(next.clone()));
        next
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), ConsoleError> {
        if page_size == 0 {
            tracing::warn!(resource = T::resource_name(), "rejected page size 0");
            return Err(QueryError::InvalidPageSize.into());
        }
        self.page_size = page_size;
        self.refresh();
        Ok(())
    }

    /// Switch between active and archived records.
    ///
    /// Has no effect on views without an archive partition.
    pub fn show_archived(&mut self, archived: bool) {
        if self.query.archived.is_some() {
            self.query.archived = Some(archived);
            self.refresh();
        }
    }

    pub fn replace_source(&mut self, records: impl IntoIterator<Item = T>) {
        self.store.replace_all(records);
        self.refresh();
    }

    /// Load state from deep-link parameters.
    ///
    /// Malformed filters or sorts are skipped with a warning. A page beyond the
    /// filtered result falls back to page 1.
    pub fn apply_params(&mut self, params: &QueryParams) {
        if let Some(q) = &params.q {
            self.query.search = SearchQuery::new(q.as_str());
        }

        match params.filter_criteria() {
            Ok(Some(criteria)) => self.query.criteria = criteria,
            Ok(None) => {}
            Err(err) => tracing::warn!(resource = T::resource_name(), error = %err, "ignoring filter parameter"),
        }

        match params.sort_spec() {
            Ok(Some(sort)) => self.query.sort = Some(sort),
            Ok(None) => {}
            Err(err) => tracing::warn!(resource = T::resource_name(), error = %err, "ignoring sort parameter"),
        }

        if let Some(limit) = params.limit() {
            self.page_size = limit;
        }

        if let (Some(archived), Some(_)) = (params.archived, self.query.archived) {
            self.query.archived = Some(archived);
        }

        self.refresh();

        let page = params.page();
        if page > 1 && self.go_to_page(page).is_err() {
            tracing::debug!(resource = T::resource_name(), page, "deep link page out of range, showing page 1");
        }
    }

    // === Record actions ===

    pub fn create(&mut self, record: T) -> Result<T, ConsoleError> {
        let created = self.store.create(record)?;
        self.refresh();
        Ok(created)
    }

    pub fn update(&mut self, record: T) -> Result<T, ConsoleError> {
        let updated = self.store.update(record)?;
        self.refresh();
        Ok(updated)
    }

    pub fn delete(&mut self, id: &str) -> Result<T, ConsoleError> {
        let deleted = self.store.delete(id)?;
        self.refresh();
        Ok(deleted)
    }

    pub fn modify<F>(&mut self, id: &str, change: F) -> Result<T, ConsoleError>
    where
        F: FnOnce(&mut T),
    {
        let modified = self.store.modify(id, change)?;
        self.refresh();
        Ok(modified)
    }

    /// Apply a change that may be refused for the record's current state
    pub fn try_modify<F>(&mut self, id: &str, change: F) -> Result<T, ConsoleError>
    where
        F: FnOnce(&mut T) -> Result<(), RecordError>,
    {
        let modified = self.store.try_modify(id, change)?;
        self.refresh();
        Ok(modified)
    }

    // === Navigation ===

    /// Jump to a page. Pages outside `1..=total_pages` are rejected and the
    /// current page is kept.
    pub fn go_to_page(&mut self, page: usize) -> Result<(), ConsoleError> {
        match paginate(&self.result, page, self.page_size) {
            Ok(next) => {
                self.current = next;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(resource = T::resource_name(), page, error = %err, "rejected page request");
                Err(err.into())
            }
        }
    }

    /// Move forward one page; returns false on the last page
    pub fn next_page(&mut self) -> bool {
        self.current.info.has_next && self.go_to_page(self.current.info.page + 1).is_ok()
    }

    /// Move back one page; returns false on the first page
    pub fn prev_page(&mut self) -> bool {
        self.current.info.has_prev && self.go_to_page(self.current.info.page - 1).is_ok()
    }

    // === Outputs ===

    /// The page currently shown
    pub fn page(&self) -> &Page<T> {
        &self.current
    }

    pub fn page_info(&self) -> PageInfo {
        self.current.info
    }

    pub fn current_page(&self) -> usize {
        self.current.info.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Filtered and sorted records across all pages
    pub fn filtered(&self) -> &[T] {
        &self.result
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.query.sort.as_ref()
    }

    pub fn showing_archived(&self) -> Option<bool> {
        self.query.archived
    }

    pub fn store(&self) -> &RecordStore<T> {
        &self.store
    }

    /// Count records per value of `field` within the visible partition,
    /// ignoring search and filters. Used for the stat cards above a list.
    pub fn counts_by(&self, field: &str) -> IndexMap<String, usize> {
        let mut counts = IndexMap::new();
        for record in self.partition() {
            let label = record
                .field_value(field)
                .map(|value| value.label())
                .unwrap_or_default();
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }

    /// Count records in the visible partition satisfying a predicate
    pub fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        self.partition().filter(|record| predicate(*record)).count()
    }

    fn partition(&self) -> impl Iterator<Item = &T> {
        let archived = self.query.archived;
        self.store
            .iter()
            .filter(move |record| archived.is_none_or(|flag| record.is_archived() == flag))
    }

    fn refresh(&mut self) {
        self.result = self
            .query
            .apply(self.store.iter(), &self.filters, &self.sort_kinds);
        self.current = first_page(&self.result, self.page_size);

        tracing::debug!(
            resource = T::resource_name(),
            source = self.store.len(),
            filtered = self.result.len(),
            page_size = self.page_size,
            "list recomputed"
        );
    }
}
