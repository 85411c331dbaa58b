//! Record trait defining the abstraction every list page works over

use crate::core::field::FieldValue;

/// A domain record flowing through the list pipeline.
///
/// All records have:
/// - a unique string id
/// - a resource name (e.g. "prescriptions", "deliveries")
/// - named fields readable as [`FieldValue`]s
/// - the set of fields searched by default
///
/// Records are treated as immutable while a page is rendered; actions replace
/// them wholesale in the owning store.
pub trait Record: Clone + Send + Sync + 'static {
    /// The plural resource name (e.g., "prescriptions")
    fn resource_name() -> &'static str;

    /// Unique identifier of this record
    fn id(&self) -> &str;

    /// Fields searched when the page does not override them
    fn searchable_fields() -> &'static [&'static str];

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Whether the record sits in the archived partition.
    ///
    /// Records without an archive flag are never archived.
    fn is_archived(&self) -> bool {
        false
    }

    /// Text of a field for searching; absent fields are empty
    fn field_text(&self, field: &str) -> String {
        self.field_value(field)
            .map(|value| value.search_text())
            .unwrap_or_default()
    }
}
