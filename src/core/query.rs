//! Deep-link query parameters
//!
//! The routing collaborator hands over the current URL query string. Pages
//! read their initial search term, filters, sort and page from it.
//!
//! # Format
//!
//! ```text
//! ?q=smith
//! ?page=2&limit=10
//! ?filter={"status":"pending","priority":"urgent"}
//! ?sort=total:desc&archived=true
//! ```

use crate::core::error::QueryError;
use crate::core::field::FieldValue;
use crate::core::filter::{FilterCriteria, FilterValue};
use crate::core::sort::SortSpec;
use serde::Deserialize;
use serde_json::Value;

/// Largest page size a deep link may request
pub const MAX_PAGE_SIZE: usize = 100;

/// Query parameters for a list page
///
/// All parameters are optional; absent ones leave the page defaults alone.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Page number (starts at 1)
    pub page: Option<usize>,

    /// Number of items per page
    pub limit: Option<usize>,

    /// Search term
    #[serde(alias = "search")]
    pub q: Option<String>,

    /// Filters as a JSON object, e.g. `{"status": "pending"}`
    pub filter: Option<String>,

    /// `field`, `field:asc` or `field:desc`
    pub sort: Option<String>,

    /// Show the archived partition
    pub archived: Option<bool>,
}

impl QueryParams {
    /// Parse a raw query string, with or without the leading `?`.
    ///
    /// Unknown keys are ignored. Values that do not parse are dropped with a
    /// warning.
    pub fn from_query_string(query: &str) -> Self {
        let mut params = QueryParams::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "page" => params.page = parse_number(&key, &value),
                "limit" => params.limit = parse_number(&key, &value),
                "q" | "search" => params.q = Some(value.into_owned()),
                "filter" => params.filter = Some(value.into_owned()),
                "sort" => params.sort = Some(value.into_owned()),
                "archived" => {
                    params.archived = match value.as_ref() {
                        "true" | "1" => Some(true),
                        "false" | "0" => Some(false),
                        other => {
                            tracing::warn!(key = "archived", value = other, "ignoring invalid query parameter");
                            None
                        }
                    }
                }
                _ => {}
            }
        }

        params
    }

    /// Requested page, at least 1
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    /// Requested page size, clamped to `1..=MAX_PAGE_SIZE`
    pub fn limit(&self) -> Option<usize> {
        self.limit.map(|limit| limit.clamp(1, MAX_PAGE_SIZE))
    }

    /// Decode the filter object into criteria
    pub fn filter_criteria(&self) -> Result<Option<FilterCriteria>, QueryError> {
        let Some(raw) = &self.filter else {
            return Ok(None);
        };

        let value: Value =
            serde_json::from_str(raw).map_err(|e| QueryError::InvalidFilter(e.to_string()))?;
        let object = value
            .as_object()
            .ok_or_else(|| QueryError::InvalidFilter("expected a JSON object".to_string()))?;

        let mut criteria = FilterCriteria::new();
        for (key, value) in object {
            let filter = match value {
                Value::String(s) => FilterValue::parse(s),
                Value::Null => FilterValue::Any,
                Value::Bool(_) | Value::Number(_) => FilterValue::from(FieldValue::from(value)),
                _ => {
                    return Err(QueryError::InvalidFilter(format!(
                        "unsupported value for '{}'",
                        key
                    )));
                }
            };
            criteria.set(key.as_str(), filter);
        }

        Ok(Some(criteria))
    }

    /// Decode the sort expression
    pub fn sort_spec(&self) -> Result<Option<SortSpec>, QueryError> {
        self.sort.as_deref().map(SortSpec::parse).transpose()
    }
}

fn parse_number(key: &str, value: &str) -> Option<usize> {
    match value.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            tracing::warn!(key, value, "ignoring invalid query parameter");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sort::SortDirection;

    #[test]
    fn test_query_params_defaults() {
        let params = QueryParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), None);
        assert_eq!(params.filter_criteria().unwrap(), None);
        assert_eq!(params.sort_spec().unwrap(), None);
    }

    #[test]
    fn test_parse_query_string() {
        let params = QueryParams::from_query_string(
            "?q=John%20Smith&page=2&limit=500&sort=date_issued:desc&archived=true&utm=x",
        );
        assert_eq!(params.q.as_deref(), Some("John Smith"));
        assert_eq!(params.page(), 2);
        assert_eq!(params.limit(), Some(MAX_PAGE_SIZE));
        assert_eq!(params.archived, Some(true));

        let sort = params.sort_spec().unwrap().unwrap();
        assert_eq!(sort.field, "date_issued");
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn test_invalid_numbers_are_dropped() {
        let params = QueryParams::from_query_string("page=two&limit=-1&archived=maybe");
        assert_eq!(params.page, None);
        assert_eq!(params.limit, None);
        assert_eq!(params.archived, None);
    }

    #[test]
    fn test_filter_object_to_criteria() {
        let params = QueryParams {
            filter: Some(r#"{"status": "pending", "priority": "all", "refills": 2, "read": false}"#.to_string()),
            ..Default::default()
        };
        let criteria = params.filter_criteria().unwrap().unwrap();

        assert_eq!(
            criteria.get("status"),
            &FilterValue::Is(FieldValue::String("pending".to_string()))
        );
        assert_eq!(criteria.get("priority"), &FilterValue::Any);
        assert_eq!(criteria.get("refills"), &FilterValue::Is(FieldValue::Integer(2)));
        assert_eq!(criteria.get("read"), &FilterValue::Is(FieldValue::Boolean(false)));
    }

    #[test]
    fn test_malformed_filter_is_an_error() {
        let params = QueryParams {
            filter: Some("[1, 2]".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.filter_criteria(),
            Err(QueryError::InvalidFilter(_))
        ));

        let params = QueryParams {
            filter: Some("{not json".to_string()),
            ..Default::default()
        };
        assert!(params.filter_criteria().is_err());
    }

    #[test]
    fn test_deserialize_from_json() {
        let params: QueryParams =
            serde_json::from_value(serde_json::json!({ "search": "smith", "page": 3 })).unwrap();
        assert_eq!(params.q.as_deref(), Some("smith"));
        assert_eq!(params.page(), 3);
    }
}
