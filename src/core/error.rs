//! Typed error handling for pharmadesk
//!
//! List operations over in-memory collections cannot fail under normal use.
//! The errors here cover the edges: record actions coming from dialogs,
//! page requests the paginator rejects, configuration loading and page
//! access checks.
//!
//! # Error Categories
//!
//! - [`RecordError`]: create/update/delete actions on a record store
//! - [`QueryError`]: pagination and deep-link query problems
//! - [`ValidationError`]: field validation of a submitted record
//! - [`ConfigError`]: configuration parsing and validation
//! - [`AccessError`]: page access denied by the session policy
//!
//! # Example
//!
//! ```rust,ignore
//! match view.go_to_page(7) {
//!     Ok(()) => {}
//!     Err(ConsoleError::Query(QueryError::PageOutOfRange { total_pages, .. })) => {
//!         println!("only {} pages", total_pages);
//!     }
//!     Err(e) => bus.failure(&e),
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// The main error type for pharmadesk
#[derive(Debug, Clone, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Access(#[from] AccessError),
}

/// Serializable summary of an error, surfaced through a toast notification
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorNotice {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ConsoleError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ConsoleError::Record(e) => e.error_code(),
            ConsoleError::Query(e) => e.error_code(),
            ConsoleError::Validation(_) => "VALIDATION_ERROR",
            ConsoleError::Config(_) => "CONFIG_ERROR",
            ConsoleError::Access(_) => "ACCESS_DENIED",
        }
    }

    /// Convert to a notice for the notification collaborator
    pub fn to_notice(&self) -> ErrorNotice {
        ErrorNotice {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ConsoleError::Record(RecordError::NotFound { resource, id })
            | ConsoleError::Record(RecordError::AlreadyExists { resource, id }) => {
                Some(serde_json::json!({ "resource": resource, "id": id }))
            }
            ConsoleError::Record(RecordError::InvalidTransition {
                resource, id, state, ..
            }) => Some(serde_json::json!({ "resource": resource, "id": id, "state": state })),
            ConsoleError::Record(RecordError::IdChanged { resource, id, new_id }) => {
                Some(serde_json::json!({ "resource": resource, "id": id, "new_id": new_id }))
            }
            ConsoleError::Validation(ValidationError::FieldErrors { fields, .. }) => {
                Some(serde_json::json!({ "fields": fields }))
            }
            _ => None,
        }
    }
}

// =============================================================================
// Record Errors
// =============================================================================

/// Errors raised by record actions on a store
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordError {
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error("{resource} with id '{id}' already exists")]
    AlreadyExists { resource: String, id: String },

    #[error("cannot {action} {resource} '{id}' in state '{state}'")]
    InvalidTransition {
        resource: String,
        id: String,
        action: String,
        state: String,
    },

    #[error("{resource} '{id}' cannot be renamed to '{new_id}'")]
    IdChanged {
        resource: String,
        id: String,
        new_id: String,
    },
}

impl RecordError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RecordError::NotFound { .. } => "RECORD_NOT_FOUND",
            RecordError::AlreadyExists { .. } => "RECORD_ALREADY_EXISTS",
            RecordError::InvalidTransition { .. } => "INVALID_TRANSITION",
            RecordError::IdChanged { .. } => "ID_CHANGED",
        }
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Errors raised by the paginator and query parameter handling
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QueryError {
    #[error("page size must be at least 1")]
    InvalidPageSize,

    #[error("page {page} is outside 1..={total_pages}")]
    PageOutOfRange { page: usize, total_pages: usize },

    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    #[error("invalid sort expression '{0}'")]
    InvalidSort(String),
}

impl QueryError {
    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::InvalidPageSize => "INVALID_PAGE_SIZE",
            QueryError::PageOutOfRange { .. } => "PAGE_OUT_OF_RANGE",
            QueryError::InvalidFilter(_) => "INVALID_FILTER",
            QueryError::InvalidSort(_) => "INVALID_SORT",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised when a submitted record fails validation
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("{resource} failed validation: {}", .fields.join(", "))]
    FieldErrors {
        resource: String,
        fields: Vec<String>,
    },
}

impl ValidationError {
    /// Build from the errors reported by `validator`, nested structs included
    pub fn from_validator(resource: &str, errors: &validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();

        ValidationError::FieldErrors {
            resource: resource.to_string(),
            fields,
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors raised while loading configuration
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    #[error("invalid configuration for page '{page}': {message}")]
    InvalidPage { page: String, message: String },
}

// =============================================================================
// Access Errors
// =============================================================================

/// Errors raised when the session may not open a page
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccessError {
    #[error("access to page '{page}' denied")]
    Denied { page: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_not_found_notice() {
        let err = ConsoleError::from(RecordError::NotFound {
            resource: "prescriptions".to_string(),
            id: "RX-9".to_string(),
        });

        let notice = err.to_notice();
        assert_eq!(notice.code, "RECORD_NOT_FOUND");
        assert_eq!(notice.message, "prescriptions with id 'RX-9' not found");
        assert_eq!(
            notice.details,
            Some(serde_json::json!({ "resource": "prescriptions", "id": "RX-9" }))
        );
    }

    #[test]
    fn test_query_error_codes() {
        let err = ConsoleError::from(QueryError::PageOutOfRange {
            page: 4,
            total_pages: 2,
        });
        assert_eq!(err.error_code(), "PAGE_OUT_OF_RANGE");
        assert_eq!(err.to_string(), "page 4 is outside 1..=2");
        assert!(err.to_notice().details.is_none());
    }

    #[test]
    fn test_validation_notice_lists_fields() {
        let err = ConsoleError::from(ValidationError::FieldErrors {
            resource: "patients".to_string(),
            fields: vec!["name".to_string(), "phone".to_string()],
        });
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "patients failed validation: name, phone");
        assert_eq!(
            err.to_notice().details,
            Some(serde_json::json!({ "fields": ["name", "phone"] }))
        );
    }

    #[test]
    fn test_access_denied_message() {
        let err = ConsoleError::from(AccessError::Denied {
            page: "staff".to_string(),
        });
        assert_eq!(err.error_code(), "ACCESS_DENIED");
        assert_eq!(err.to_string(), "access to page 'staff' denied");
    }
}
