//! Core module containing the list pipeline and its collaborators

pub mod auth;
pub mod error;
pub mod events;
pub mod field;
pub mod filter;
pub mod pagination;
pub mod query;
pub mod record;
pub mod search;
pub mod sort;
pub mod store;
pub mod validators;

pub use auth::{AccessPolicy, SessionContext};
pub use error::{ConsoleError, ErrorNotice};
pub use events::{Notification, NotificationBus, NotificationKind, NotificationLevel};
pub use field::{FieldValue, ToFieldValue};
pub use filter::{FilterCriteria, FilterSet, FilterValue};
pub use pagination::{Page, PageInfo, paginate};
pub use query::QueryParams;
pub use record::Record;
pub use search::SearchQuery;
pub use sort::{SortDirection, SortKind, SortSpec};
pub use store::RecordStore;
