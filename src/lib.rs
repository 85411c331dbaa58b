//! # Pharmadesk
//!
//! View-model layer for a pharmacy operations console. Every list page
//! (prescriptions, inventory, deliveries, alerts, ...) runs the same pipeline
//! over an in-memory collection:
//!
//! ```text
//! source -> search -> filter -> sort -> paginate
//! ```
//!
//! ## Features
//!
//! - **One generic pipeline**: [`ListView`](view::ListView) works for any
//!   [`Record`](core::Record)
//! - **Explicit "no constraint"**: [`FilterValue::Any`](core::FilterValue)
//!   instead of an `"all"` sentinel
//! - **Named predicates**: filter values such as "Low Stock" that are not
//!   plain field equality
//! - **Typed sorting**: dates and currency strings compare by value
//! - **Deep links**: search, filters, sort and page from a query string
//! - **Access control**: admin-only pages through session policies
//! - **Toasts**: record actions reported on a broadcast bus
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pharmadesk::prelude::*;
//!
//! let registry = PageRegistry::new(ConsoleConfig::default());
//! let mut inventory = registry.open::<InventoryItem>(&session, seed::inventory())?;
//!
//! inventory.set_filter("status", StockLevel::LowStock);
//! inventory.set_page_size(5)?;
//! println!("{}", inventory.page_info().summary()); // Showing 1-5 of 7
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod pages;
pub mod seed;
pub mod view;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        auth::{AccessPolicy, SessionContext},
        error::{AccessError, ConfigError, ConsoleError, ErrorNotice, QueryError, RecordError, ValidationError},
        events::{Notification, NotificationBus, NotificationKind, NotificationLevel},
        field::{FieldValue, ToFieldValue},
        filter::{FilterCriteria, FilterSet, FilterValue},
        pagination::{DEFAULT_PAGE_SIZE, Page, PageInfo, paginate},
        query::QueryParams,
        record::Record,
        search::SearchQuery,
        sort::{SortDirection, SortKind, SortSpec},
        store::RecordStore,
    };

    // === Macros ===
    pub use crate::{impl_field_enum, impl_record};

    // === Records ===
    pub use crate::entities::{
        Activity, ActivityStatus, Alert, AlertCategory, AlertStatus, Delivery, DeliveryStatus,
        FeedItem, InventoryItem, Message, OrderStatus, OrderTotals, Patient, PatientStatus,
        Prescription, PrescriptionStatus, Priority, PurchaseOrder, StaffMember, StaffRole,
        StaffStatus, StockLevel, Vendor, VendorStatus,
    };
    pub use crate::seed;

    // === Pages ===
    pub use crate::pages::{ConsolePage, ListPage, PageRegistry};
    pub use crate::view::{ListQuery, ListView};

    // === Config ===
    pub use crate::config::{ConsoleConfig, PageConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
    pub use validator::Validate;
}
