//! Console pages and how each one builds its list view

pub mod alerts;
pub mod deliveries;
pub mod inventory;
pub mod messages;
pub mod patients;
pub mod prescriptions;
pub mod staff;
pub mod vendors;

use crate::config::ConsoleConfig;
use crate::core::auth::{AccessPolicy, SessionContext};
use crate::core::error::{AccessError, ConsoleError};
use crate::core::events::NotificationBus;
use crate::core::filter::FilterSet;
use crate::core::query::QueryParams;
use crate::core::record::Record;
use crate::core::sort::{SortKind, SortSpec};
use crate::view::ListView;
use validator::Validate;

crate::impl_field_enum!(
    /// Pages of the console that list records
    ConsolePage {
        Prescriptions => "prescriptions",
        Patients => "patients",
        Inventory => "inventory",
        Deliveries => "deliveries",
        Alerts => "alerts",
        Vendors => "vendors",
        PurchaseOrders => "purchase_orders",
        Staff => "staff",
        Messages => "messages",
    }
);

impl ConsolePage {
    pub fn title(self) -> &'static str {
        match self {
            ConsolePage::Prescriptions => "Prescriptions",
            ConsolePage::Patients => "Patients",
            ConsolePage::Inventory => "Inventory",
            ConsolePage::Deliveries => "Deliveries",
            ConsolePage::Alerts => "Alerts & Activity",
            ConsolePage::Vendors => "Vendors",
            ConsolePage::PurchaseOrders => "Purchase Orders",
            ConsolePage::Staff => "Staff",
            ConsolePage::Messages => "Messages",
        }
    }

    /// Who may open the page when the configuration says nothing
    pub fn default_access(self) -> AccessPolicy {
        match self {
            ConsolePage::Staff | ConsolePage::Vendors | ConsolePage::PurchaseOrders => {
                AccessPolicy::AdminOnly
            }
            _ => AccessPolicy::Authenticated,
        }
    }
}

/// Per-record wiring of a list page
pub trait ListPage: Record + Validate {
    /// Page the records are listed on
    const PAGE: ConsolePage;

    /// Named predicates for filter values that are not plain field equality
    fn filters() -> FilterSet<Self> {
        FilterSet::new()
    }

    /// Fields that need coercion before sorting
    fn sort_kinds() -> &'static [(&'static str, SortKind)] {
        &[]
    }

    /// Whether the page splits records into active and archived
    fn archive_partition() -> bool {
        false
    }

    fn default_sort() -> Option<SortSpec> {
        None
    }
}

/// Builds list views for the signed-in session
#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
    config: ConsoleConfig,
    bus: NotificationBus,
}

impl PageRegistry {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            config,
            bus: NotificationBus::default(),
        }
    }

    /// Report record actions on an existing bus
    pub fn with_notifications(mut self, bus: NotificationBus) -> Self {
        self.bus = bus;
        self
    }

    pub fn notifications(&self) -> &NotificationBus {
        &self.bus
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Access policy for a page, configuration first
    pub fn policy(&self, page: ConsolePage) -> AccessPolicy {
        self.config
            .page_config(page)
            .access
            .unwrap_or_else(|| page.default_access())
    }

    pub fn check_access(&self, page: ConsolePage, session: &SessionContext) -> Result<(), AccessError> {
        if self.policy(page).allows(session) {
            Ok(())
        } else {
            tracing::warn!(page = page.as_str(), user = ?session.user_id(), "page access denied");
            Err(AccessError::Denied {
                page: page.as_str().to_string(),
            })
        }
    }

    /// Pages shown in the navigation for this session
    pub fn visible_pages(&self, session: &SessionContext) -> Vec<ConsolePage> {
        ConsolePage::ALL
            .iter()
            .copied()
            .filter(|page| self.policy(*page).allows(session))
            .collect()
    }

    /// Open the list page for `T` over the given records
    pub fn open<T: ListPage>(
        &self,
        session: &SessionContext,
        records: impl IntoIterator<Item = T>,
    ) -> Result<ListView<T>, ConsoleError> {
        self.check_access(T::PAGE, session)?;

        let settings = self.config.page_config(T::PAGE);
        let mut view = ListView::from_records(records)
            .with_filters(T::filters())
            .with_page_size(settings.page_size)
            .with_notifications(self.bus.clone());

        for (field, kind) in T::sort_kinds() {
            view = view.with_sort_kind(field, *kind);
        }
        if let Some(fields) = &settings.search_fields {
            let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
            view = view.with_search_fields(&fields);
        }
        if let Some(sort) = settings.default_sort.or_else(T::default_sort) {
            view = view.with_sort(sort);
        }
        if T::archive_partition() {
            view = view.with_archive_partition();
        }

        tracing::debug!(
            page = T::PAGE.as_str(),
            records = view.store().len(),
            page_size = view.page_size(),
            "page opened"
        );
        Ok(view)
    }

    /// Open a page and restore its state from a deep link
    pub fn open_with_params<T: ListPage>(
        &self,
        session: &SessionContext,
        records: impl IntoIterator<Item = T>,
        params: &QueryParams,
    ) -> Result<ListView<T>, ConsoleError> {
        let mut view = self.open(session, records)?;
        view.apply_params(params);
        Ok(view)
    }
}
