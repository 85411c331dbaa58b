//! Delivery schedule

use super::{ConsolePage, ListPage};
use crate::core::error::{ConsoleError, RecordError};
use crate::core::filter::FilterSet;
use crate::core::record::Record;
use crate::core::sort::{SortKind, SortSpec};
use crate::entities::{Delivery, DeliveryStatus};
use crate::view::ListView;

/// Filter label covering scheduled and in-transit deliveries
pub const OPEN: &str = "open";

impl ListPage for Delivery {
    const PAGE: ConsolePage = ConsolePage::Deliveries;

    fn filters() -> FilterSet<Self> {
        FilterSet::new().named("status", OPEN, Delivery::is_open)
    }

    fn sort_kinds() -> &'static [(&'static str, SortKind)] {
        &[("scheduled_for", SortKind::Date)]
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::asc("scheduled_for"))
    }
}

/// Record the outcome of an open delivery
pub fn complete(
    view: &mut ListView<Delivery>,
    id: &str,
    outcome: DeliveryStatus,
) -> Result<Delivery, ConsoleError> {
    view.try_modify(id, |delivery| {
        if delivery.is_open() && !matches!(outcome, DeliveryStatus::Scheduled | DeliveryStatus::InTransit) {
            delivery.status = outcome;
            return Ok(());
        }
        Err(RecordError::InvalidTransition {
            resource: Delivery::resource_name().to_string(),
            id: delivery.id.clone(),
            action: format!("mark {outcome}"),
            state: delivery.status.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::SessionContext;
    use crate::pages::PageRegistry;
    use crate::seed;
    use uuid::Uuid;

    fn view() -> ListView<Delivery> {
        let session = SessionContext::User {
            user_id: Uuid::new_v4(),
            roles: vec!["driver".to_string()],
        };
        PageRegistry::default().open(&session, seed::deliveries()).unwrap()
    }

    #[test]
    fn test_open_filter() {
        let mut view = view();
        view.set_filter("status", OPEN);
        assert_eq!(view.filtered().len(), 3);
        assert!(view.filtered().iter().all(Delivery::is_open));
    }

    #[test]
    fn test_soonest_first() {
        let view = view();
        assert_eq!(view.filtered()[0].id, "DEL-006");
        assert_eq!(view.filtered()[6].id, "DEL-007");
    }

    #[test]
    fn test_complete_open_delivery_only() {
        let mut view = view();
        let done = complete(&mut view, "DEL-001", DeliveryStatus::Delivered).unwrap();
        assert_eq!(done.status, DeliveryStatus::Delivered);

        assert!(complete(&mut view, "DEL-001", DeliveryStatus::Failed).is_err());
        assert!(complete(&mut view, "DEL-002", DeliveryStatus::Scheduled).is_err());
    }
}
