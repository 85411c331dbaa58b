//! Vendors and purchase orders, admin only

use super::{ConsolePage, ListPage};
use crate::core::error::{ConsoleError, RecordError};
use crate::core::record::Record;
use crate::core::sort::{SortKind, SortSpec};
use crate::entities::{OrderStatus, PurchaseOrder, Vendor, VendorStatus};
use crate::view::ListView;

impl ListPage for Vendor {
    const PAGE: ConsolePage = ConsolePage::Vendors;

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::asc("name"))
    }
}

impl ListPage for PurchaseOrder {
    const PAGE: ConsolePage = ConsolePage::PurchaseOrders;

    fn sort_kinds() -> &'static [(&'static str, SortKind)] {
        &[
            ("subtotal", SortKind::Currency),
            ("tax", SortKind::Currency),
            ("total", SortKind::Currency),
            ("order_date", SortKind::Date),
            ("expected_date", SortKind::Date),
        ]
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::desc("order_date"))
    }
}

pub fn active_vendors(view: &ListView<Vendor>) -> usize {
    view.count_where(|vendor| vendor.status == VendorStatus::Active)
}

/// Book an approved order as received
pub fn receive(view: &mut ListView<PurchaseOrder>, id: &str) -> Result<PurchaseOrder, ConsoleError> {
    view.try_modify(id, |order| {
        if order.receive() {
            return Ok(());
        }
        Err(RecordError::InvalidTransition {
            resource: PurchaseOrder::resource_name().to_string(),
            id: order.id.clone(),
            action: "receive".to_string(),
            state: order.status.to_string(),
        })
    })
}

/// Sum of parsed totals for orders not cancelled; malformed totals count as zero
pub fn committed_spend(view: &ListView<PurchaseOrder>) -> f64 {
    view.store()
        .iter()
        .filter(|order| order.status != OrderStatus::Cancelled)
        .filter_map(PurchaseOrder::total_amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::SessionContext;
    use crate::pages::PageRegistry;
    use crate::seed;
    use uuid::Uuid;

    fn admin() -> SessionContext {
        SessionContext::Admin {
            admin_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_total_sorts_as_amount() {
        let mut view = PageRegistry::default()
            .open(&admin(), seed::purchase_orders())
            .unwrap();
        view.toggle_sort("total");
        assert_eq!(view.filtered()[0].totals.total, "$13,770.00");
        assert_eq!(view.filtered()[5].totals.total, "$102.60");
    }

    #[test]
    fn test_receive() {
        let mut view = PageRegistry::default()
            .open(&admin(), seed::purchase_orders())
            .unwrap();
        assert_eq!(receive(&mut view, "PO-2024-002").unwrap().status, OrderStatus::Received);
        assert!(receive(&mut view, "PO-2024-005").is_err());
    }

    #[test]
    fn test_committed_spend_skips_cancelled() {
        let view = PageRegistry::default()
            .open(&admin(), seed::purchase_orders())
            .unwrap();
        let expected = 2592.0 + 1058.94 + 334.80 + 518.40 + 13770.0;
        assert!((committed_spend(&view) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_vendors_alphabetical() {
        let view = PageRegistry::default().open(&admin(), seed::vendors()).unwrap();
        let names: Vec<_> = view.filtered().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["HealthSource", "MedSupply Co", "PharmaDirect", "RespiraCare"]);
        assert_eq!(active_vendors(&view), 3);
    }
}
