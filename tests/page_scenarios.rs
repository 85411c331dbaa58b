//! End-to-end scenarios over the seeded console pages

use pharmadesk::pages::alerts;
use pharmadesk::prelude::*;

fn pharmacist() -> SessionContext {
    SessionContext::User {
        user_id: Uuid::new_v4(),
        roles: vec!["pharmacist".to_string()],
    }
}

fn admin() -> SessionContext {
    SessionContext::Admin {
        admin_id: Uuid::new_v4(),
    }
}

// =============================================================================
// Inventory
// =============================================================================

#[test]
fn test_low_stock_first_page_of_five() {
    let registry = PageRegistry::default();
    let mut view = registry
        .open::<InventoryItem>(&pharmacist(), seed::inventory())
        .unwrap();

    let low_stock_count = seed::inventory().iter().filter(|i| i.is_low_stock()).count();

    view.set_search("");
    view.set_filter("status", "Low Stock");
    view.set_page_size(5).unwrap();

    let info = view.page_info();
    assert_eq!(view.page().items.len(), 5);
    assert_eq!(info.page, 1);
    assert_eq!(info.total_pages, low_stock_count.div_ceil(5));
    assert_eq!(info.summary(), format!("Showing 1-5 of {}", low_stock_count));
    assert!(view.page().items.iter().all(InventoryItem::is_low_stock));
}

#[test]
fn test_filter_change_resets_to_first_page() {
    let mut view = PageRegistry::default()
        .open::<InventoryItem>(&pharmacist(), seed::inventory())
        .unwrap();
    view.set_page_size(5).unwrap();
    assert!(view.next_page());
    assert!(view.next_page());
    assert_eq!(view.current_page(), 3);

    // three pages before, two after: stale page 3 must not survive
    view.set_filter("status", StockLevel::LowStock);
    assert_eq!(view.current_page(), 1);
    assert_eq!(view.page_info().total_pages, 2);
    assert!(view.go_to_page(3).is_err());
    assert_eq!(view.current_page(), 1);
}

// =============================================================================
// Deliveries
// =============================================================================

#[test]
fn test_search_smith_in_deliveries() {
    let mut view = PageRegistry::default()
        .open::<Delivery>(&pharmacist(), seed::deliveries())
        .unwrap();
    assert_eq!(view.store().len(), 7);

    view.set_search("Smith");
    assert_eq!(view.filtered().len(), 2);
    assert!(
        view.filtered()
            .iter()
            .all(|d| d.patient.to_lowercase().contains("smith"))
    );
}

#[test]
fn test_search_from_deep_link() {
    let params = QueryParams::from_query_string("?q=SMITH&filter=%7B%22status%22%3A%22scheduled%22%7D");
    let view = PageRegistry::default()
        .open_with_params::<Delivery>(&pharmacist(), seed::deliveries(), &params)
        .unwrap();
    let ids: Vec<_> = view.filtered().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["DEL-001", "DEL-004"]);
}

// =============================================================================
// Purchase orders
// =============================================================================

#[test]
fn test_total_sort_reversal() {
    let mut view = PageRegistry::default()
        .open::<PurchaseOrder>(&admin(), seed::purchase_orders())
        .unwrap();

    view.set_sort(Some(SortSpec::desc("total")));
    let descending: Vec<String> = view.filtered().iter().map(|po| po.id.clone()).collect();

    view.set_sort(Some(SortSpec::asc("total")));
    let ascending: Vec<String> = view.filtered().iter().map(|po| po.id.clone()).collect();

    assert_eq!(descending.first(), ascending.last());
    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
}

#[test]
fn test_purchase_orders_are_admin_only() {
    let registry = PageRegistry::default();
    let err = registry
        .open::<PurchaseOrder>(&pharmacist(), seed::purchase_orders())
        .unwrap_err();
    assert_eq!(err.error_code(), "ACCESS_DENIED");
    assert_eq!(err.to_string(), "access to page 'purchase_orders' denied");
}

// =============================================================================
// Alerts
// =============================================================================

#[test]
fn test_show_archived_with_nothing_archived() {
    let mut view = PageRegistry::default()
        .open::<Alert>(&pharmacist(), seed::alerts())
        .unwrap();
    assert!(alerts::active_count(&view) > 0);

    view.show_archived(true);
    assert!(view.filtered().iter().all(|alert| alert.archived));
    assert!(view.filtered().is_empty());
    assert_eq!(alerts::active_count(&view), 0);
    assert_eq!(view.page_info().summary(), "Showing 0-0 of 0");
    assert_eq!(view.page_info().total_pages, 1);
}

#[test]
fn test_take_action_feed() {
    let registry = PageRegistry::default();
    let mut alert_view = registry.open::<Alert>(&pharmacist(), seed::alerts()).unwrap();
    let activities = registry.open::<Activity>(&pharmacist(), seed::activities()).unwrap();

    alerts::resolve(&mut alert_view, "AL-001").unwrap();
    let feed = alerts::feed(&alert_view, &activities);
    assert_eq!(alerts::needing_action(&feed), 5);
}
