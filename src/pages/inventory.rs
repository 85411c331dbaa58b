//! Stock levels and restocking

use super::{ConsolePage, ListPage};
use crate::core::error::ConsoleError;
use crate::core::filter::FilterSet;
use crate::core::sort::SortKind;
use crate::entities::{InventoryItem, StockLevel};
use crate::view::ListView;
use serde::Serialize;

impl ListPage for InventoryItem {
    const PAGE: ConsolePage = ConsolePage::Inventory;

    /// "Low Stock" also lists items that ran out
    fn filters() -> FilterSet<Self> {
        FilterSet::new()
            .named("status", StockLevel::LowStock.as_str(), InventoryItem::is_low_stock)
            .named("status", StockLevel::OutOfStock.as_str(), InventoryItem::is_out_of_stock)
    }

    fn sort_kinds() -> &'static [(&'static str, SortKind)] {
        &[("expiry_date", SortKind::Date)]
    }
}

/// Figures for the stat cards above the inventory table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockSummary {
    pub items: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub stock_value: f64,
}

pub fn summary(view: &ListView<InventoryItem>) -> StockSummary {
    StockSummary {
        items: view.store().len(),
        low_stock: view.count_where(InventoryItem::is_low_stock),
        out_of_stock: view.count_where(InventoryItem::is_out_of_stock),
        stock_value: view.store().iter().map(InventoryItem::stock_value).sum(),
    }
}

pub fn restock(
    view: &mut ListView<InventoryItem>,
    id: &str,
    amount: u32,
) -> Result<InventoryItem, ConsoleError> {
    view.modify(id, |item| item.restock(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::SessionContext;
    use crate::core::filter::FilterValue;
    use crate::pages::PageRegistry;
    use crate::seed;
    use uuid::Uuid;

    fn view() -> ListView<InventoryItem> {
        let session = SessionContext::Admin {
            admin_id: Uuid::new_v4(),
        };
        PageRegistry::default().open(&session, seed::inventory()).unwrap()
    }

    #[test]
    fn test_summary() {
        let summary = summary(&view());
        assert_eq!(summary.items, 12);
        assert_eq!(summary.low_stock, 7);
        assert_eq!(summary.out_of_stock, 2);
        assert!(summary.stock_value > 0.0);
    }

    #[test]
    fn test_out_of_stock_filters_by_derived_status() {
        let mut view = view();
        view.set_filter("status", StockLevel::OutOfStock);
        let ids: Vec<_> = view.filtered().iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["INV-003", "INV-009"]);

        view.set_filter("status", FilterValue::Any);
        assert_eq!(view.filtered().len(), 12);
    }

    #[test]
    fn test_restock_clears_low_stock() {
        let mut view = view();
        view.set_filter("status", StockLevel::LowStock);
        assert_eq!(view.filtered().len(), 7);

        let item = restock(&mut view, "INV-003", 500).unwrap();
        assert_eq!(item.stock_level(), StockLevel::InStock);
        assert_eq!(view.filtered().len(), 6);
        assert_eq!(summary(&view).out_of_stock, 1);
    }
}
