//! Stock on the shelves

use crate::core::field::{FieldValue, ToFieldValue};
use crate::core::record::Record;
use crate::core::validators;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

crate::impl_field_enum!(
    /// Derived from quantity and reorder threshold, exposed as the `status` field
    StockLevel {
        InStock => "In Stock",
        LowStock => "Low Stock",
        OutOfStock => "Out of Stock",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct InventoryItem {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(custom(function = "validators::not_blank"))]
    pub name: String,

    pub category: String,
    pub quantity: u32,

    /// Reorder threshold
    pub min_stock: u32,

    #[validate(range(min = 0.0))]
    pub unit_price: f64,

    pub supplier: String,
    pub expiry_date: Option<NaiveDate>,
}

impl InventoryItem {
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    /// At or below the reorder threshold, out-of-stock included
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }

    pub fn stock_level(&self) -> StockLevel {
        if self.is_out_of_stock() {
            StockLevel::OutOfStock
        } else if self.is_low_stock() {
            StockLevel::LowStock
        } else {
            StockLevel::InStock
        }
    }

    pub fn restock(&mut self, amount: u32) {
        self.quantity = self.quantity.saturating_add(amount);
    }

    /// Shelf value of the item
    pub fn stock_value(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.expiry_date.is_some_and(|expiry| expiry < today)
    }
}

impl Record for InventoryItem {
    fn resource_name() -> &'static str {
        "inventory"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["id", "name", "category", "supplier"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => self.id.to_field_value(),
            "name" => self.name.to_field_value(),
            "category" => self.category.to_field_value(),
            "quantity" => self.quantity.to_field_value(),
            "min_stock" => self.min_stock.to_field_value(),
            "unit_price" => self.unit_price.to_field_value(),
            "supplier" => self.supplier.to_field_value(),
            "expiry_date" => self.expiry_date.to_field_value(),
            "status" => self.stock_level().to_field_value(),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: u32, min_stock: u32) -> InventoryItem {
        InventoryItem {
            id: "INV-1".to_string(),
            name: "Amoxicillin 500mg".to_string(),
            category: "Antibiotics".to_string(),
            quantity,
            min_stock,
            unit_price: 0.45,
            supplier: "MedSupply Co".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 1, 31),
        }
    }

    #[test]
    fn test_stock_levels() {
        assert_eq!(item(100, 20).stock_level(), StockLevel::InStock);
        assert_eq!(item(20, 20).stock_level(), StockLevel::LowStock);
        assert_eq!(item(0, 20).stock_level(), StockLevel::OutOfStock);
        assert!(item(0, 20).is_low_stock());
    }

    #[test]
    fn test_status_field_is_derived() {
        assert_eq!(
            item(5, 20).field_value("status"),
            Some(FieldValue::String("Low Stock".to_string()))
        );
    }

    #[test]
    fn test_restock_and_value() {
        let mut record = item(0, 20);
        record.restock(200);
        assert_eq!(record.quantity, 200);
        assert_eq!(record.stock_level(), StockLevel::InStock);
        assert!((record.stock_value() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_expiry() {
        let record = item(10, 5);
        assert!(record.is_expired_on(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
        assert!(!record.is_expired_on(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));
    }
}
