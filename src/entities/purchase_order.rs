//! Purchase orders placed with vendors, admin only

use crate::core::field::{FieldValue, ToFieldValue, parse_currency};
use crate::core::record::Record;
use crate::core::validators;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

crate::impl_field_enum!(
    OrderStatus {
        Draft => "draft",
        Submitted => "submitted",
        Approved => "approved",
        Received => "received",
        Cancelled => "cancelled",
    }
);

/// Amounts as shown on the order, e.g. `$1,250.00`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderTotals {
    #[validate(custom(function = "validators::currency"))]
    pub subtotal: String,

    #[validate(custom(function = "validators::currency"))]
    pub tax: String,

    #[validate(custom(function = "validators::currency"))]
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PurchaseOrder {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(custom(function = "validators::not_blank"))]
    pub vendor: String,

    pub status: OrderStatus,
    pub order_date: NaiveDate,
    pub expected_date: Option<NaiveDate>,

    #[validate(range(min = 1))]
    pub line_items: u32,

    #[validate(nested)]
    pub totals: OrderTotals,
}

impl Record for PurchaseOrder {
    fn resource_name() -> &'static str {
        "purchase_orders"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn searchable_fields() -> &'static [&'static str] {
        &["id", "vendor"]
    }

    /// Amounts are exposed as the display strings; sort them as currency.
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        let value = match field {
            "id" => self.id.to_field_value(),
            "vendor" => self.vendor.to_field_value(),
            "status" => self.status.to_field_value(),
            "order_date" => self.order_date.to_field_value(),
            "expected_date" => self.expected_date.to_field_value(),
            "line_items" => self.line_items.to_field_value(),
            "subtotal" => self.totals.subtotal.to_field_value(),
            "tax" => self.totals.tax.to_field_value(),
            "total" => self.totals.total.to_field_value(),
            _ => return None,
        };
        Some(value)
    }
}

impl PurchaseOrder {
    /// Parsed grand total, `None` when the stored string is malformed
    pub fn total_amount(&self) -> Option<f64> {
        parse_currency(&self.totals.total)
    }

    /// Mark as received; only approved orders can be received
    pub fn receive(&mut self) -> bool {
        if self.status != OrderStatus::Approved {
            return false;
        }
        self.status = OrderStatus::Received;
        true
    }
}
