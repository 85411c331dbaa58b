//! Home deliveries

use crate::core::validators;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

crate::impl_field_enum!(
    DeliveryStatus {
        Scheduled => "scheduled",
        InTransit => "in_transit",
        Delivered => "delivered",
        Failed => "failed",
        Cancelled => "cancelled",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Delivery {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(custom(function = "validators::not_blank"))]
    pub patient: String,

    #[validate(custom(function = "validators::not_blank"))]
    pub address: String,

    pub driver: Option<String>,
    pub status: DeliveryStatus,
    pub scheduled_for: DateTime<Utc>,

    #[validate(range(min = 1))]
    pub items: u32,
}

crate::impl_record!(
    Delivery,
    "deliveries",
    search: [id, patient, address, driver],
    fields: [id, patient, address, driver, status, scheduled_for, items],
);

impl Delivery {
    /// Whether the delivery is still on its way
    pub fn is_open(&self) -> bool {
        matches!(self.status, DeliveryStatus::Scheduled | DeliveryStatus::InTransit)
    }
}
