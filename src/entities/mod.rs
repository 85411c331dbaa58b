//! Domain records listed by the console pages

pub mod macros;

pub mod alert;
pub mod delivery;
pub mod inventory;
pub mod message;
pub mod patient;
pub mod prescription;
pub mod purchase_order;
pub mod staff;
pub mod vendor;

pub use alert::{Activity, ActivityStatus, Alert, AlertCategory, AlertStatus, FeedItem};
pub use delivery::{Delivery, DeliveryStatus};
pub use inventory::{InventoryItem, StockLevel};
pub use message::Message;
pub use patient::{Patient, PatientStatus};
pub use prescription::{Prescription, PrescriptionStatus};
pub use purchase_order::{OrderStatus, OrderTotals, PurchaseOrder};
pub use staff::{StaffMember, StaffRole, StaffStatus};
pub use vendor::{Vendor, VendorStatus};

crate::impl_field_enum!(
    /// Urgency shared by prescriptions, alerts and messages
    Priority {
        Low => "low",
        Normal => "normal",
        High => "high",
        Urgent => "urgent",
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::{FieldValue, ToFieldValue};
    use crate::core::filter::FilterValue;

    #[test]
    fn test_field_enum_labels() {
        assert_eq!(Priority::Urgent.as_str(), "urgent");
        assert_eq!(Priority::High.to_string(), "high");
        assert_eq!("low".parse::<Priority>(), Ok(Priority::Low));
        assert!("critical".parse::<Priority>().is_err());
        assert_eq!(Priority::ALL.len(), 4);
    }

    #[test]
    fn test_field_enum_as_field_and_filter_value() {
        assert_eq!(
            Priority::Normal.to_field_value(),
            FieldValue::String("normal".to_string())
        );
        assert_eq!(
            FilterValue::from(Priority::Normal),
            FilterValue::Is(FieldValue::String("normal".to_string()))
        );
    }

    #[test]
    fn test_field_enum_serde_uses_labels() {
        assert_eq!(serde_json::to_string(&Priority::Urgent).unwrap(), "\"urgent\"");
        let parsed: Priority = serde_json::from_str("\"normal\"").unwrap();
        assert_eq!(parsed, Priority::Normal);
    }
}
