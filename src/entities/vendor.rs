//! Suppliers

use crate::core::validators;
use serde::{Deserialize, Serialize};
use validator::Validate;

crate::impl_field_enum!(
    VendorStatus {
        Active => "active",
        Inactive => "inactive",
        Pending => "pending",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Vendor {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(custom(function = "validators::not_blank"))]
    pub name: String,

    pub contact: String,

    #[validate(email)]
    pub email: String,

    #[validate(custom(function = "validators::phone"))]
    pub phone: String,

    pub category: String,
    pub status: VendorStatus,

    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
}

crate::impl_record!(
    Vendor,
    "vendors",
    search: [name, contact, email, category],
    fields: [id, name, contact, email, phone, category, status, rating],
);
