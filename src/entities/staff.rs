//! Pharmacy staff, admin only

use crate::core::validators;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

crate::impl_field_enum!(
    StaffRole {
        Pharmacist => "pharmacist",
        Technician => "technician",
        Cashier => "cashier",
        Driver => "driver",
        Admin => "admin",
    }
);

crate::impl_field_enum!(
    StaffStatus {
        Active => "active",
        OnLeave => "on_leave",
        Inactive => "inactive",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StaffMember {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(custom(function = "validators::not_blank"))]
    pub name: String,

    pub role: StaffRole,

    #[validate(email)]
    pub email: String,

    #[validate(custom(function = "validators::phone"))]
    pub phone: String,

    pub status: StaffStatus,
    pub hired_on: NaiveDate,
}

crate::impl_record!(
    StaffMember,
    "staff",
    search: [name, email, role],
    fields: [id, name, role, email, phone, status, hired_on],
);
