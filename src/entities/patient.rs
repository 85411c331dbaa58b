//! Patient directory

use crate::core::validators;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

crate::impl_field_enum!(
    PatientStatus {
        Active => "active",
        Inactive => "inactive",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Patient {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(custom(function = "validators::not_blank"))]
    pub name: String,

    pub date_of_birth: NaiveDate,

    #[validate(custom(function = "validators::phone"))]
    pub phone: String,

    #[validate(email)]
    pub email: String,

    pub insurance: Option<String>,
    pub status: PatientStatus,
    pub last_visit: Option<NaiveDate>,
}

crate::impl_record!(
    Patient,
    "patients",
    search: [id, name, phone, email],
    fields: [id, name, date_of_birth, phone, email, insurance, status, last_visit],
);

impl Patient {
    /// Age in whole years on `today`
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.date_of_birth).unwrap_or(0)
    }
}
