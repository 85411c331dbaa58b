//! Prescriptions in the fill queue

use super::Priority;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

crate::impl_field_enum!(
    /// Where a prescription is in the fill workflow
    PrescriptionStatus {
        Pending => "pending",
        Processing => "processing",
        Ready => "ready",
        Completed => "completed",
        Cancelled => "cancelled",
    }
);

impl PrescriptionStatus {
    /// Next step of the workflow, `None` once completed or cancelled
    pub fn next(self) -> Option<Self> {
        match self {
            PrescriptionStatus::Pending => Some(PrescriptionStatus::Processing),
            PrescriptionStatus::Processing => Some(PrescriptionStatus::Ready),
            PrescriptionStatus::Ready => Some(PrescriptionStatus::Completed),
            PrescriptionStatus::Completed | PrescriptionStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Prescription {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(length(min = 1, message = "patient is required"))]
    pub patient: String,

    #[validate(length(min = 1, message = "medication is required"))]
    pub medication: String,

    pub dosage: String,

    #[validate(length(min = 1, message = "prescriber is required"))]
    pub prescriber: String,

    pub status: PrescriptionStatus,
    pub priority: Priority,
    pub date_issued: NaiveDate,

    #[validate(range(max = 12))]
    pub refills: u32,
}

crate::impl_record!(
    Prescription,
    "prescriptions",
    search: [id, patient, medication, prescriber],
    fields: [id, patient, medication, dosage, prescriber, status, priority, date_issued, refills],
);

impl Prescription {
    /// Move to the next workflow step. Returns false when already terminal.
    pub fn advance(&mut self) -> bool {
        match self.status.next() {
            Some(next) => {
                self.status = next;
                true
            }
            None => false,
        }
    }

    /// Cancel unless already completed or cancelled
    pub fn cancel(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = PrescriptionStatus::Cancelled;
        true
    }
}
