//! Prescription queue

use super::{ConsolePage, ListPage};
use crate::core::error::{ConsoleError, RecordError};
use crate::core::record::Record;
use crate::core::sort::{SortKind, SortSpec};
use crate::entities::{Prescription, PrescriptionStatus};
use crate::view::ListView;

impl ListPage for Prescription {
    const PAGE: ConsolePage = ConsolePage::Prescriptions;

    fn sort_kinds() -> &'static [(&'static str, SortKind)] {
        &[("date_issued", SortKind::Date)]
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::desc("date_issued"))
    }
}

fn refused(record: &Prescription, action: &str) -> RecordError {
    RecordError::InvalidTransition {
        resource: Prescription::resource_name().to_string(),
        id: record.id.clone(),
        action: action.to_string(),
        state: record.status.to_string(),
    }
}

/// Move a prescription one step along pending, processing, ready, completed
pub fn advance(view: &mut ListView<Prescription>, id: &str) -> Result<Prescription, ConsoleError> {
    view.try_modify(id, |record| {
        if record.advance() {
            Ok(())
        } else {
            Err(refused(record, "advance"))
        }
    })
}

pub fn cancel(view: &mut ListView<Prescription>, id: &str) -> Result<Prescription, ConsoleError> {
    view.try_modify(id, |record| {
        if record.cancel() {
            Ok(())
        } else {
            Err(refused(record, "cancel"))
        }
    })
}

/// Prescriptions still waiting to be filled or picked up
pub fn open_count(view: &ListView<Prescription>) -> usize {
    view.count_where(|record| !record.status.is_terminal())
}

pub fn count_with_status(view: &ListView<Prescription>, status: PrescriptionStatus) -> usize {
    view.counts_by("status").get(status.as_str()).copied().unwrap_or(0)
}
