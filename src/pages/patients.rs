//! Patient directory

use super::{ConsolePage, ListPage};
use crate::core::sort::{SortKind, SortSpec};
use crate::entities::{Patient, PatientStatus};
use crate::view::ListView;

impl ListPage for Patient {
    const PAGE: ConsolePage = ConsolePage::Patients;

    fn sort_kinds() -> &'static [(&'static str, SortKind)] {
        &[("date_of_birth", SortKind::Date), ("last_visit", SortKind::Date)]
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::asc("name"))
    }
}

pub fn active_count(view: &ListView<Patient>) -> usize {
    view.count_where(|patient| patient.status == PatientStatus::Active)
}
