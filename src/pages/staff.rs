//! Staff roster, admin only

use super::{ConsolePage, ListPage};
use crate::core::sort::{SortKind, SortSpec};
use crate::entities::{StaffMember, StaffRole, StaffStatus};
use crate::view::ListView;
use indexmap::IndexMap;

impl ListPage for StaffMember {
    const PAGE: ConsolePage = ConsolePage::Staff;

    fn sort_kinds() -> &'static [(&'static str, SortKind)] {
        &[("hired_on", SortKind::Date)]
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::asc("name"))
    }
}

/// Head count per role among staff currently working
pub fn on_duty_by_role(view: &ListView<StaffMember>) -> IndexMap<StaffRole, usize> {
    let mut counts = IndexMap::new();
    for member in view.store().iter().filter(|m| m.status == StaffStatus::Active) {
        *counts.entry(member.role).or_insert(0) += 1;
    }
    counts
}
