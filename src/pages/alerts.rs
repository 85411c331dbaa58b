//! Alerts with an archive, plus the activity feed

use super::{ConsolePage, ListPage};
use crate::core::error::{ConsoleError, RecordError};
use crate::core::record::Record;
use crate::core::sort::{SortKind, SortSpec};
use crate::entities::{Activity, Alert, AlertStatus, FeedItem};
use crate::view::ListView;

impl ListPage for Alert {
    const PAGE: ConsolePage = ConsolePage::Alerts;

    fn sort_kinds() -> &'static [(&'static str, SortKind)] {
        &[("created_at", SortKind::Date)]
    }

    fn archive_partition() -> bool {
        true
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::desc("created_at"))
    }
}

impl ListPage for Activity {
    const PAGE: ConsolePage = ConsolePage::Alerts;

    fn sort_kinds() -> &'static [(&'static str, SortKind)] {
        &[("created_at", SortKind::Date)]
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::desc("created_at"))
    }
}

pub fn resolve(view: &mut ListView<Alert>, id: &str) -> Result<Alert, ConsoleError> {
    view.try_modify(id, |alert| {
        if alert.status == AlertStatus::Resolved {
            return Err(RecordError::InvalidTransition {
                resource: Alert::resource_name().to_string(),
                id: alert.id.clone(),
                action: "resolve".to_string(),
                state: alert.status.to_string(),
            });
        }
        alert.resolve();
        Ok(())
    })
}

/// Move an alert to the archive; it leaves the active list
pub fn archive(view: &mut ListView<Alert>, id: &str) -> Result<Alert, ConsoleError> {
    view.modify(id, Alert::archive)
}

pub fn restore(view: &mut ListView<Alert>, id: &str) -> Result<Alert, ConsoleError> {
    view.modify(id, Alert::restore)
}

/// Active alerts in the visible partition
pub fn active_count(view: &ListView<Alert>) -> usize {
    view.count_where(|alert| alert.status == AlertStatus::Active)
}

/// Visible alerts and activities merged, newest first
pub fn feed(alerts: &ListView<Alert>, activities: &ListView<Activity>) -> Vec<FeedItem> {
    let mut items: Vec<FeedItem> = alerts
        .filtered()
        .iter()
        .cloned()
        .map(FeedItem::Alert)
        .chain(activities.filtered().iter().cloned().map(FeedItem::Activity))
        .collect();
    items.sort_by_key(|item| std::cmp::Reverse(item.created_at()));
    items
}

/// Rows of the feed that show a "Take action" button
pub fn needing_action(feed: &[FeedItem]) -> usize {
    feed.iter().filter(|item| item.needs_action()).count()
}
