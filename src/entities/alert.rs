//! Alerts and the activity feed

use super::Priority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

crate::impl_field_enum!(
    AlertCategory {
        Inventory => "inventory",
        Prescription => "prescription",
        Delivery => "delivery",
        System => "system",
    }
);

crate::impl_field_enum!(
    AlertStatus {
        Active => "active",
        Resolved => "resolved",
    }
);

crate::impl_field_enum!(
    ActivityStatus {
        Pending => "pending",
        Completed => "completed",
    }
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Alert {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(length(min = 1, max = 120))]
    pub title: String,

    pub message: String,
    pub category: AlertCategory,
    pub priority: Priority,
    pub status: AlertStatus,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
}

crate::impl_record!(
    Alert,
    "alerts",
    search: [title, message, category],
    fields: [id, title, message, category, priority, status, archived, created_at],
    archived: archived,
);

impl Alert {
    pub fn resolve(&mut self) {
        self.status = AlertStatus::Resolved;
    }

    pub fn archive(&mut self) {
        self.archived = true;
    }

    pub fn restore(&mut self) {
        self.archived = false;
    }
}

/// Something a staff member did or still has to do
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Activity {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(length(min = 1))]
    pub description: String,

    pub user: String,
    pub status: ActivityStatus,
    pub created_at: DateTime<Utc>,
}

crate::impl_record!(
    Activity,
    "activities",
    search: [description, user],
    fields: [id, description, user, status, created_at],
);

/// One row of the combined alerts and activity feed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedItem {
    Alert(Alert),
    Activity(Activity),
}

impl FeedItem {
    /// Active alerts and pending activities get a "Take action" button
    pub fn needs_action(&self) -> bool {
        match self {
            FeedItem::Alert(alert) => alert.status == AlertStatus::Active,
            FeedItem::Activity(activity) => activity.status == ActivityStatus::Pending,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            FeedItem::Alert(alert) => alert.created_at,
            FeedItem::Activity(activity) => activity.created_at,
        }
    }
}
