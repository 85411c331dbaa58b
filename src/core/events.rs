//! Notification bus for toast messages
//!
//! Record actions report their outcome here. The bus wraps a
//! `tokio::sync::broadcast` channel so any number of toast renderers can
//! listen; publishing never blocks and succeeds with no listeners at all.
//!
//! ```rust,ignore
//! let bus = NotificationBus::new(64);
//! let mut rx = bus.subscribe();
//!
//! bus.publish(Notification::success(NotificationKind::RecordCreated {
//!     resource: "patients".to_string(),
//!     id: "PT-1013".to_string(),
//! }));
//!
//! let toast = rx.recv().await?;
//! ```

use crate::core::error::{ConsoleError, ErrorNotice};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;

/// Severity shown on the toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// What happened
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NotificationKind {
    RecordCreated { resource: String, id: String },
    RecordUpdated { resource: String, id: String },
    RecordDeleted { resource: String, id: String },
    ActionFailed { notice: ErrorNotice },
}

/// A toast notification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    #[serde(flatten)]
    pub kind: NotificationKind,
    pub at: DateTime<Utc>,
}

impl Notification {
    pub fn success(kind: NotificationKind) -> Self {
        Self {
            level: NotificationLevel::Success,
            kind,
            at: Utc::now(),
        }
    }

    pub fn failure(error: &ConsoleError) -> Self {
        Self {
            level: NotificationLevel::Error,
            kind: NotificationKind::ActionFailed {
                notice: error.to_notice(),
            },
            at: Utc::now(),
        }
    }

    /// Short text for the toast body
    pub fn message(&self) -> String {
        match &self.kind {
            NotificationKind::RecordCreated { resource, id } => format!("Created {} {}", resource, id),
            NotificationKind::RecordUpdated { resource, id } => format!("Updated {} {}", resource, id),
            NotificationKind::RecordDeleted { resource, id } => format!("Deleted {} {}", resource, id),
            NotificationKind::ActionFailed { notice } => notice.message.clone(),
        }
    }
}

/// Broadcast channel for notifications
#[derive(Debug, Clone)]
pub struct NotificationBus {
    sender: broadcast::Sender<Notification>,
}

impl NotificationBus {
    /// Create a bus buffering up to `capacity` undelivered notifications per listener
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Fire and forget. Returns how many listeners received it.
    pub fn publish(&self, notification: Notification) -> usize {
        tracing::debug!(message = %notification.message(), "notification published");
        self.sender.send(notification).unwrap_or(0)
    }

    /// Publish an error as a failed-action toast
    pub fn failure(&self, error: &ConsoleError) -> usize {
        self.publish(Notification::failure(error))
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RecordError;

    fn created(id: &str) -> Notification {
        Notification::success(NotificationKind::RecordCreated {
            resource: "patients".to_string(),
            id: id.to_string(),
        })
    }

    #[test]
    fn test_publish_without_listeners_is_not_an_error() {
        let bus = NotificationBus::new(8);
        assert_eq!(bus.listener_count(), 0);
        assert_eq!(bus.publish(created("PT-1")), 0);
    }

    #[tokio::test]
    async fn test_subscriber_receives_notification() {
        let bus = NotificationBus::new(8);
        let mut rx = bus.subscribe();

        assert_eq!(bus.publish(created("PT-1")), 1);

        let toast = rx.recv().await.expect("should receive");
        assert_eq!(toast.level, NotificationLevel::Success);
        assert_eq!(toast.message(), "Created patients PT-1");
    }

    #[tokio::test]
    async fn test_failure_carries_error_notice() {
        let bus = NotificationBus::default();
        let mut rx = bus.subscribe();

        let err = ConsoleError::from(RecordError::NotFound {
            resource: "patients".to_string(),
            id: "PT-404".to_string(),
        });
        bus.failure(&err);

        let toast = rx.recv().await.expect("should receive");
        assert_eq!(toast.level, NotificationLevel::Error);
        match toast.kind {
            NotificationKind::ActionFailed { notice } => {
                assert_eq!(notice.code, "RECORD_NOT_FOUND");
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn test_notification_serializes_flat() {
        let json = serde_json::to_value(created("PT-7")).unwrap();
        assert_eq!(json["level"], "success");
        assert_eq!(json["action"], "record_created");
        assert_eq!(json["id"], "PT-7");
    }
}
