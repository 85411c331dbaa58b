//! Internal inbox

use super::Priority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Message {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(length(min = 1))]
    pub sender: String,

    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    pub body: String,
    pub priority: Priority,
    pub read: bool,
    pub archived: bool,
    pub sent_at: DateTime<Utc>,
}

crate::impl_record!(
    Message,
    "messages",
    search: [sender, subject, body],
    fields: [id, sender, subject, body, priority, read, archived, sent_at],
    archived: archived,
);

impl Message {
    /// Returns false when it was already read
    pub fn mark_read(&mut self) -> bool {
        !std::mem::replace(&mut self.read, true)
    }
}
