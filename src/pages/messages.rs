//! Inbox with an archive

use super::{ConsolePage, ListPage};
use crate::core::error::ConsoleError;
use crate::core::sort::{SortKind, SortSpec};
use crate::entities::Message;
use crate::view::ListView;

impl ListPage for Message {
    const PAGE: ConsolePage = ConsolePage::Messages;

    fn sort_kinds() -> &'static [(&'static str, SortKind)] {
        &[("sent_at", SortKind::Date)]
    }

    fn archive_partition() -> bool {
        true
    }

    fn default_sort() -> Option<SortSpec> {
        Some(SortSpec::desc("sent_at"))
    }
}

pub fn mark_read(view: &mut ListView<Message>, id: &str) -> Result<Message, ConsoleError> {
    view.modify(id, |message| {
        message.mark_read();
    })
}

pub fn archive(view: &mut ListView<Message>, id: &str) -> Result<Message, ConsoleError> {
    view.modify(id, |message| message.archived = true)
}

pub fn restore(view: &mut ListView<Message>, id: &str) -> Result<Message, ConsoleError> {
    view.modify(id, |message| message.archived = false)
}

/// Unread messages in the visible partition
pub fn unread_count(view: &ListView<Message>) -> usize {
    view.count_where(|message| !message.read)
}
