//! Notice store - pure data structure with no I/O or timers

use crate::messages::NoticeSnapshot;
use crate::models::{NoticeId, Notification, Toast};

/// Toast and notification collections, insertion ordered
#[derive(Debug)]
pub struct NoticeStore {
    pub(crate) toasts: Vec<Toast>,
    pub(crate) notifications: Vec<Notification>,
    // Monotonic per collection, never rewound, so ids are not reused
    // after deletions or a reset.
    next_toast_seq: u64,
    next_notification_seq: u64,
}

impl Default for NoticeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeStore {
    pub fn new() -> Self {
        NoticeStore {
            toasts: Vec::new(),
            notifications: Vec::new(),
            next_toast_seq: 1,
            next_notification_seq: 1,
        }
    }

    pub(crate) fn next_toast_id(&mut self) -> NoticeId {
        let id = NoticeId::from(self.next_toast_seq);
        self.next_toast_seq += 1;
        id
    }

    pub(crate) fn next_notification_id(&mut self) -> NoticeId {
        let id = NoticeId::from(self.next_notification_seq);
        self.next_notification_seq += 1;
        id
    }

    pub fn toast_count(&self) -> usize {
        self.toasts.len()
    }

    /// Copy of every toast in insertion order
    pub fn all_toasts(&self) -> Vec<Toast> {
        self.toasts.clone()
    }

    pub fn toast(&self, id: &str) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id.as_str() == id)
    }

    pub fn notification_count(&self) -> usize {
        self.notifications.len()
    }

    /// Copy of every notification in insertion order
    pub fn all_notifications(&self) -> Vec<Notification> {
        self.notifications.clone()
    }

    pub fn notification(&self, id: &str) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id.as_str() == id)
    }

    /// Convert state to a snapshot for presenters
    pub fn snapshot(&self) -> NoticeSnapshot {
        NoticeSnapshot {
            toasts: self.all_toasts(),
            notifications: self.all_notifications(),
        }
    }
}
