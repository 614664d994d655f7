//! Notice snapshot - data sent from the store actor to presenters

use serde::Serialize;

use crate::models::{Notification, Toast};

/// Owned copy of both collections; changing it never touches the store
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NoticeSnapshot {
    pub toasts: Vec<Toast>,
    pub notifications: Vec<Notification>,
}

impl NoticeSnapshot {
    pub fn toast_count(&self) -> usize {
        self.toasts.len()
    }

    pub fn notification_count(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty() && self.notifications.is_empty()
    }
}
