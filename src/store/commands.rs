//! Command handlers - the notice lifecycle operations
//!
//! None of these fail. Missing messages and unknown ids degrade to no-ops
//! that only show up in the logs.

use chrono::Utc;

use crate::models::{
    DismissTarget, NoticeId, Notification, NotificationSpec, Toast, ToastFilter, ToastSpec,
};
use crate::store::NoticeStore;

impl NoticeStore {
    // ========================
    // Toasts
    // ========================

    /// Appends a toast and returns its id, or `None` when the spec has no
    /// message. Scheduling the expiry is up to the caller.
    pub fn create_toast(&mut self, spec: ToastSpec) -> Option<NoticeId> {
        let Some(message) = spec.message.filter(|m| !m.is_empty()) else {
            tracing::debug!("Ignoring toast without message");
            return None;
        };

        let id = self.next_toast_id();
        let toast = Toast {
            id: id.clone(),
            icon: spec.icon.filter(|i| !i.is_empty()),
            title: spec.title,
            message,
            duration_ms: spec.duration_ms,
            notice_type: spec.notice_type,
            created_at: Utc::now(),
        };
        tracing::info!(id = %id, notice_type = %toast.notice_type, duration_ms = toast.duration_ms, "Toast created");
        self.toasts.push(toast);
        Some(id)
    }

    /// Removes a toast; returns false when no toast has that id
    pub fn remove_toast(&mut self, id: &str) -> bool {
        match self.toasts.iter().position(|t| t.id.as_str() == id) {
            Some(index) => {
                self.toasts.remove(index);
                tracing::info!(id, "Toast removed");
                true
            }
            None => {
                tracing::debug!(id, "Toast already gone");
                false
            }
        }
    }

    /// Removes every toast the filter matches and returns the removed ids
    pub fn clear_toasts(&mut self, filter: &ToastFilter) -> Vec<NoticeId> {
        let ids: Vec<NoticeId> = self
            .toasts
            .iter()
            .filter(|t| filter.matches(&t.notice_type))
            .map(|t| t.id.clone())
            .collect();

        ids.into_iter()
            .filter(|id| self.remove_toast(id.as_str()))
            .collect()
    }

    // ========================
    // Notifications
    // ========================

    pub fn create_notification(&mut self, spec: NotificationSpec) -> Option<NoticeId> {
        let Some(message) = spec.message.filter(|m| !m.is_empty()) else {
            tracing::debug!("Ignoring notification without message");
            return None;
        };

        let id = self.next_notification_id();
        let notification = Notification {
            id: id.clone(),
            title: spec.title,
            message,
            duration_ms: spec.duration_ms,
            notice_type: spec.notice_type,
            created_at: Utc::now(),
        };
        tracing::info!(id = %id, notice_type = %notification.notice_type, duration_ms = notification.duration_ms, "Notification created");
        self.notifications.push(notification);
        Some(id)
    }

    pub fn remove_notification(&mut self, id: &str) -> bool {
        match self.notifications.iter().position(|n| n.id.as_str() == id) {
            Some(index) => {
                self.notifications.remove(index);
                tracing::info!(id, "Notification removed");
                true
            }
            None => {
                tracing::debug!(id, "Notification already gone");
                false
            }
        }
    }

    /// Removes one or all notifications and returns the removed ids
    pub fn dismiss_notification(&mut self, target: &DismissTarget) -> Vec<NoticeId> {
        let ids: Vec<NoticeId> = match target {
            DismissTarget::All => self.notifications.iter().map(|n| n.id.clone()).collect(),
            DismissTarget::One(id) => vec![id.clone()],
        };

        ids.into_iter()
            .filter(|id| self.remove_notification(id.as_str()))
            .collect()
    }

    // ========================
    // Lifecycle
    // ========================

    /// Empties both collections. Id sequences keep counting.
    pub fn reset(&mut self) {
        tracing::info!(
            toasts = self.toasts.len(),
            notifications = self.notifications.len(),
            "Store reset"
        );
        self.toasts.clear();
        self.notifications.clear();
    }
}
