//! Store handle - cloneable front door to a running store actor

use serde_json::Value;
use tokio::sync::{mpsc, oneshot, watch};

use crate::messages::{NoticeSnapshot, StoreCommand};
use crate::models::{DismissTarget, NoticeId, NotificationSpec, ToastFilter, ToastSpec};
use crate::store::actor::StoreActor;

/// Sends commands to the store actor. Every method is fire-and-forget
/// except [`NoticeHandle::snapshot`].
#[derive(Clone, Debug)]
pub struct NoticeHandle {
    cmd_tx: mpsc::UnboundedSender<StoreCommand>,
}

impl NoticeHandle {
    /// Spawns a fresh store actor on the current runtime.
    ///
    /// The watch receiver holds the latest snapshot, starting with the empty
    /// store, and is marked changed after every change. Intermediate states
    /// are overwritten, so a presenter that never reads costs one snapshot.
    pub fn spawn() -> (Self, watch::Receiver<NoticeSnapshot>) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<StoreCommand>();
        let (render_tx, render_rx) = watch::channel(NoticeSnapshot::default());

        let actor = StoreActor::new(render_tx);
        tokio::spawn(actor.run(cmd_rx));

        (NoticeHandle { cmd_tx }, render_rx)
    }

    /// Returns false once the actor has stopped
    pub fn dispatch(&self, command: StoreCommand) -> bool {
        self.cmd_tx.send(command).is_ok()
    }

    /// Parses a named command with a loose JSON payload and dispatches it
    pub fn dispatch_json(&self, name: &str, payload: &Value) -> anyhow::Result<()> {
        let command = StoreCommand::from_json(name, payload).map_err(|err| {
            tracing::warn!(name, error = %err, "Rejected store command");
            err
        })?;
        if !self.dispatch(command) {
            anyhow::bail!("store actor is not running");
        }
        Ok(())
    }

    pub fn create_toast(&self, spec: ToastSpec) {
        self.dispatch(StoreCommand::CreateToast(spec));
    }

    pub fn remove_toast(&self, id: impl Into<NoticeId>) {
        self.dispatch(StoreCommand::RemoveToast(id.into()));
    }

    pub fn clear_toasts(&self, filter: ToastFilter) {
        self.dispatch(StoreCommand::ClearToasts(filter));
    }

    pub fn create_notification(&self, spec: NotificationSpec) {
        self.dispatch(StoreCommand::CreateNotification(spec));
    }

    pub fn dismiss_notification(&self, target: DismissTarget) {
        self.dispatch(StoreCommand::DismissNotification(target));
    }

    pub fn reset(&self) {
        self.dispatch(StoreCommand::Reset);
    }

    pub fn shutdown(&self) {
        self.dispatch(StoreCommand::Shutdown);
    }

    /// Current collections, or `None` if the actor has stopped
    pub async fn snapshot(&self) -> Option<NoticeSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        if !self.dispatch(StoreCommand::Snapshot(reply_tx)) {
            return None;
        }
        reply_rx.await.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoticeType;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_duration() {
        let (handle, _render_rx) = NoticeHandle::spawn();
        handle.create_toast(ToastSpec::new("Saved").duration_ms(100));

        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.toast_count(), 1);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(handle.snapshot().await.unwrap().toast_count(), 1);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(handle.snapshot().await.unwrap().toast_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_removal_before_expiry() {
        let (handle, _render_rx) = NoticeHandle::spawn();
        handle.create_toast(ToastSpec::new("short").duration_ms(100));
        handle.create_toast(ToastSpec::new("forever"));
        handle.remove_toast("1");

        tokio::time::sleep(Duration::from_millis(200)).await;
        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.toast_count(), 1);
        assert_eq!(snapshot.toasts[0].message, "forever");
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_expiry_and_dismiss_all() {
        let (handle, _render_rx) = NoticeHandle::spawn();
        handle.create_notification(NotificationSpec::new("gone soon").duration_ms(100));
        handle.create_notification(NotificationSpec::new("sticky"));
        handle.create_notification(NotificationSpec::new("sticky too"));

        tokio::time::sleep(Duration::from_millis(150)).await;
        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.notification_count(), 2);

        handle.dismiss_notification(DismissTarget::All);
        assert_eq!(handle.snapshot().await.unwrap().notification_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_snapshots_follow_changes() {
        let (handle, mut render_rx) = NoticeHandle::spawn();

        assert!(render_rx.borrow().is_empty());

        handle.create_toast(ToastSpec::new("hello").duration_ms(100));
        render_rx.changed().await.unwrap();
        assert_eq!(render_rx.borrow_and_update().toast_count(), 1);

        // Ignored creation publishes nothing, the next change is the expiry
        handle.create_toast(ToastSpec::default());
        render_rx.changed().await.unwrap();
        assert_eq!(render_rx.borrow_and_update().toast_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unread_snapshots_keep_only_latest() {
        let (handle, mut render_rx) = NoticeHandle::spawn();
        for i in 0..3 {
            handle.create_toast(ToastSpec::new(format!("t{}", i)));
        }
        // Round trip so all three creations have been applied
        handle.snapshot().await.unwrap();

        assert!(render_rx.has_changed().unwrap());
        assert_eq!(render_rx.borrow_and_update().toast_count(), 3);
        assert!(!render_rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_json() {
        let (handle, _render_rx) = NoticeHandle::spawn();
        handle
            .dispatch_json("CreateToast", &json!({"message": "Saved", "type": "success"}))
            .unwrap();
        handle
            .dispatch_json("CreateToast", &json!({"message": "Oops", "type": "danger"}))
            .unwrap();
        handle.dispatch_json("CreateToast", &json!({"title": "no message"})).unwrap();
        assert!(handle.dispatch_json("Explode", &Value::Null).is_err());

        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.toast_count(), 2);
        assert_eq!(snapshot.toasts[0].id.as_str(), "1");
        assert_eq!(snapshot.toasts[0].notice_type, NoticeType::Success);

        handle.dispatch_json("ClearToasts", &json!(["danger"])).unwrap();
        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.toast_count(), 1);
        assert_eq!(snapshot.toasts[0].message, "Saved");

        handle.dispatch_json("ClearToasts", &Value::Null).unwrap();
        assert_eq!(handle.snapshot().await.unwrap().toast_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_and_shutdown() {
        let (handle, _render_rx) = NoticeHandle::spawn();
        handle.create_toast(ToastSpec::new("a").duration_ms(100));
        handle.create_notification(NotificationSpec::new("b"));
        handle.reset();

        let snapshot = handle.snapshot().await.unwrap();
        assert!(snapshot.is_empty());

        handle.shutdown();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(handle.snapshot().await, None);
        assert!(!handle.dispatch(StoreCommand::Reset));
    }
}
