//! Store actor - message loop applying commands and expiries to the store

use tokio::sync::{mpsc, watch};

use crate::messages::{NoticeSnapshot, StoreCommand};
use crate::models::NoticeKind;
use crate::store::scheduler::{Expired, Expiry, ExpiryScheduler};
use crate::store::state::NoticeStore;

/// Owns the store and its timers; the only place state changes happen
pub struct StoreActor {
    store: NoticeStore,
    scheduler: ExpiryScheduler,
    render_tx: watch::Sender<NoticeSnapshot>,
}

impl StoreActor {
    pub fn new(render_tx: watch::Sender<NoticeSnapshot>) -> Self {
        StoreActor {
            store: NoticeStore::new(),
            scheduler: ExpiryScheduler::new(),
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<StoreCommand>) {
        loop {
            tokio::select! {
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(StoreCommand::Shutdown) | None => {
                            tracing::info!(pending = self.scheduler.pending_count(), "Store actor shutting down");
                            self.scheduler.cancel_all();
                            break;
                        }
                        Some(command) => {
                            if self.handle_command(command) {
                                self.publish();
                            }
                        }
                    }
                }

                Some(expired) = self.scheduler.next_expired() => {
                    if self.handle_expired(expired) {
                        self.publish();
                    }
                }
            }
        }
    }

    /// Replaces the latest snapshot; presenters that fall behind only see the newest
    fn publish(&self) {
        self.render_tx.send_replace(self.store.snapshot());
    }

    /// Apply a command, returns true if the collections changed
    fn handle_command(&mut self, command: StoreCommand) -> bool {
        tracing::debug!(command = command.name(), "Handling command");

        match command {
            StoreCommand::CreateToast(spec) => {
                let duration_ms = spec.duration_ms;
                match self.store.create_toast(spec) {
                    Some(id) => {
                        if let Some(expiry) = Expiry::after_ms(NoticeKind::Toast, id, duration_ms) {
                            self.scheduler.schedule(expiry);
                        }
                        true
                    }
                    None => false,
                }
            }
            StoreCommand::RemoveToast(id) => {
                let removed = self.store.remove_toast(id.as_str());
                if removed {
                    self.scheduler.cancel(NoticeKind::Toast, &id);
                }
                removed
            }
            StoreCommand::ClearToasts(filter) => {
                let removed = self.store.clear_toasts(&filter);
                for id in &removed {
                    self.scheduler.cancel(NoticeKind::Toast, id);
                }
                !removed.is_empty()
            }
            StoreCommand::CreateNotification(spec) => {
                let duration_ms = spec.duration_ms;
                match self.store.create_notification(spec) {
                    Some(id) => {
                        if let Some(expiry) =
                            Expiry::after_ms(NoticeKind::Notification, id, duration_ms)
                        {
                            self.scheduler.schedule(expiry);
                        }
                        true
                    }
                    None => false,
                }
            }
            StoreCommand::DismissNotification(target) => {
                let removed = self.store.dismiss_notification(&target);
                for id in &removed {
                    self.scheduler.cancel(NoticeKind::Notification, id);
                }
                !removed.is_empty()
            }
            StoreCommand::Reset => {
                self.scheduler.cancel_all();
                self.store.reset();
                true
            }
            StoreCommand::Snapshot(reply) => {
                let _ = reply.send(self.store.snapshot());
                false
            }
            // Handled by the run loop
            StoreCommand::Shutdown => false,
        }
    }

    fn handle_expired(&mut self, expired: Expired) -> bool {
        tracing::info!(kind = ?expired.kind, id = %expired.id, "Notice expired");
        match expired.kind {
            NoticeKind::Toast => self.store.remove_toast(expired.id.as_str()),
            NoticeKind::Notification => self.store.remove_notification(expired.id.as_str()),
        }
    }
}
