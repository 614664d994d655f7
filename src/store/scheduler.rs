//! Expiry scheduler - one sleeping tokio task per notice with a duration
//!
//! Timer tasks never touch the store. They finish with an [`Expired`] value
//! which the actor turns into an ordinary idempotent removal, so a timer
//! that fires after a manual dismiss does nothing.

use std::collections::HashMap;
use std::time::Duration;
use tokio::task::{AbortHandle, JoinSet};

use crate::models::{NoticeId, NoticeKind};

/// A removal to run once `after` has elapsed
#[derive(Debug, Clone, PartialEq)]
pub struct Expiry {
    pub kind: NoticeKind,
    pub id: NoticeId,
    pub after: Duration,
}

impl Expiry {
    /// `None` for a zero duration, which means "never expire"
    pub fn after_ms(kind: NoticeKind, id: NoticeId, duration_ms: u64) -> Option<Self> {
        (duration_ms > 0).then(|| Expiry {
            kind,
            id,
            after: Duration::from_millis(duration_ms),
        })
    }
}

/// A timer that ran out
#[derive(Debug, Clone, PartialEq)]
pub struct Expired {
    pub kind: NoticeKind,
    pub id: NoticeId,
}

/// Owns the pending expiry timers and their abort handles
#[derive(Default)]
pub struct ExpiryScheduler {
    timers: JoinSet<Expired>,
    pending: HashMap<(NoticeKind, NoticeId), AbortHandle>,
}

impl ExpiryScheduler {
    pub fn new() -> Self {
        ExpiryScheduler {
            timers: JoinSet::new(),
            pending: HashMap::new(),
        }
    }

    /// Starts the timer for a notice. Must be called from within a tokio runtime.
    pub fn schedule(&mut self, expiry: Expiry) {
        let Expiry { kind, id, after } = expiry;
        tracing::debug!(?kind, id = %id, after_ms = after.as_millis() as u64, "Scheduling expiry");

        let key = (kind, id.clone());
        let handle = self.timers.spawn(async move {
            tokio::time::sleep(after).await;
            Expired { kind, id }
        });

        if let Some(previous) = self.pending.insert(key, handle) {
            previous.abort();
        }
    }

    /// Aborts the pending timer of a notice. Returns false if none was pending.
    pub fn cancel(&mut self, kind: NoticeKind, id: &NoticeId) -> bool {
        match self.pending.remove(&(kind, id.clone())) {
            Some(handle) => {
                handle.abort();
                tracing::debug!(?kind, id = %id, "Expiry cancelled");
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
        self.timers.abort_all();
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Waits for the next timer to fire. Returns `None` right away when no
    /// timer is running. Cancel safe.
    pub async fn next_expired(&mut self) -> Option<Expired> {
        while let Some(joined) = self.timers.join_next().await {
            match joined {
                Ok(expired) => {
                    self.pending.remove(&(expired.kind, expired.id.clone()));
                    return Some(expired);
                }
                Err(err) if err.is_cancelled() => continue,
                Err(err) => tracing::warn!(error = %err, "Expiry timer failed"),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_never_expires() {
        assert_eq!(Expiry::after_ms(NoticeKind::Toast, NoticeId::from(1), 0), None);
        let expiry = Expiry::after_ms(NoticeKind::Toast, NoticeId::from(1), 250).unwrap();
        assert_eq!(expiry.after, Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_duration() {
        let mut scheduler = ExpiryScheduler::new();
        let started = tokio::time::Instant::now();
        scheduler.schedule(Expiry::after_ms(NoticeKind::Toast, NoticeId::from(1), 100).unwrap());
        assert_eq!(scheduler.pending_count(), 1);

        let expired = scheduler.next_expired().await.unwrap();
        assert_eq!(expired.id, NoticeId::from(1));
        assert!(started.elapsed() >= Duration::from_millis(100));
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(scheduler.next_expired().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_is_skipped() {
        let mut scheduler = ExpiryScheduler::new();
        scheduler.schedule(Expiry::after_ms(NoticeKind::Toast, NoticeId::from(1), 100).unwrap());
        scheduler.schedule(Expiry::after_ms(NoticeKind::Notification, NoticeId::from(1), 200).unwrap());

        assert!(scheduler.cancel(NoticeKind::Toast, &NoticeId::from(1)));
        assert!(!scheduler.cancel(NoticeKind::Toast, &NoticeId::from(1)));

        let expired = scheduler.next_expired().await.unwrap();
        assert_eq!(expired.kind, NoticeKind::Notification);
        assert_eq!(scheduler.next_expired().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all() {
        let mut scheduler = ExpiryScheduler::new();
        for seq in 1..=3 {
            scheduler.schedule(Expiry::after_ms(NoticeKind::Toast, NoticeId::from(seq), 50).unwrap());
        }
        scheduler.cancel_all();
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(scheduler.next_expired().await, None);
    }
}
