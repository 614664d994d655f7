//! # Notice Board
//!
//! An in-memory store for short-lived toasts and notifications.
//!
//! ## Features
//! - Toasts (with optional icon) and notifications, six notice types
//! - Store-assigned ids, never reused for the lifetime of a store
//! - Auto-expiry after a per-notice duration
//! - Idempotent removal: late timers and double dismissals are harmless
//! - Bulk clearing by type, dismiss-all
//! - Lenient JSON command payloads for loosely typed dispatchers
//!
//! ## Architecture
//! Actor-based with channels:
//! - Store Layer (Tokio) - owns the collections and expiry timers
//! - Handles - cloneable command senders
//! - Presenters - consume snapshots, never the store itself

pub mod models;
pub mod config;
pub mod constants;
pub mod ui;
pub mod messages;
pub mod store;

// Re-export commonly used types
pub use models::{
    DismissTarget, IconSource, NoticeId, NoticeKind, NoticeType, Notification, NotificationSpec,
    Toast, ToastFilter, ToastSpec,
};
pub use config::BoardConfig;
pub use messages::{NoticeSnapshot, StoreCommand, UiEvent};
pub use store::{NoticeHandle, NoticeStore, StoreActor};
