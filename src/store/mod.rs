//! Store layer - notice collections, lifecycle operations and expiry timers
//!
//! The store actor receives commands from any number of handles, applies
//! them to the `NoticeStore`, schedules expiries and publishes snapshots.

pub mod state;
pub mod commands;
pub mod scheduler;
pub mod actor;
pub mod handle;

pub use state::NoticeStore;
pub use scheduler::{Expired, Expiry, ExpiryScheduler};
pub use actor::StoreActor;
pub use handle::NoticeHandle;
