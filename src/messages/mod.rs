//! Message types exchanged between dispatchers, the store actor and presenters.

pub mod commands;
pub mod payload;
pub mod render;
pub mod ui_events;

pub use commands::StoreCommand;
pub use render::NoticeSnapshot;
pub use ui_events::UiEvent;
