//! UI events - key presses of the demo presenter and the commands they map to

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::messages::{NoticeSnapshot, StoreCommand};
use crate::models::{DismissTarget, NoticeType, NotificationSpec, ToastFilter, ToastSpec};

/// Events generated from user input in the demo presenter
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    CreateToast(NoticeType),
    CreatePersistentToast,
    CreateNotification,
    RemoveOldestToast,
    /// Clears warning and danger toasts
    ClearUrgentToasts,
    ClearAllToasts,
    DismissAllNotifications,
    Reset,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent
pub fn key_to_ui_event(key: KeyEvent, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            Some(UiEvent::CreateToast(NoticeType::ALL[index].clone()))
        }
        KeyCode::Char('p') => Some(UiEvent::CreatePersistentToast),
        KeyCode::Char('n') => Some(UiEvent::CreateNotification),
        KeyCode::Char('d') => Some(UiEvent::RemoveOldestToast),
        KeyCode::Char('x') => Some(UiEvent::ClearUrgentToasts),
        KeyCode::Char('X') => Some(UiEvent::ClearAllToasts),
        KeyCode::Char('a') => Some(UiEvent::DismissAllNotifications),
        KeyCode::Char('r') => Some(UiEvent::Reset),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
        _ => None,
    }
}

impl UiEvent {
    /// Store command for this event, if it has one.
    ///
    /// `seq` numbers the demo messages, `duration_ms` is the configured
    /// auto-expiry for keyboard-created notices.
    pub fn to_command(
        self,
        snapshot: &NoticeSnapshot,
        seq: u64,
        duration_ms: u64,
    ) -> Option<StoreCommand> {
        let command = match self {
            UiEvent::CreateToast(notice_type) => StoreCommand::CreateToast(
                ToastSpec::new(format!("{} toast #{}", notice_type, seq))
                    .notice_type(notice_type)
                    .duration_ms(duration_ms),
            ),
            UiEvent::CreatePersistentToast => StoreCommand::CreateToast(
                ToastSpec::new(format!("Persistent toast #{}", seq))
                    .title("Pinned")
                    .notice_type(NoticeType::Secondary),
            ),
            UiEvent::CreateNotification => StoreCommand::CreateNotification(
                NotificationSpec::new(format!("Notification #{}", seq))
                    .title("Inbox")
                    .duration_ms(duration_ms * 2),
            ),
            UiEvent::RemoveOldestToast => {
                let oldest = snapshot.toasts.first()?;
                StoreCommand::RemoveToast(oldest.id.clone())
            }
            UiEvent::ClearUrgentToasts => StoreCommand::ClearToasts(ToastFilter::Types(vec![
                NoticeType::Warning,
                NoticeType::Danger,
            ])),
            UiEvent::ClearAllToasts => StoreCommand::ClearToasts(ToastFilter::All),
            UiEvent::DismissAllNotifications => StoreCommand::DismissNotification(DismissTarget::All),
            UiEvent::Reset => StoreCommand::Reset,
            UiEvent::ToggleHelp | UiEvent::CloseHelp | UiEvent::Quit => return None,
        };
        Some(command)
    }
}
