//! Store commands - messages from dispatchers to the store actor

use serde_json::Value;
use tokio::sync::oneshot;

use crate::messages::NoticeSnapshot;
use crate::models::{DismissTarget, NoticeId, NotificationSpec, ToastFilter, ToastSpec};

/// Commands accepted by the store actor
#[derive(Debug)]
pub enum StoreCommand {
    /// Insert a toast, with optional auto-expiry
    CreateToast(ToastSpec),
    /// Remove one toast if present
    RemoveToast(NoticeId),
    /// Remove matching (or all) toasts
    ClearToasts(ToastFilter),
    /// Insert a notification, with optional auto-expiry
    CreateNotification(NotificationSpec),
    /// Remove one or all notifications
    DismissNotification(DismissTarget),
    /// Empty both collections and drop every pending timer
    Reset,
    /// Reply with the current collections
    Snapshot(oneshot::Sender<NoticeSnapshot>),
    /// Stop the actor
    Shutdown,
}

impl StoreCommand {
    /// Builds a command from a dispatcher-style name and a loose JSON payload.
    ///
    /// Payload problems never fail: they fall back to the defaults of the
    /// target spec. Only an unknown command name is an error.
    pub fn from_json(name: &str, payload: &Value) -> anyhow::Result<Self> {
        let command = match name {
            "CreateToast" => StoreCommand::CreateToast(ToastSpec::from_json(payload)),
            "RemoveToast" => match NoticeId::from_json(payload) {
                Some(id) => StoreCommand::RemoveToast(id),
                None => anyhow::bail!("RemoveToast needs a string or numeric id"),
            },
            "ClearToasts" => StoreCommand::ClearToasts(ToastFilter::from_json(payload)),
            "CreateNotification" => {
                StoreCommand::CreateNotification(NotificationSpec::from_json(payload))
            }
            "dismissNotification" | "DismissNotification" | "RemoveNotification" => {
                match DismissTarget::from_json(payload) {
                    Some(target) => StoreCommand::DismissNotification(target),
                    None => anyhow::bail!("{} needs a string or numeric id", name),
                }
            }
            "Reset" => StoreCommand::Reset,
            other => anyhow::bail!("unknown store command: {}", other),
        };
        Ok(command)
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            StoreCommand::CreateToast(_) => "CreateToast",
            StoreCommand::RemoveToast(_) => "RemoveToast",
            StoreCommand::ClearToasts(_) => "ClearToasts",
            StoreCommand::CreateNotification(_) => "CreateNotification",
            StoreCommand::DismissNotification(_) => "DismissNotification",
            StoreCommand::Reset => "Reset",
            StoreCommand::Snapshot(_) => "Snapshot",
            StoreCommand::Shutdown => "Shutdown",
        }
    }
}
