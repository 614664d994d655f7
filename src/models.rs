use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::constants::DEFAULT_DURATION_MS;

/// Category of a toast or notification
///
/// Names outside the six known types are kept as given, so a toast created
/// with type `"error"` can later be cleared by `"error"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum NoticeType {
    Primary,
    Secondary,
    #[default]
    Info,
    Success,
    Warning,
    Danger,
    Other(String),
}

impl NoticeType {
    pub const ALL: [NoticeType; 6] = [
        NoticeType::Primary,
        NoticeType::Secondary,
        NoticeType::Info,
        NoticeType::Success,
        NoticeType::Warning,
        NoticeType::Danger,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            NoticeType::Primary => "primary",
            NoticeType::Secondary => "secondary",
            NoticeType::Info => "info",
            NoticeType::Success => "success",
            NoticeType::Warning => "warning",
            NoticeType::Danger => "danger",
            NoticeType::Other(name) => name,
        }
    }

    /// Maps a type name; an empty name gives the default
    pub fn from_name(name: &str) -> NoticeType {
        if name.is_empty() {
            return NoticeType::default();
        }
        NoticeType::ALL
            .into_iter()
            .find(|t| t.as_str() == name)
            .unwrap_or_else(|| NoticeType::Other(name.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, NoticeType::Other(_))
    }
}

impl fmt::Display for NoticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for NoticeType {
    fn from(name: &str) -> Self {
        NoticeType::from_name(name)
    }
}

impl Serialize for NoticeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Which collection a notice lives in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Toast,
    Notification,
}

/// Store-assigned identifier, unique within its collection
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NoticeId(String);

impl NoticeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for NoticeId {
    fn from(seq: u64) -> Self {
        NoticeId(seq.to_string())
    }
}

impl From<&str> for NoticeId {
    fn from(id: &str) -> Self {
        NoticeId(id.to_string())
    }
}

impl From<String> for NoticeId {
    fn from(id: String) -> Self {
        NoticeId(id)
    }
}

/// A short transient message, optionally with an icon
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Toast {
    pub id: NoticeId,
    /// URL or base64 image data, rendered as a 32x32 square
    pub icon: Option<String>,
    pub title: Option<String>,
    pub message: String,
    pub duration_ms: u64,
    #[serde(rename = "type")]
    pub notice_type: NoticeType,
    pub created_at: DateTime<Utc>,
}

/// A UI message without icon support
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Notification {
    pub id: NoticeId,
    pub title: Option<String>,
    pub message: String,
    pub duration_ms: u64,
    #[serde(rename = "type")]
    pub notice_type: NoticeType,
    pub created_at: DateTime<Utc>,
}

/// Fields recognised when creating a toast
///
/// A spec without a non-empty `message` is ignored by the store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastSpec {
    pub icon: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    /// Milliseconds until auto-expiry, 0 disables it
    pub duration_ms: u64,
    pub notice_type: NoticeType,
}

impl ToastSpec {
    pub fn new(message: impl Into<String>) -> Self {
        ToastSpec {
            message: Some(message.into()),
            duration_ms: DEFAULT_DURATION_MS,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn notice_type(mut self, notice_type: NoticeType) -> Self {
        self.notice_type = notice_type;
        self
    }
}

/// Fields recognised when creating a notification
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationSpec {
    pub title: Option<String>,
    pub message: Option<String>,
    pub duration_ms: u64,
    pub notice_type: NoticeType,
}

impl NotificationSpec {
    pub fn new(message: impl Into<String>) -> Self {
        NotificationSpec {
            message: Some(message.into()),
            duration_ms: DEFAULT_DURATION_MS,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn notice_type(mut self, notice_type: NoticeType) -> Self {
        self.notice_type = notice_type;
        self
    }
}

/// Selects which toasts a bulk clear removes
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ToastFilter {
    /// Every toast
    #[default]
    All,
    /// Toasts whose type is listed, compared by name; an empty list matches nothing
    Types(Vec<NoticeType>),
}

impl ToastFilter {
    pub fn matches(&self, notice_type: &NoticeType) -> bool {
        match self {
            ToastFilter::All => true,
            ToastFilter::Types(types) => types.contains(notice_type),
        }
    }
}

/// Target of a notification dismissal
#[derive(Clone, Debug, PartialEq)]
pub enum DismissTarget {
    All,
    One(NoticeId),
}

/// Where a toast icon points to, as far as a presenter can tell
#[derive(Clone, Debug, PartialEq)]
pub enum IconSource {
    Url(String),
    Inline(Vec<u8>),
    Unknown,
}

impl IconSource {
    /// Classifies an icon string as a URL, inline base64 data (optionally a
    /// `data:` URI) or something unrecognised.
    pub fn classify(icon: &str) -> IconSource {
        let icon = icon.trim();
        if icon.starts_with("http://") || icon.starts_with("https://") || icon.starts_with('/') {
            return IconSource::Url(icon.to_string());
        }

        let encoded = icon
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(";base64,"))
            .map(|(_, data)| data)
            .unwrap_or(icon);

        match STANDARD.decode(encoded) {
            Ok(bytes) if !bytes.is_empty() => IconSource::Inline(bytes),
            _ => IconSource::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_type_defaults_to_info() {
        assert_eq!(NoticeType::default(), NoticeType::Info);
        assert_eq!(ToastSpec::new("hi").notice_type, NoticeType::Info);
    }

    #[test]
    fn test_notice_type_from_name() {
        assert_eq!(NoticeType::from_name("danger"), NoticeType::Danger);
        assert_eq!(NoticeType::from_name(""), NoticeType::Info);

        let error = NoticeType::from_name("error");
        assert_eq!(error, NoticeType::Other(String::from("error")));
        assert!(!error.is_known());
        assert_eq!(error.as_str(), "error");
        assert_eq!(NoticeType::from("Info"), NoticeType::Other(String::from("Info")));
    }

    #[test]
    fn test_toast_serializes_type_field() {
        let toast = Toast {
            id: NoticeId::from(1),
            icon: None,
            title: None,
            message: String::from("Saved"),
            duration_ms: 0,
            notice_type: NoticeType::Success,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&toast).unwrap();
        assert_eq!(value["id"], "1");
        assert_eq!(value["type"], "success");
        assert!(value["icon"].is_null());

        let error = serde_json::to_value(NoticeType::from("error")).unwrap();
        assert_eq!(error, "error");
    }

    #[test]
    fn test_filter_matches() {
        assert!(ToastFilter::All.matches(&NoticeType::Warning));
        let filter = ToastFilter::Types(vec![NoticeType::Danger, NoticeType::from("error")]);
        assert!(filter.matches(&NoticeType::Danger));
        assert!(filter.matches(&NoticeType::Other(String::from("error"))));
        assert!(!filter.matches(&NoticeType::Info));
        assert!(!ToastFilter::Types(Vec::new()).matches(&NoticeType::Info));
    }

    #[test]
    fn test_classify_icon() {
        assert_eq!(
            IconSource::classify("https://example.com/a.png"),
            IconSource::Url(String::from("https://example.com/a.png"))
        );
        assert_eq!(
            IconSource::classify("data:image/png;base64,aGVsbG8="),
            IconSource::Inline(b"hello".to_vec())
        );
        assert_eq!(IconSource::classify("aGVsbG8="), IconSource::Inline(b"hello".to_vec()));
        assert_eq!(IconSource::classify("not base64!"), IconSource::Unknown);
    }
}
