//! Lenient parsing of loosely-shaped JSON payloads into typed specs.
//!
//! Host dispatchers send objects with optional fields of unchecked types.
//! Anything unusable falls back to its default instead of failing.

use serde_json::Value;

use crate::constants::{DEFAULT_DURATION_MS, DISMISS_ALL};
use crate::models::{DismissTarget, NoticeId, NoticeType, NotificationSpec, ToastFilter, ToastSpec};

fn string_field(payload: &Value, key: &str) -> Option<String> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Truthy scalars count as a message: non-empty strings, non-zero numbers
/// and `true`. Numbers and booleans are shown as their JSON text.
fn message_field(payload: &Value) -> Option<String> {
    match payload.get("message")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some(String::from("true")),
        _ => None,
    }
}

/// Any positive number of milliseconds, fractions rounded up so a timer
/// never fires early
fn duration_field(payload: &Value) -> u64 {
    let Some(duration) = payload.get("duration") else {
        return DEFAULT_DURATION_MS;
    };
    if let Some(ms) = duration.as_u64() {
        return ms;
    }
    match duration.as_f64() {
        Some(ms) if ms.is_finite() && ms > 0.0 => ms.ceil() as u64,
        _ => DEFAULT_DURATION_MS,
    }
}

fn type_field(payload: &Value) -> NoticeType {
    match payload.get("type").and_then(Value::as_str) {
        Some(name) => NoticeType::from_name(name),
        None => NoticeType::default(),
    }
}

impl ToastSpec {
    /// `{icon?, title?, message, duration?, type?}`
    pub fn from_json(payload: &Value) -> Self {
        ToastSpec {
            icon: string_field(payload, "icon"),
            title: string_field(payload, "title"),
            message: message_field(payload),
            duration_ms: duration_field(payload),
            notice_type: type_field(payload),
        }
    }
}

impl NotificationSpec {
    /// `{title?, message, duration?, type?}`
    pub fn from_json(payload: &Value) -> Self {
        NotificationSpec {
            title: string_field(payload, "title"),
            message: message_field(payload),
            duration_ms: duration_field(payload),
            notice_type: type_field(payload),
        }
    }
}

impl ToastFilter {
    /// An array selects by type name (unknown names included), anything
    /// else clears everything
    pub fn from_json(payload: &Value) -> Self {
        match payload.as_array() {
            Some(names) => ToastFilter::Types(
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(NoticeType::from_name)
                    .collect(),
            ),
            None => ToastFilter::All,
        }
    }
}

impl NoticeId {
    /// Accepts a string or a non-negative integer
    pub fn from_json(payload: &Value) -> Option<Self> {
        match payload {
            Value::String(id) => Some(NoticeId::from(id.as_str())),
            Value::Number(n) => n.as_u64().map(NoticeId::from),
            _ => None,
        }
    }
}

impl DismissTarget {
    pub fn from_json(payload: &Value) -> Option<Self> {
        match payload.as_str() {
            Some(DISMISS_ALL) => Some(DismissTarget::All),
            _ => NoticeId::from_json(payload).map(DismissTarget::One),
        }
    }
}
