use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::models::{IconSource, NoticeType, Notification, Toast};

/// Notice type color
pub fn type_color(notice_type: &NoticeType) -> Color {
    match notice_type {
        NoticeType::Primary => Color::Blue,
        NoticeType::Secondary => Color::Gray,
        NoticeType::Info => Color::Cyan,
        NoticeType::Success => Color::Green,
        NoticeType::Warning => Color::Yellow,
        NoticeType::Danger => Color::Red,
        NoticeType::Other(_) => Color::Magenta,
    }
}

/// Short marker standing in for the 32x32 icon a graphical presenter would draw
pub fn icon_label(icon: Option<&str>) -> &'static str {
    match icon.map(IconSource::classify) {
        None => "   ",
        Some(IconSource::Url(_)) => "[@]",
        Some(IconSource::Inline(_)) => "[#]",
        Some(IconSource::Unknown) => "[?]",
    }
}

/// Milliseconds until a notice expires, `None` if it never does
pub fn remaining_ms(created_at: DateTime<Utc>, duration_ms: u64, now: DateTime<Utc>) -> Option<u64> {
    if duration_ms == 0 {
        return None;
    }
    let elapsed = (now - created_at).num_milliseconds().max(0) as u64;
    Some(duration_ms.saturating_sub(elapsed))
}

fn countdown(created_at: DateTime<Utc>, duration_ms: u64, now: DateTime<Utc>) -> String {
    match remaining_ms(created_at, duration_ms, now) {
        Some(ms) => format!("{:>4.1}s", ms as f64 / 1000.0),
        None => String::from("  --"),
    }
}

/// Renders the toast stack
pub fn render_toasts<'a>(toasts: &'a [Toast], now: DateTime<Utc>) -> List<'a> {
    let items: Vec<ListItem> = toasts
        .iter()
        .map(|toast| {
            let color = type_color(&toast.notice_type);
            let mut spans = vec![
                Span::styled(format!("#{:<3}", toast.id), Style::default().fg(Color::DarkGray)),
                Span::raw(icon_label(toast.icon.as_deref())),
                Span::raw(" "),
                Span::styled(format!("{:<9}", toast.notice_type.as_str()), Style::default().fg(color).bold()),
            ];
            if let Some(title) = &toast.title {
                spans.push(Span::styled(format!("{}: ", title), Style::default().bold()));
            }
            spans.push(Span::raw(toast.message.as_str()));
            spans.push(Span::styled(
                format!("  {}", countdown(toast.created_at, toast.duration_ms, now)),
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Toasts ({}) ", toasts.len())),
    )
}

/// Renders the notification list
pub fn render_notifications<'a>(notifications: &'a [Notification], now: DateTime<Utc>) -> List<'a> {
    let items: Vec<ListItem> = notifications
        .iter()
        .map(|note| {
            let color = type_color(&note.notice_type);
            let header = Line::from(vec![
                Span::styled(format!("#{} ", note.id), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    note.title.clone().unwrap_or_else(|| note.notice_type.to_string()),
                    Style::default().fg(color).bold(),
                ),
                Span::styled(
                    format!("  {}", countdown(note.created_at, note.duration_ms, now)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(vec![header, Line::from(format!("  {}", note.message))])
        })
        .collect();

    List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Notifications ({}) ", notifications.len())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_remaining_ms() {
        let created = Utc::now();
        assert_eq!(remaining_ms(created, 0, created), None);
        assert_eq!(remaining_ms(created, 1000, created + Duration::milliseconds(400)), Some(600));
        assert_eq!(remaining_ms(created, 1000, created + Duration::seconds(5)), Some(0));
        // Clock skew never extends the countdown
        assert_eq!(remaining_ms(created, 1000, created - Duration::seconds(1)), Some(1000));
    }

    #[test]
    fn test_icon_label() {
        assert_eq!(icon_label(None), "   ");
        assert_eq!(icon_label(Some("https://example.com/x.png")), "[@]");
        assert_eq!(icon_label(Some("aGVsbG8=")), "[#]");
        assert_eq!(icon_label(Some("???")), "[?]");
    }
}
