//! Event log panel widget
//!
//! Newest entries first. Failures stay visible in the panel title until
//! a page loads again.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::app::{App, EventLevel, EventLogEntry, Focus};
use crate::config;

/// Render the event log panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.focus == Focus::Events {
        config::focused_border_style()
    } else {
        config::unfocused_border_style()
    };

    let items: Vec<ListItem> = app
        .event_log
        .iter()
        .take(area.height.saturating_sub(2) as usize)
        .map(|entry| ListItem::new(entry_line(entry)).style(config::event_style(entry.level)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(title(app))
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(list, area);
}

/// Marker shown before each message
fn level_prefix(level: EventLevel) -> &'static str {
    match level {
        EventLevel::Info => "·",
        EventLevel::Success => "✓",
        EventLevel::Warning => "!",
        EventLevel::Error => "✗",
    }
}

fn entry_line(entry: &EventLogEntry) -> String {
    format!(
        "{} {} {}",
        entry.timestamp.format("%H:%M:%S"),
        level_prefix(entry.level),
        entry.message
    )
}

/// Counts errors logged since the last successful page load
fn title(app: &App) -> String {
    let failures = app
        .event_log
        .iter()
        .take_while(|entry| entry.level != EventLevel::Success)
        .filter(|entry| entry.level == EventLevel::Error)
        .count();
    match failures {
        0 => " Events ".to_string(),
        1 => " Events (1 failure) ".to_string(),
        n => format!(" Events ({n} failures) "),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_entry_line_marks_level() {
        let entry = EventLogEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 14, 3, 9).unwrap(),
            message: "Page 2 of 5 loaded (47 currencies)".to_string(),
            level: EventLevel::Success,
        };
        assert_eq!(entry_line(&entry), "14:03:09 ✓ Page 2 of 5 loaded (47 currencies)");
    }

    #[test]
    fn test_prefixes_are_distinct() {
        let prefixes = [
            EventLevel::Info,
            EventLevel::Success,
            EventLevel::Warning,
            EventLevel::Error,
        ]
        .map(level_prefix);
        for (i, a) in prefixes.iter().enumerate() {
            assert!(prefixes[i + 1..].iter().all(|b| a != b));
        }
    }
}
