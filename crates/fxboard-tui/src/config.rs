//! TUI styles

use fxboard_core::ViewStatus;
use ratatui::style::{Color, Modifier, Style};

use crate::app::EventLevel;

/// Status colors
pub fn status_color(status: &ViewStatus) -> Color {
    match status {
        ViewStatus::Idle => Color::Green,
        ViewStatus::LoadingInitial => Color::Yellow,
        ViewStatus::LoadingMore => Color::Blue,
        ViewStatus::Refreshing => Color::Cyan,
        ViewStatus::Error(_) => Color::Red,
    }
}

/// Status symbol, animated while a fetch is pending
pub fn status_symbol(status: &ViewStatus, tick: u64) -> &'static str {
    match status {
        ViewStatus::Idle => "●",
        ViewStatus::Error(_) => "✗",
        _ => match tick % 4 {
            0 => "◐",
            1 => "◓",
            2 => "◑",
            _ => "◒",
        },
    }
}

/// Event log line style
pub fn event_style(level: EventLevel) -> Style {
    match level {
        EventLevel::Info => Style::default().fg(Color::White),
        EventLevel::Success => Style::default().fg(Color::Green),
        EventLevel::Warning => Style::default().fg(Color::Yellow),
        EventLevel::Error => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    }
}

/// Header style
pub fn header_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Selected row style
pub fn selected_style() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

/// Normal row style
pub fn normal_style() -> Style {
    Style::default()
}

/// Border style for focused panel
pub fn focused_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Border style for unfocused panel
pub fn unfocused_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
