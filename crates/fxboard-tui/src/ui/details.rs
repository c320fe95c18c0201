//! Currency details panel widget

use fxboard_api::Currency;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{App, Focus};
use crate::config;

/// Render the currency details panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.focus == Focus::Details {
        config::focused_border_style()
    } else {
        config::unfocused_border_style()
    };

    let title = match app.selected_currency() {
        Some(currency) => format!(" {} ", currency.code),
        None => " Details ".to_string(),
    };

    let content = if let Some(code) = &app.details_loading {
        format!("Loading {code}...")
    } else if let Some(details) = &app.details {
        format_details(details)
    } else if let Some(currency) = app.selected_currency() {
        format!(
            "{}\nRate: {}\n\nPress Enter to load details",
            currency.name, currency.exchange_rate
        )
    } else {
        "No currency selected".to_string()
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn format_details(currency: &Currency) -> String {
    [
        format!("Code: {}", currency.code),
        format!("Name: {}", currency.name),
        format!("Symbol: {}", currency.symbol),
        format!("Rate: {}", currency.exchange_rate),
        String::new(),
        format!("Id: {}", currency.id),
        format!("Created: {}", currency.created_at.format("%Y-%m-%d %H:%M")),
        format!("Updated: {}", currency.updated_at.format("%Y-%m-%d %H:%M")),
    ]
    .join("\n")
}
