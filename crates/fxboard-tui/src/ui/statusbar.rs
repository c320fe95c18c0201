//! Status bar widget

use fxboard_core::ViewMode;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::config;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let status = app.status();
    let symbol = config::status_symbol(status, app.tick);
    let color = config::status_color(status);

    let paging = match app.page_meta() {
        Some(meta) => format!(
            "Page {} / {} ({} total)",
            meta.page + 1,
            meta.total_pages.max(1),
            meta.total_elements
        ),
        None => "Page - / -".to_string(),
    };

    let keybindings = match app.mode {
        ViewMode::List => "[j/k] Move  [+/-] Size  [s] Sort  [r] Refresh  [?] Help  [q] Quit",
        ViewMode::Grid => "[n/p] Page  [:] Go to  [+/-] Rows  [s/d] Sort  [r] Refresh  [?] Help  [q] Quit",
    };

    if let Some(input) = &app.page_input {
        let prompt = Line::from(vec![
            Span::styled(format!("Go to page: {input}"), config::header_style()),
            Span::styled("  [Enter] Jump  [Esc] Cancel", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(prompt), area);
        return;
    }

    let status_line = Line::from(vec![
        Span::styled(format!("{symbol} {}", status.label()), Style::default().fg(color)),
        Span::raw("  │  "),
        Span::raw(paging),
        Span::raw("  │  "),
        Span::raw(format!(
            "{} per page, {}",
            app.controller().size(),
            app.sort_label()
        )),
        Span::raw("  │  "),
        Span::styled(keybindings, Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(status_line), area);
}
