//! Currency list and grid widgets

use fxboard_api::Currency;
use fxboard_core::{ViewMode, ViewStatus};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};

use crate::app::{App, Focus};
use crate::config;
use crate::ui::layout;

const CARD_HEIGHT: u16 = 5;

/// Render the currency panel in the current mode
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.focus == Focus::Currencies {
        config::focused_border_style()
    } else {
        config::unfocused_border_style()
    };

    let block = Block::default()
        .title(title(app))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // An error banner sits above whatever list is still displayed
    let inner = if let ViewStatus::Error(failure) = app.status() {
        let [banner, rest] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);
        let text = format!("{failure}\nPress R to retry.");
        frame.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true }),
            banner,
        );
        rest
    } else {
        inner
    };

    if app.items().is_empty() {
        let message = if app.status().is_loading() {
            "Loading currencies..."
        } else {
            "No currencies"
        };
        frame.render_widget(
            Paragraph::new(message).style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    }

    match app.mode {
        ViewMode::List => render_list(frame, app, inner),
        ViewMode::Grid => render_grid(frame, app, inner),
    }
}

fn title(app: &App) -> String {
    let count = app.items().len();
    match app.page_meta() {
        Some(meta) if app.mode == ViewMode::List => {
            format!(" Currencies ({count} of {}) ", meta.total_elements)
        }
        Some(meta) => format!(
            " Currencies - page {} / {} ",
            meta.page + 1,
            meta.total_pages.max(1)
        ),
        None => " Currencies ".to_string(),
    }
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Code"),
        Cell::from("Name"),
        Cell::from("Symbol"),
        Cell::from("Rate"),
    ])
    .style(config::header_style())
    .height(1);

    let mut rows: Vec<Row> = app
        .items()
        .iter()
        .map(|currency| {
            Row::new(vec![
                Cell::from(currency.code.clone()),
                Cell::from(currency.name.clone()),
                Cell::from(currency.symbol.clone()),
                Cell::from(currency.exchange_rate.to_string()),
            ])
            .style(config::normal_style())
        })
        .collect();

    if app.status() == &ViewStatus::LoadingMore {
        rows.push(Row::new(vec![Cell::from("loading more...")]).style(Style::default().fg(Color::Blue)));
    } else if app.page_meta().is_some_and(|meta| !meta.has_next()) {
        rows.push(Row::new(vec![Cell::from("end of list")]).style(Style::default().fg(Color::DarkGray)));
    }

    let widths = [
        Constraint::Length(6),
        Constraint::Min(16),
        Constraint::Length(8),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(config::selected_style())
        .highlight_symbol("▸ ");

    let mut state = TableState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_grid(frame: &mut Frame, app: &App, area: Rect) {
    let columns = u16::try_from(app.grid.columns()).unwrap_or(1).max(1);
    let count = u16::try_from(app.items().len()).unwrap_or(u16::MAX);
    let rows = count.div_ceil(columns);

    let cells = layout::grid_cells(area, rows, columns, CARD_HEIGHT);
    for (i, (currency, cell)) in app.items().iter().zip(cells).enumerate() {
        render_card(frame, currency, cell, i == app.selected);
    }
}

fn render_card(frame: &mut Frame, currency: &Currency, area: Rect, selected: bool) {
    let border_style = if selected {
        config::focused_border_style().add_modifier(Modifier::BOLD)
    } else {
        config::unfocused_border_style()
    };

    let text = vec![
        Line::from(currency.name.clone()),
        Line::from(format!("{} {}", currency.symbol, currency.exchange_rate)),
        Line::from(Span::styled(
            format!("updated {}", currency.updated_at.format("%Y-%m-%d")),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(text).block(
        Block::default()
            .title(format!(" {} ", currency.code))
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(card, area);
}
