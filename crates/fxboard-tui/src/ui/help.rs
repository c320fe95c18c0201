//! Help popup widget

use fxboard_core::ViewMode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const NAVIGATION: &str = r"
  Navigation
  ──────────
  j/↓       Move down
  k/↑       Move up
  g         Jump to first
  G         Jump to last
  Tab       Switch panel focus
  Enter     Show currency details
  Esc       Close popup/details
";

const LIST_KEYS: &str = r"
  List
  ────
  ↓ at end  Load more
  +/-       Page size (5, 10, 20)
  s         Next sort preset
";

const GRID_KEYS: &str = r"
  Grid
  ────
  n/→       Next page
  p/←       Previous page
  1-9       Go to page
  :N Enter  Go to page N
  +/-       Rows per page
  s         Next sort field
  d         Flip sort direction
";

const GENERAL: &str = r"
  General
  ───────
  r         Refresh from page 1
  R         Retry last request
  ?         Toggle help
  q         Quit
";

/// Render the help popup
pub fn render(frame: &mut Frame, mode: ViewMode) {
    let mode_keys = match mode {
        ViewMode::List => LIST_KEYS,
        ViewMode::Grid => GRID_KEYS,
    };
    let help_text = format!("{NAVIGATION}{mode_keys}{GENERAL}");

    // Calculate popup area (centered, 50x34)
    let area = frame.area();
    let popup_width = 50.min(area.width.saturating_sub(4));
    let popup_height = 34.min(area.height.saturating_sub(4));
    let x = (area.width.saturating_sub(popup_width)) / 2;
    let y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(format!(" Help ({mode} mode) "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}
