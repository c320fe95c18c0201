//! UI rendering modules

mod currencies;
mod details;
mod events;
mod help;
mod layout;
mod statusbar;

use ratatui::prelude::*;

use crate::app::App;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let areas = layout::calculate_layout(frame.area());

    currencies::render(frame, app, areas.currencies);
    details::render(frame, app, areas.details);
    events::render(frame, app, areas.events);
    statusbar::render(frame, app, areas.statusbar);

    if app.show_help {
        help::render(frame, app.mode);
    }
}
