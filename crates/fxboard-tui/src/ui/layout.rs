//! Layout calculations for the TUI

use ratatui::prelude::*;

/// Layout areas for the UI
pub struct LayoutAreas {
    pub currencies: Rect,
    pub details: Rect,
    pub events: Rect,
    pub statusbar: Rect,
}

/// Calculate layout areas based on terminal size
pub fn calculate_layout(area: Rect) -> LayoutAreas {
    // Main vertical split: content + status bar
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content_area = vertical[0];
    let statusbar = vertical[1];

    // Currencies take most of the width; details and events share the rest
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(content_area);

    let currencies = horizontal[0];

    let right_panel = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55), // Details
            Constraint::Percentage(45), // Events
        ])
        .split(horizontal[1]);

    LayoutAreas {
        currencies,
        details: right_panel[0],
        events: right_panel[1],
        statusbar,
    }
}

/// Split `area` into a grid of `rows` x `columns` equally sized cells
pub fn grid_cells(area: Rect, rows: u16, columns: u16, row_height: u16) -> Vec<Rect> {
    let row_areas = Layout::vertical((0..rows).map(|_| Constraint::Length(row_height))).split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            Layout::horizontal((0..columns).map(|_| Constraint::Ratio(1, u32::from(columns))))
                .split(*row)
                .to_vec()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_terminal() {
        let areas = calculate_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(areas.statusbar.height, 1);
        assert_eq!(areas.statusbar.y, 39);
        assert_eq!(areas.currencies.height, 39);
        assert!(areas.currencies.width > areas.details.width);
        assert_eq!(areas.details.x, areas.events.x);
    }

    #[test]
    fn test_grid_cells_are_row_major() {
        let cells = grid_cells(Rect::new(0, 0, 90, 20), 2, 3, 5);
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0].width, 30);
        assert_eq!(cells[1].x, 30);
        assert_eq!(cells[3].y, 5);
        assert_eq!(cells[3].x, 0);
    }
}
