//! Grid sizing from the available width
//!
//! The column count is a step function of width. The derived page size is
//! only used to seed the controller; later resizes change the display-only
//! column count and never trigger a fetch.

/// Rows shown per grid page
pub const GRID_ROWS: u32 = 3;

/// Row counts offered in the grid page-size selector
const OPTION_ROWS: std::ops::RangeInclusive<u32> = 1..=6;

/// Number of grid columns that fit `width`
pub fn columns_for_width(width: u32) -> u32 {
    match width {
        0..=768 => 1,
        769..=1024 => 2,
        1025..=1399 => 3,
        _ => 4,
    }
}

/// Page size that fills `GRID_ROWS` whole rows at `width`
pub fn page_size_for_width(width: u32) -> u32 {
    columns_for_width(width) * GRID_ROWS
}

/// One entry of the grid page-size selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizeOption {
    pub rows: u32,
    pub size: u32,
    pub label: String,
}

/// Display-only grid geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    columns: u32,
}

impl GridLayout {
    pub fn for_width(width: u32) -> Self {
        Self {
            columns: columns_for_width(width),
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Recompute columns for a new width; returns whether they changed
    pub fn resize(&mut self, width: u32) -> bool {
        let columns = columns_for_width(width);
        let changed = columns != self.columns;
        self.columns = columns;
        changed
    }

    /// Page sizes that fill whole rows at the current column count
    pub fn page_size_options(&self) -> Vec<PageSizeOption> {
        OPTION_ROWS
            .map(|rows| {
                let size = rows * self.columns;
                let noun = if rows == 1 { "row" } else { "rows" };
                PageSizeOption {
                    rows,
                    size,
                    label: format!("{rows} {noun} ({size} items)"),
                }
            })
            .collect()
    }

    /// Just the sizes of `page_size_options`
    pub fn page_sizes(&self) -> Vec<u32> {
        OPTION_ROWS.map(|rows| rows * self.columns).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_page_sizes() {
        assert_eq!((columns_for_width(500), page_size_for_width(500)), (1, 3));
        assert_eq!((columns_for_width(900), page_size_for_width(900)), (2, 6));
        assert_eq!((columns_for_width(1200), page_size_for_width(1200)), (3, 9));
        assert_eq!((columns_for_width(1600), page_size_for_width(1600)), (4, 12));
    }

    #[test]
    fn test_breakpoints() {
        assert_eq!(columns_for_width(0), 1);
        assert_eq!(columns_for_width(768), 1);
        assert_eq!(columns_for_width(769), 2);
        assert_eq!(columns_for_width(1024), 2);
        assert_eq!(columns_for_width(1025), 3);
        assert_eq!(columns_for_width(1399), 3);
        assert_eq!(columns_for_width(1400), 4);
        assert_eq!(columns_for_width(u32::MAX), 4);
    }

    #[test]
    fn test_resize_reports_changes() {
        let mut grid = GridLayout::for_width(1200);
        assert!(!grid.resize(1100));
        assert!(grid.resize(800));
        assert_eq!(grid.columns(), 2);
    }

    #[test]
    fn test_page_size_options_follow_columns() {
        let mut grid = GridLayout::for_width(1200);
        let options = grid.page_size_options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0].label, "1 row (3 items)");
        assert_eq!(options[2].size, 9);
        assert_eq!(options[5].label, "6 rows (18 items)");

        grid.resize(1600);
        assert_eq!(grid.page_sizes(), vec![4, 8, 12, 16, 20, 24]);
    }
}
