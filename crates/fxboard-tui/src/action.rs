//! User actions for the TUI application

/// Actions that can be performed in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Tick event for animations/timers
    Tick,
    /// Terminal resized to the given width and height in cells
    Resize(u16, u16),
    /// Navigate selection up
    Up,
    /// Navigate selection down (loads more at the end of a list)
    Down,
    /// Jump to first item
    First,
    /// Jump to last item
    Last,
    /// Load details for the selected currency
    Select,
    /// Go back / close popup
    Back,
    /// Show help popup
    Help,
    /// Toggle focus between panels
    ToggleFocus,
    /// Show the next page (grid)
    NextPage,
    /// Show the previous page (grid)
    PreviousPage,
    /// Show a page by zero-based index (grid)
    JumpToPage(u32),
    /// Begin typing a page number (grid)
    StartPageInput,
    /// A digit of the page number being typed
    PageInput(char),
    /// Remove the last typed digit
    PageInputBackspace,
    /// Jump to the typed page number
    ConfirmPageInput,
    /// Switch to the next larger page size
    SizeUp,
    /// Switch to the next smaller page size
    SizeDown,
    /// Cycle sort field (grid) or sort preset (list)
    CycleSort,
    /// Flip the sort direction
    ToggleDirection,
    /// Reload page 0
    Refresh,
    /// Re-issue the last fetch
    Retry,
    /// No operation
    None,
}
