//! fxboard-core: Paging state, fetch coordination and grid sizing
//!
//! `PageController` owns the page/size/sort state and the displayed list.
//! Every state change yields a `FetchTicket`; whoever performs the fetch
//! hands the ticket back with its result, and results for superseded
//! tickets are discarded. `FetchDriver` runs tickets on the tokio runtime,
//! `viewport` derives grid page sizes from the available width, and
//! `settings` loads `fxboard.toml`.

pub mod controller;
pub mod driver;
pub mod error;
pub mod options;
pub mod settings;
pub mod status;
pub mod viewport;

pub use controller::{Completion, FetchKind, FetchTicket, PageController};
pub use driver::{FetchDriver, FetchOutcome};
pub use error::CoreError;
pub use options::{LIST_PAGE_SIZES, LIST_SORT_PRESETS, SortPreset, cycle_size};
pub use settings::{GatewaySettings, Settings, UiSettings, ViewMode};
pub use status::{FetchFailure, ViewStatus};
pub use viewport::{GRID_ROWS, GridLayout, PageSizeOption, columns_for_width, page_size_for_width};
