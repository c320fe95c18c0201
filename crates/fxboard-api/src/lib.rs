//! fxboard-api: Shared API types for the currency service
//!
//! Contains the currency record, the paging request/response shapes and the
//! create/update payload used by the gateway, the controller, the CLI and the TUI.

pub mod error;
pub mod requests;
pub mod responses;
pub mod symbols;

pub use error::ApiError;
pub use requests::{CurrencyPayload, DEFAULT_PAGE_SIZE, PageRequest, SortDirection, SortField};
pub use responses::{Currency, PageMeta, PageResponse};
