//! View status for the currency list

use std::fmt;

/// A fetch that did not produce a page
///
/// Network failures, timeouts and non-success statuses all collapse into
/// this one kind; `detail` is kept for logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    detail: String,
}

impl FetchFailure {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fetch failed: {}", self.detail)
    }
}

/// What the list is doing right now
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewStatus {
    #[default]
    Idle,
    /// First page for a new size/sort/page is on its way
    LoadingInitial,
    /// Next page is being appended
    LoadingMore,
    /// Pull-to-refresh reload of page 0
    Refreshing,
    /// Last fetch failed; previous data is still shown
    Error(FetchFailure),
}

impl ViewStatus {
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            ViewStatus::LoadingInitial | ViewStatus::LoadingMore | ViewStatus::Refreshing
        )
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewStatus::Error(_))
    }

    /// Short lowercase name
    pub fn label(&self) -> &'static str {
        match self {
            ViewStatus::Idle => "idle",
            ViewStatus::LoadingInitial => "loading",
            ViewStatus::LoadingMore => "loading-more",
            ViewStatus::Refreshing => "refreshing",
            ViewStatus::Error(_) => "error",
        }
    }
}
