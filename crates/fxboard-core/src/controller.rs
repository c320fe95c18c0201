//! Pagination and sort controller
//!
//! The controller never performs I/O itself. Each operation that needs data
//! updates the paging state and returns a `FetchTicket`; the caller runs the
//! fetch (see `FetchDriver`) and passes the ticket and its result to
//! `complete`. Only the most recently issued ticket is accepted, so a slow
//! response for an abandoned state can never overwrite newer data.

use std::fmt;

use fxboard_api::{Currency, PageMeta, PageRequest, PageResponse, SortDirection, SortField};
use fxboard_client::CurrencySource;

use crate::error::CoreError;
use crate::status::{FetchFailure, ViewStatus};

/// Why a fetch was issued, which decides how its content is merged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Replace the list (initial load, size/sort change, page jump)
    Initial,
    /// Append the next page to the list
    More,
    /// Replace the list with a fresh page 0
    Refresh,
}

impl FetchKind {
    fn status(self) -> ViewStatus {
        match self {
            FetchKind::Initial => ViewStatus::LoadingInitial,
            FetchKind::More => ViewStatus::LoadingMore,
            FetchKind::Refresh => ViewStatus::Refreshing,
        }
    }

    pub fn appends(self) -> bool {
        self == FetchKind::More
    }
}

/// A fetch the controller wants performed, tagged with the state it was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    request: PageRequest,
    kind: FetchKind,
}

impl FetchTicket {
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    pub fn kind(&self) -> FetchKind {
        self.kind
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What `complete` did with a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Page merged into the list
    Applied,
    /// Fetch failed; list left untouched
    Failed,
    /// Ticket was superseded; result ignored
    Stale,
}

/// Owns page, size and sort state plus the list they produced
#[derive(Debug, Clone)]
pub struct PageController {
    request: PageRequest,
    items: Vec<Currency>,
    last_page_meta: Option<PageMeta>,
    status: ViewStatus,
    generation: u64,
    pending: Option<FetchTicket>,
    last_issued: Option<FetchTicket>,
    /// Request behind the currently displayed list
    applied: Option<PageRequest>,
}

impl PageController {
    /// Create a controller that will start from `request`
    ///
    /// # Errors
    /// Returns `CoreError::InvalidPageSize` if `request.size` is zero.
    pub fn new(request: PageRequest) -> Result<Self, CoreError> {
        if request.size == 0 {
            return Err(CoreError::InvalidPageSize(0));
        }
        Ok(Self {
            request,
            items: Vec::new(),
            last_page_meta: None,
            status: ViewStatus::Idle,
            generation: 0,
            pending: None,
            last_issued: None,
            applied: None,
        })
    }

    pub fn page(&self) -> u32 {
        self.request.page
    }

    pub fn size(&self) -> u32 {
        self.request.size
    }

    pub fn sort_by(&self) -> SortField {
        self.request.sort_by
    }

    pub fn sort_dir(&self) -> SortDirection {
        self.request.sort_dir
    }

    /// Paging state the next fetch will be composed from
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    pub fn items(&self) -> &[Currency] {
        &self.items
    }

    pub fn last_page_meta(&self) -> Option<&PageMeta> {
        self.last_page_meta.as_ref()
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    /// The fetch currently awaited, if any
    pub fn pending(&self) -> Option<&FetchTicket> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Fetch the current page, replacing the list
    pub fn load(&mut self) -> FetchTicket {
        self.issue(FetchKind::Initial)
    }

    /// Change the page size and reload from page 0
    ///
    /// # Errors
    /// Returns `CoreError::InvalidPageSize` for a zero size; state is unchanged.
    pub fn set_size(&mut self, size: u32) -> Result<FetchTicket, CoreError> {
        if size == 0 {
            return Err(CoreError::InvalidPageSize(size));
        }
        self.request.size = size;
        self.request.page = 0;
        Ok(self.issue(FetchKind::Initial))
    }

    /// Change the ordering and reload from page 0
    pub fn set_sort(&mut self, field: SortField, dir: SortDirection) -> FetchTicket {
        self.request.sort_by = field;
        self.request.sort_dir = dir;
        self.request.page = 0;
        self.issue(FetchKind::Initial)
    }

    /// Jump to page `page`, replacing the list
    ///
    /// Callers must keep `page` below the last reported `total_pages`; the
    /// value is sent as-is.
    pub fn go_to_page(&mut self, page: u32) -> FetchTicket {
        self.request.page = page;
        self.issue(FetchKind::Initial)
    }

    /// Jump to the page after the displayed one, unless it is the last
    pub fn next_page(&mut self) -> Option<FetchTicket> {
        let meta = self.last_page_meta?;
        meta.has_next().then(|| self.go_to_page(meta.page + 1))
    }

    /// Jump to the page before the displayed one, unless it is the first
    pub fn previous_page(&mut self) -> Option<FetchTicket> {
        let meta = self.last_page_meta?;
        meta.has_previous().then(|| self.go_to_page(meta.page - 1))
    }

    /// Append the page after the last one loaded
    ///
    /// Does nothing while any fetch is pending, when no page has been loaded
    /// yet, when the last loaded page was the final one, or when the displayed
    /// list belongs to a different size or ordering than the current state
    /// (a replacing fetch failed and has not been retried).
    pub fn load_more(&mut self) -> Option<FetchTicket> {
        if self.pending.is_some() {
            return None;
        }
        let meta = self.last_page_meta?;
        let applied = self.applied?;
        if applied.size != self.request.size
            || applied.sort_by != self.request.sort_by
            || applied.sort_dir != self.request.sort_dir
        {
            return None;
        }
        if !meta.has_next() {
            return None;
        }
        self.request.page = meta.page + 1;
        Some(self.issue(FetchKind::More))
    }

    /// Reload page 0 with the current size and ordering
    pub fn refresh(&mut self) -> FetchTicket {
        self.request.page = 0;
        self.issue(FetchKind::Refresh)
    }

    /// Re-issue the most recent fetch after it failed
    ///
    /// Behaves like `load` when nothing has been fetched yet. Does nothing
    /// unless the last fetch ended in an error, so a page that was already
    /// appended is never appended twice.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        let Some(previous) = self.last_issued else {
            return Some(self.load());
        };
        if !self.status.is_error() {
            return None;
        }
        self.request = previous.request;
        Some(self.issue(previous.kind))
    }

    fn issue(&mut self, kind: FetchKind) -> FetchTicket {
        self.generation += 1;
        let ticket = FetchTicket {
            generation: self.generation,
            request: self.request,
            kind,
        };
        if let Some(superseded) = self.pending.replace(ticket) {
            tracing::debug!(
                superseded = superseded.generation,
                by = ticket.generation,
                "pending fetch superseded"
            );
        }
        self.last_issued = Some(ticket);
        self.status = kind.status();
        tracing::debug!(
            generation = ticket.generation,
            page = ticket.request.page,
            size = ticket.request.size,
            sort_by = %ticket.request.sort_by,
            sort_dir = %ticket.request.sort_dir,
            ?kind,
            "fetch issued"
        );
        ticket
    }

    /// Merge the result of `ticket` into the list
    ///
    /// Results for any ticket other than the pending one are dropped. A
    /// failure leaves the list and page metadata exactly as they were.
    pub fn complete<E: fmt::Display>(
        &mut self,
        ticket: FetchTicket,
        result: Result<PageResponse<Currency>, E>,
    ) -> Completion {
        if self.pending.map(|p| p.generation) != Some(ticket.generation) {
            tracing::debug!(generation = ticket.generation, "discarding stale response");
            return Completion::Stale;
        }
        self.pending = None;

        match result {
            Ok(page) => {
                let (content, meta) = page.into_parts();
                if !meta.is_consistent_with(content.len()) {
                    tracing::warn!(
                        page = meta.page,
                        received = content.len(),
                        reported = meta.number_of_elements,
                        total_pages = meta.total_pages,
                        "page metadata disagrees with its content"
                    );
                }
                for currency in content.iter().filter(|c| !c.has_valid_rate()) {
                    tracing::warn!(
                        code = %currency.code,
                        rate = %currency.exchange_rate,
                        "negative exchange rate received"
                    );
                }
                if ticket.kind.appends() {
                    self.items.extend(content);
                } else {
                    self.items = content;
                }
                self.last_page_meta = Some(meta);
                self.applied = Some(ticket.request);
                self.status = ViewStatus::Idle;
                Completion::Applied
            }
            Err(err) => {
                tracing::warn!(generation = ticket.generation, error = %err, "fetch failed");
                self.status = ViewStatus::Error(FetchFailure::new(err.to_string()));
                Completion::Failed
            }
        }
    }

    /// Perform `ticket` against `source` and merge the result
    pub async fn resolve<S: CurrencySource + ?Sized>(
        &mut self,
        source: &S,
        ticket: FetchTicket,
    ) -> Completion {
        let result = source.fetch_page(ticket.request()).await;
        self.complete(ticket, result)
    }
}
