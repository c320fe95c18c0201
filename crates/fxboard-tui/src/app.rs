//! Application state and logic

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use fxboard_api::{Currency, PageMeta, PageRequest, SortDirection, SortField};
use fxboard_client::{HttpGateway, Result as ClientResult};
use fxboard_core::{
    Completion, CoreError, FetchDriver, FetchOutcome, FetchTicket, GridLayout, LIST_PAGE_SIZES,
    LIST_SORT_PRESETS, PageController, ViewMode, ViewStatus, cycle_size, page_size_for_width,
};
use tokio::sync::mpsc;

use crate::action::Action;

const EVENT_LOG_CAPACITY: usize = 100;

/// UI focus state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Focus {
    #[default]
    Currencies,
    Details,
    Events,
}

/// Event log entry
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub level: EventLevel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A finished single-currency lookup
#[derive(Debug)]
pub struct DetailsOutcome {
    pub code: String,
    pub result: ClientResult<Currency>,
}

/// Channels the main loop drains alongside terminal events
pub struct Inbox {
    pub outcomes: mpsc::UnboundedReceiver<FetchOutcome>,
    pub details: mpsc::UnboundedReceiver<DetailsOutcome>,
}

/// Application state
pub struct App {
    /// Paging state and the displayed list
    controller: PageController,
    /// Runs page fetches in the background
    driver: FetchDriver,
    /// Used directly for single-currency lookups
    gateway: Arc<HttpGateway>,
    /// Where spawned lookups report back
    details_sender: mpsc::UnboundedSender<DetailsOutcome>,
    /// Should quit
    should_quit: bool,
    /// Presentation mode
    pub mode: ViewMode,
    /// Grid columns for the current terminal width
    pub grid: GridLayout,
    /// Pixels one terminal cell counts as
    cells_px: u32,
    /// Current focus
    pub focus: Focus,
    /// Selected row or card
    pub selected: usize,
    /// Details of the last looked-up currency
    pub details: Option<Currency>,
    /// Code of the lookup in flight
    pub details_loading: Option<String>,
    /// Digits typed after `:`, while a page number is being entered
    pub page_input: Option<String>,
    /// Event log
    pub event_log: VecDeque<EventLogEntry>,
    /// Show help popup
    pub show_help: bool,
    /// Tick counter for animations
    pub tick: u64,
}

impl App {
    /// Create the application for a terminal `width` cells wide
    ///
    /// Grid mode derives the initial page size from the width; list mode
    /// starts with the default size. Page fetch results arrive on the
    /// returned inbox and must be passed to `apply_outcome` and
    /// `apply_details`.
    pub fn new(
        gateway: Arc<HttpGateway>,
        mode: ViewMode,
        cells_px: u32,
        width: u16,
    ) -> Result<(Self, Inbox), CoreError> {
        let width_px = u32::from(width).saturating_mul(cells_px);
        let request = match mode {
            ViewMode::Grid => PageRequest::first(page_size_for_width(width_px)),
            ViewMode::List => PageRequest::default(),
        };
        let controller = PageController::new(request)?;
        let (driver, outcomes) = FetchDriver::new(gateway.clone());
        let (details_sender, details) = mpsc::unbounded_channel();

        let app = Self {
            controller,
            driver,
            gateway,
            details_sender,
            should_quit: false,
            mode,
            grid: GridLayout::for_width(width_px),
            cells_px,
            focus: Focus::Currencies,
            selected: 0,
            details: None,
            details_loading: None,
            page_input: None,
            event_log: VecDeque::with_capacity(EVENT_LOG_CAPACITY),
            show_help: false,
            tick: 0,
        };
        Ok((app, Inbox { outcomes, details }))
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn controller(&self) -> &PageController {
        &self.controller
    }

    pub fn items(&self) -> &[Currency] {
        self.controller.items()
    }

    pub fn status(&self) -> &ViewStatus {
        self.controller.status()
    }

    pub fn page_meta(&self) -> Option<&PageMeta> {
        self.controller.last_page_meta()
    }

    /// Get the currently selected currency
    pub fn selected_currency(&self) -> Option<&Currency> {
        self.items().get(self.selected)
    }

    /// Issue the first page fetch
    pub fn start(&mut self) {
        self.log_event(
            &format!(
                "Loading {} mode, {} per page",
                self.mode,
                self.controller.size()
            ),
            EventLevel::Info,
        );
        let ticket = self.controller.load();
        self.dispatch(Some(ticket));
    }

    fn dispatch(&mut self, ticket: Option<FetchTicket>) {
        if let Some(ticket) = ticket {
            self.driver.spawn(ticket);
        }
    }

    /// Hand a finished fetch to the controller
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        let ticket = outcome.ticket;
        match self.controller.complete(ticket, outcome.result) {
            Completion::Applied => {
                if !ticket.kind().appends() {
                    self.selected = 0;
                    self.details = None;
                }
                if let Some(meta) = self.controller.last_page_meta() {
                    let message = format!(
                        "Page {} of {} loaded ({} currencies)",
                        meta.page + 1,
                        meta.total_pages.max(1),
                        meta.total_elements
                    );
                    self.log_event(&message, EventLevel::Success);
                }
            }
            Completion::Failed => {
                if let ViewStatus::Error(failure) = self.controller.status() {
                    let message = format!("{failure} (press R to retry)");
                    self.log_event(&message, EventLevel::Error);
                }
            }
            Completion::Stale => {}
        }
    }

    /// Log an event
    fn log_event(&mut self, message: &str, level: EventLevel) {
        let entry = EventLogEntry {
            timestamp: Utc::now(),
            message: message.to_string(),
            level,
        };
        self.event_log.push_front(entry);
        if self.event_log.len() > EVENT_LOG_CAPACITY {
            self.event_log.pop_back();
        }
    }

    /// Show a finished lookup if it is still for the selected currency
    pub fn apply_details(&mut self, outcome: DetailsOutcome) {
        if self.details_loading.as_deref() == Some(outcome.code.as_str()) {
            self.details_loading = None;
        }
        if self.selected_currency().map(|c| c.code.as_str()) != Some(outcome.code.as_str()) {
            tracing::debug!(code = %outcome.code, "dropping details for a deselected currency");
            return;
        }

        match outcome.result {
            Ok(currency) => {
                self.details = Some(currency);
            }
            Err(e) => {
                let message = format!("Failed to load {}: {e}", outcome.code);
                self.log_event(&message, EventLevel::Error);
            }
        }
    }

    /// Handle an action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
            Action::Resize(width, _) => self.resize(width),
            Action::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            Action::Down => self.move_down(),
            Action::First => {
                self.selected = 0;
            }
            Action::Last => {
                self.selected = self.items().len().saturating_sub(1);
            }
            Action::Select => self.load_selected_details(),
            Action::Back => {
                if self.page_input.is_some() {
                    self.page_input = None;
                } else if self.show_help {
                    self.show_help = false;
                } else {
                    self.details = None;
                }
            }
            Action::Help => {
                self.show_help = !self.show_help;
            }
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Currencies => Focus::Details,
                    Focus::Details => Focus::Events,
                    Focus::Events => Focus::Currencies,
                };
            }
            Action::NextPage => {
                let ticket = self.controller.next_page();
                self.dispatch(ticket);
            }
            Action::PreviousPage => {
                let ticket = self.controller.previous_page();
                self.dispatch(ticket);
            }
            Action::JumpToPage(page) => self.jump_to_page(page),
            Action::StartPageInput => {
                self.page_input = Some(String::new());
            }
            Action::PageInput(digit) => {
                if let Some(input) = &mut self.page_input {
                    input.push(digit);
                }
            }
            Action::PageInputBackspace => {
                if let Some(input) = &mut self.page_input {
                    input.pop();
                }
            }
            Action::ConfirmPageInput => self.confirm_page_input(),
            Action::SizeUp => self.cycle_page_size(true),
            Action::SizeDown => self.cycle_page_size(false),
            Action::CycleSort => self.cycle_sort(),
            Action::ToggleDirection => {
                let ticket = self
                    .controller
                    .set_sort(self.controller.sort_by(), self.controller.sort_dir().toggle());
                self.dispatch(Some(ticket));
            }
            Action::Refresh => {
                let ticket = self.controller.refresh();
                self.dispatch(Some(ticket));
            }
            Action::Retry => {
                let ticket = self.controller.retry();
                self.dispatch(ticket);
            }
            Action::None => {}
        }
    }

    /// Columns follow the terminal width; the page size does not
    fn resize(&mut self, width: u16) {
        let width_px = u32::from(width).saturating_mul(self.cells_px);
        if self.grid.resize(width_px) {
            let message = format!("Grid now {} columns", self.grid.columns());
            self.log_event(&message, EventLevel::Info);
        }
    }

    /// Move down, loading the next page when leaving the end of a list
    fn move_down(&mut self) {
        if self.selected + 1 < self.items().len() {
            self.selected += 1;
        } else if self.mode == ViewMode::List {
            let ticket = self.controller.load_more();
            self.dispatch(ticket);
        }
    }

    fn jump_to_page(&mut self, page: u32) {
        let Some(total_pages) = self.page_meta().map(|meta| meta.total_pages) else {
            return;
        };
        if page < total_pages {
            let ticket = self.controller.go_to_page(page);
            self.dispatch(Some(ticket));
        } else {
            let message = format!("There is no page {}", page + 1);
            self.log_event(&message, EventLevel::Warning);
        }
    }

    /// Jump to the one-based page number typed after `:`
    fn confirm_page_input(&mut self) {
        let Some(input) = self.page_input.take() else {
            return;
        };
        match input.parse::<u32>() {
            Ok(number) if number > 0 => self.jump_to_page(number - 1),
            _ if input.is_empty() => {}
            _ => {
                let message = format!("'{input}' is not a page number");
                self.log_event(&message, EventLevel::Warning);
            }
        }
    }

    /// Page sizes offered in the current mode
    pub fn page_size_choices(&self) -> Vec<u32> {
        match self.mode {
            ViewMode::List => LIST_PAGE_SIZES.to_vec(),
            ViewMode::Grid => self.grid.page_sizes(),
        }
    }

    fn cycle_page_size(&mut self, forward: bool) {
        let current = self.controller.size();
        let Some(size) = cycle_size(&self.page_size_choices(), current, forward) else {
            return;
        };
        if size == current {
            return;
        }
        match self.controller.set_size(size) {
            Ok(ticket) => self.dispatch(Some(ticket)),
            Err(e) => self.log_event(&e.to_string(), EventLevel::Error),
        }
    }

    /// Step through the presets in list mode, or through the fields in grid mode
    fn cycle_sort(&mut self) {
        let (field, dir) = match self.mode {
            ViewMode::List => next_preset(self.controller.sort_by(), self.controller.sort_dir()),
            ViewMode::Grid => (self.controller.sort_by().next(), self.controller.sort_dir()),
        };
        let ticket = self.controller.set_sort(field, dir);
        self.dispatch(Some(ticket));
    }

    /// Label of the current ordering
    pub fn sort_label(&self) -> String {
        let (field, dir) = (self.controller.sort_by(), self.controller.sort_dir());
        LIST_SORT_PRESETS
            .iter()
            .find(|preset| preset.field == field && preset.dir == dir)
            .map_or_else(
                || format!("{} ({dir})", field.label()),
                |preset| preset.label.to_string(),
            )
    }

    /// Look up the selected currency by code in a background task
    fn load_selected_details(&mut self) {
        let Some(code) = self.selected_currency().map(|c| c.code.clone()) else {
            return;
        };
        self.details_loading = Some(code.clone());

        let gateway = Arc::clone(&self.gateway);
        let sender = self.details_sender.clone();
        tokio::spawn(async move {
            let result = gateway.get_by_code(&code).await;
            if sender.send(DetailsOutcome { code, result }).is_err() {
                tracing::debug!("details lookup finished after shutdown");
            }
        });
    }
}

/// The preset after the one matching `field`/`dir`, or the first preset
fn next_preset(field: SortField, dir: SortDirection) -> (SortField, SortDirection) {
    let position = LIST_SORT_PRESETS
        .iter()
        .position(|preset| preset.field == field && preset.dir == dir);
    let next = match position {
        Some(index) => &LIST_SORT_PRESETS[(index + 1) % LIST_SORT_PRESETS.len()],
        None => &LIST_SORT_PRESETS[0],
    };
    (next.field, next.dir)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use fxboard_api::PageResponse;
    use fxboard_client::{ClientError, GatewayConfig};
    use rust_decimal::Decimal;

    use super::*;

    fn currency(index: u32) -> Currency {
        let stamp = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Currency {
            id: i64::from(index),
            code: format!("C{index:02}"),
            name: format!("Currency {index}"),
            symbol: "¤".to_string(),
            exchange_rate: Decimal::ONE,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    fn page_for(ticket: &FetchTicket, total: u32) -> PageResponse<Currency> {
        let request = ticket.request();
        let start = request.page * request.size;
        let end = (start + request.size).min(total);
        let content = (start..end).map(currency).collect();
        PageResponse::new(content, request.page, request.size, u64::from(total))
    }

    /// App whose gateway points at a closed port; outcomes are fed by hand
    fn app(mode: ViewMode, width: u16) -> App {
        let config = GatewayConfig::new("http://127.0.0.1:9").unwrap();
        let gateway = Arc::new(HttpGateway::new(config).unwrap());
        let (app, _inbox) = App::new(gateway, mode, 8, width).unwrap();
        app
    }

    fn pending(app: &App) -> FetchTicket {
        *app.controller().pending().expect("a fetch is pending")
    }

    fn succeed(app: &mut App, total: u32) {
        let ticket = pending(app);
        let result = Ok(page_for(&ticket, total));
        app.apply_outcome(FetchOutcome { ticket, result });
    }

    #[tokio::test]
    async fn test_grid_size_comes_from_width() {
        // 150 cells * 8px = 1200px -> 3 columns
        let app = app(ViewMode::Grid, 150);
        assert_eq!(app.grid.columns(), 3);
        assert_eq!(app.controller().size(), 9);

        let app_list = self::app(ViewMode::List, 150);
        assert_eq!(app_list.controller().size(), 10);
    }

    #[tokio::test]
    async fn test_resize_relabels_without_refetch() {
        let mut app = app(ViewMode::Grid, 150);
        app.start();
        succeed(&mut app, 30);

        app.handle_action(Action::Resize(60, 40));
        assert_eq!(app.grid.columns(), 1);
        assert_eq!(app.controller().size(), 9);
        assert!(!app.controller().is_pending());
        assert_eq!(app.page_size_choices(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn test_list_loads_more_past_the_end() {
        let mut app = app(ViewMode::List, 100);
        app.start();
        succeed(&mut app, 25);
        assert_eq!(app.items().len(), 10);

        app.handle_action(Action::Last);
        app.handle_action(Action::Down);
        let ticket = pending(&app);
        assert_eq!(ticket.request().page, 1);
        assert!(ticket.kind().appends());

        succeed(&mut app, 25);
        assert_eq!(app.items().len(), 20);
        assert_eq!(app.selected, 9);
    }

    #[tokio::test]
    async fn test_grid_does_not_load_more() {
        let mut app = app(ViewMode::Grid, 150);
        app.start();
        succeed(&mut app, 30);

        app.handle_action(Action::Last);
        app.handle_action(Action::Down);
        assert!(!app.controller().is_pending());
    }

    #[tokio::test]
    async fn test_page_jump_resets_selection() {
        let mut app = app(ViewMode::Grid, 150);
        app.start();
        succeed(&mut app, 30);
        app.handle_action(Action::Down);
        assert_eq!(app.selected, 1);

        app.handle_action(Action::JumpToPage(2));
        assert_eq!(pending(&app).request().page, 2);
        succeed(&mut app, 30);
        assert_eq!(app.selected, 0);
        assert_eq!(app.items()[0].code, "C18");
    }

    #[tokio::test]
    async fn test_jump_past_last_page_is_refused() {
        let mut app = app(ViewMode::Grid, 150);
        app.start();
        succeed(&mut app, 30);

        app.handle_action(Action::JumpToPage(7));
        assert!(!app.controller().is_pending());
        assert_eq!(app.event_log[0].level, EventLevel::Warning);
    }

    #[tokio::test]
    async fn test_failure_keeps_items_and_logs_retry_hint() {
        let mut app = app(ViewMode::List, 100);
        app.start();
        succeed(&mut app, 25);

        app.handle_action(Action::Refresh);
        let ticket = pending(&app);
        let result = Err(ClientError::Timeout);
        app.apply_outcome(FetchOutcome { ticket, result });

        assert!(app.status().is_error());
        assert_eq!(app.items().len(), 10);
        assert!(app.event_log[0].message.contains("press R to retry"));

        app.handle_action(Action::Retry);
        assert_eq!(pending(&app).kind(), ticket.kind());
    }

    #[tokio::test]
    async fn test_sort_cycling_by_mode() {
        let mut app = app(ViewMode::List, 100);
        app.handle_action(Action::CycleSort);
        assert_eq!(app.controller().sort_by(), SortField::Code);
        assert_eq!(app.controller().sort_dir(), SortDirection::Desc);
        assert_eq!(app.sort_label(), "Code (Z-A)");

        let mut grid = self::app(ViewMode::Grid, 150);
        grid.handle_action(Action::CycleSort);
        assert_eq!(grid.controller().sort_by(), SortField::Code.next());
        assert_eq!(grid.controller().sort_dir(), SortDirection::Asc);
        grid.handle_action(Action::ToggleDirection);
        assert_eq!(grid.controller().sort_dir(), SortDirection::Desc);
        assert_eq!(grid.controller().page(), 0);
    }

    #[tokio::test]
    async fn test_size_cycling_uses_mode_options() {
        let mut app = app(ViewMode::List, 100);
        app.handle_action(Action::SizeUp);
        assert_eq!(app.controller().size(), 20);
        app.handle_action(Action::SizeUp);
        assert_eq!(app.controller().size(), 5);

        let mut grid = self::app(ViewMode::Grid, 150);
        grid.handle_action(Action::SizeUp);
        assert_eq!(grid.controller().size(), 12);
        grid.handle_action(Action::SizeDown);
        assert_eq!(grid.controller().size(), 9);
    }

    #[tokio::test]
    async fn test_retry_is_ignored_once_loaded() {
        let mut app = app(ViewMode::List, 100);
        app.start();
        succeed(&mut app, 25);
        app.handle_action(Action::Last);
        app.handle_action(Action::Down);
        succeed(&mut app, 25);

        app.handle_action(Action::Retry);
        assert!(!app.controller().is_pending());
        assert_eq!(app.items().len(), 20);
    }

    #[tokio::test]
    async fn test_details_lookup_does_not_block() {
        let mut app = app(ViewMode::List, 100);
        app.start();
        succeed(&mut app, 25);

        // Returns immediately; the lookup runs in the background
        app.handle_action(Action::Select);
        assert_eq!(app.details_loading.as_deref(), Some("C00"));
        app.handle_action(Action::Down);
        assert_eq!(app.selected, 1);
    }

    #[tokio::test]
    async fn test_details_for_deselected_currency_are_dropped() {
        let mut app = app(ViewMode::List, 100);
        app.start();
        succeed(&mut app, 25);
        app.handle_action(Action::Down);

        app.apply_details(DetailsOutcome {
            code: "C00".to_string(),
            result: Ok(currency(0)),
        });
        assert!(app.details.is_none());

        app.apply_details(DetailsOutcome {
            code: "C01".to_string(),
            result: Ok(currency(1)),
        });
        assert_eq!(app.details.as_ref().map(|c| c.code.as_str()), Some("C01"));
    }

    #[tokio::test]
    async fn test_typed_page_number_jumps_past_nine() {
        let mut app = app(ViewMode::Grid, 150);
        app.start();
        // 9 per page, 120 items -> 14 pages
        succeed(&mut app, 120);

        app.handle_action(Action::StartPageInput);
        app.handle_action(Action::PageInput('1'));
        app.handle_action(Action::PageInput('3'));
        app.handle_action(Action::PageInput('7'));
        app.handle_action(Action::PageInputBackspace);
        app.handle_action(Action::ConfirmPageInput);

        assert!(app.page_input.is_none());
        assert_eq!(pending(&app).request().page, 12);
        succeed(&mut app, 120);
        assert_eq!(app.items()[0].code, format!("C{}", 12 * 9));
    }

    #[tokio::test]
    async fn test_typed_page_out_of_range_is_refused() {
        let mut app = app(ViewMode::Grid, 150);
        app.start();
        succeed(&mut app, 30);

        app.handle_action(Action::StartPageInput);
        app.handle_action(Action::PageInput('0'));
        app.handle_action(Action::ConfirmPageInput);
        assert!(!app.controller().is_pending());

        app.handle_action(Action::StartPageInput);
        app.handle_action(Action::PageInput('9'));
        app.handle_action(Action::Back);
        assert!(app.page_input.is_none());
        assert!(!app.controller().is_pending());
    }
}
