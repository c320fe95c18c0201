//! Runs controller fetches on the tokio runtime
//!
//! Fetches execute as background tasks so the event loop keeps handling
//! input; results come back through a channel and are fed to
//! `PageController::complete` on the loop's own task.

use std::sync::Arc;

use fxboard_api::{Currency, PageResponse};
use fxboard_client::{CurrencySource, Result as ClientResult};
use tokio::sync::mpsc;

use crate::controller::FetchTicket;

/// A finished fetch, ready to hand back to the controller
#[derive(Debug)]
pub struct FetchOutcome {
    pub ticket: FetchTicket,
    pub result: ClientResult<PageResponse<Currency>>,
}

/// Spawns fetches; outcomes arrive on the receiver returned by `new`
#[derive(Clone)]
pub struct FetchDriver {
    source: Arc<dyn CurrencySource>,
    sender: mpsc::UnboundedSender<FetchOutcome>,
}

impl FetchDriver {
    /// Create a driver and the channel its outcomes are delivered on
    pub fn new(source: Arc<dyn CurrencySource>) -> (Self, mpsc::UnboundedReceiver<FetchOutcome>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { source, sender }, receiver)
    }

    /// Start fetching `ticket` in a background task
    pub fn spawn(&self, ticket: FetchTicket) {
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();

        tokio::spawn(async move {
            let result = source.fetch_page(ticket.request()).await;
            if sender.send(FetchOutcome { ticket, result }).is_err() {
                tracing::debug!(generation = ticket.generation(), "fetch finished after shutdown");
            }
        });
    }
}
