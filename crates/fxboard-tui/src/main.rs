//! fxboard TUI
//!
//! Terminal browser for a paginated currency service

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use fxboard_client::HttpGateway;
use fxboard_core::{Settings, ViewMode};
use ratatui::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod action;
mod app;
mod config;
mod event;
mod ui;

use app::{App, Inbox};
use event::EventHandler;

/// fxboard Terminal UI
#[derive(Parser, Debug)]
#[command(name = "fxboard-tui", version, about)]
struct Args {
    /// Server address (overrides the config file)
    #[arg(short, long)]
    server: Option<String>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Presentation mode: list or grid
    #[arg(short, long)]
    mode: Option<ViewMode>,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Pixels one terminal cell counts as when sizing the grid
    #[arg(long)]
    cells_px: Option<u32>,

    /// Tick rate in milliseconds
    #[arg(long)]
    tick_rate: Option<u64>,

    /// Enable debug logging to file
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn apply(&self, settings: &mut Settings) {
        if let Some(server) = &self.server {
            settings.gateway.base_url.clone_from(server);
        }
        if let Some(timeout_ms) = self.timeout_ms {
            settings.gateway.timeout_ms = timeout_ms;
        }
        if let Some(mode) = self.mode {
            settings.ui.mode = mode;
        }
        if let Some(cells_px) = self.cells_px {
            settings.ui.cells_px = cells_px;
        }
        if let Some(tick_rate) = self.tick_rate {
            settings.ui.tick_rate_ms = tick_rate;
        }
    }
}

type Term = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // The terminal owns stdout, so logs only go to a file
    if args.debug {
        let file = std::fs::File::create("fxboard-tui.log")?;
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(file).with_ansi(false))
            .with(tracing_subscriber::EnvFilter::new("debug"))
            .init();
    }

    let mut settings = Settings::load_default(args.config.as_deref())?;
    args.apply(&mut settings);
    tracing::debug!(?settings, "effective settings");

    let gateway = Arc::new(HttpGateway::new(settings.gateway_config()?)?);
    let (width, _) = crossterm::terminal::size()?;
    let (mut app, mut inbox) =
        App::new(gateway, settings.ui.mode, settings.ui.cells_px, width)?;

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms);
    let result = run_app(&mut terminal, &mut app, &mut inbox, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Run the application main loop
async fn run_app(
    terminal: &mut Term,
    app: &mut App,
    inbox: &mut Inbox,
    tick_rate: Duration,
) -> Result<()> {
    let mut events = EventHandler::new(tick_rate);
    events.start();

    app.start();

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            event = events.next() => {
                let Some(event) = event else { break };
                let action = match event {
                    event::Event::Key(key) => {
                        event::key_to_action(key, app.mode, app.page_input.is_some())
                    }
                    event::Event::Resize(w, h) => action::Action::Resize(w, h),
                    event::Event::Tick => action::Action::Tick,
                };
                app.handle_action(action);
            }
            Some(outcome) = inbox.outcomes.recv() => {
                app.apply_outcome(outcome);
            }
            Some(outcome) = inbox.details.recv() => {
                app.apply_details(outcome);
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
