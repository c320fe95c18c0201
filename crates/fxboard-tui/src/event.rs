//! Event handling for terminal and application events

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use fxboard_core::ViewMode;
use tokio::sync::mpsc;

use crate::action::Action;

/// Terminal event types
#[derive(Debug, Clone)]
pub enum Event {
    /// Terminal key event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick for animations
    Tick,
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    /// Event sender
    sender: mpsc::UnboundedSender<Event>,
    /// Event receiver
    receiver: mpsc::UnboundedReceiver<Event>,
    /// Tick rate
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver,
            tick_rate,
        }
    }

    /// Start the event loop in a background task
    pub fn start(&self) {
        let sender = self.sender.clone();
        let tick_rate = self.tick_rate;

        tokio::task::spawn_blocking(move || {
            let mut last_tick = std::time::Instant::now();

            loop {
                // Calculate timeout until next tick
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                if event::poll(timeout).unwrap_or(false) {
                    let sent = match event::read() {
                        Ok(CrosstermEvent::Key(key)) => sender.send(Event::Key(key)).is_ok(),
                        Ok(CrosstermEvent::Resize(w, h)) => sender.send(Event::Resize(w, h)).is_ok(),
                        _ => true,
                    };
                    if !sent {
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = std::time::Instant::now();
                }
            }
        });
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }
}

/// Convert a key event to an action
///
/// While a page number is being typed, only digits, editing keys and quit
/// are recognised.
pub fn key_to_action(key: KeyEvent, mode: ViewMode, typing_page: bool) -> Action {
    if typing_page {
        return match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => Action::PageInput(c),
            KeyCode::Backspace => Action::PageInputBackspace,
            KeyCode::Enter => Action::ConfirmPageInput,
            KeyCode::Esc => Action::Back,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            _ => Action::None,
        };
    }

    match key.code {
        // Quit
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::Char('g') => Action::First,
        KeyCode::Char('G') => Action::Last,
        KeyCode::Enter => Action::Select,
        KeyCode::Esc => Action::Back,
        KeyCode::Tab => Action::ToggleFocus,

        // Paging (grid only; list mode pages by scrolling)
        KeyCode::Right | KeyCode::Char('n') if mode == ViewMode::Grid => Action::NextPage,
        KeyCode::Left | KeyCode::Char('p') if mode == ViewMode::Grid => Action::PreviousPage,
        KeyCode::Char(c @ '1'..='9') if mode == ViewMode::Grid => {
            Action::JumpToPage(c.to_digit(10).map_or(0, |d| d - 1))
        }
        KeyCode::Char(':') if mode == ViewMode::Grid => Action::StartPageInput,

        // Size and ordering
        KeyCode::Char('+' | '=') => Action::SizeUp,
        KeyCode::Char('-') => Action::SizeDown,
        KeyCode::Char('s') => Action::CycleSort,
        KeyCode::Char('d') if mode == ViewMode::Grid => Action::ToggleDirection,

        // Data
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('R') => Action::Retry,

        KeyCode::Char('?') => Action::Help,

        _ => Action::None,
    }
}
