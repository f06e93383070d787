//! Main application state and UI loop
//!
//! Drains developer-log events and fetch outcomes into the dashboard, draws it
//! and maps key presses onto controller operations.

use crate::controller::DashboardController;
use crate::events::Event as LogEvent;
use crate::ui::dashboard::render_dashboard;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tokio::sync::mpsc;

/// Application state
pub struct App {
    controller: DashboardController,

    /// Receives developer-log events from the logger.
    event_receiver: mpsc::UnboundedReceiver<LogEvent>,
}

impl App {
    pub fn new(
        controller: DashboardController,
        event_receiver: mpsc::UnboundedReceiver<LogEvent>,
    ) -> Self {
        Self {
            controller,
            event_receiver,
        }
    }

    /// Kick off the initial user loads.
    pub fn start(&mut self) {
        self.controller.load_recent_users();
        self.controller.load_all_users();
    }

    /// Moves everything that arrived since the last frame into the state.
    fn drain(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.controller.state_mut().add_to_activity_log(event);
        }
        self.controller.poll();
        self.controller.state_mut().update();
    }

    /// Handles a key press. Returns `false` when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return false,
            KeyCode::Up | KeyCode::Char('k') => self.controller.state_mut().move_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.controller.state_mut().move_cursor_down(),
            KeyCode::Enter => {
                let email = self.controller.state().cursor_email();
                // Failures are already on screen and in the log
                let _ = self.controller.select_user(&email);
            }
            KeyCode::Right => {
                self.controller.next_page();
            }
            KeyCode::Left => {
                self.controller.previous_page();
            }
            KeyCode::Char('r') => {
                log::info!(target: "users", "Reloading users");
                self.start();
            }
            _ => {}
        }
        true
    }
}

/// Runs the application UI in a loop, handling events and rendering the dashboard.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    app.start();

    // UI event loop
    loop {
        app.drain();
        terminal.draw(|f| render_dashboard(f, app.controller.state()))?;

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                if !app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}
