//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, and rendering.

use crate::api::{ApiClient, ApiClientBuilder};
use crate::config::Config;
use crate::dashboard::{Controller, DashboardLimits, DashboardView};
use crate::error::Result;
use crate::events::EventHandler;
use crate::sentiment::SentimentScorer;
use crate::state::{Action, AppState, Notification, Store};
use crate::ui::Ui;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Fetches and assembles dashboards.
    controller: Controller<ApiClient, ApiClient>,
    /// Renderer.
    ui: Ui,
    /// Whether mouse capture was enabled at startup.
    mouse_capture: bool,
}

impl App {
    /// Create a new application.
    ///
    /// Everything that can fail on bad configuration is built before the
    /// terminal is switched to raw mode.
    pub async fn new(config: Config) -> Result<Self> {
        let backend = config.sentiment.backend;
        let scorer = SentimentScorer::new(backend)?;
        let client = ApiClientBuilder::new().config(config.api.clone()).build()?;
        let controller = Controller::new(
            client.clone(),
            client,
            scorer,
            DashboardLimits::from(&config.api),
        );
        let event_handler = EventHandler::new(&config.keybindings, config.ui.tick_rate_ms)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        // Create store
        let store = Store::new(action_tx, AppState::new(backend, config.theme.palette()));

        let ui = Ui::new(config.ui.clone(), config.keybindings.clone());
        let mouse_capture = config.ui.mouse_support;

        let terminal = setup_terminal(mouse_capture)?;

        tracing::info!("Starting with sentiment backend: {}", backend);

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            controller,
            ui,
            mouse_capture,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        // Load the default selection
        self.store.dispatch(Action::Refresh)?;

        // Main event loop
        loop {
            self.store.reduce(Action::Tick);

            // Render UI
            self.draw()?;

            // Handle events and actions
            let result = tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => match result? {
                    Some(action) => self.handle_action(action).await,
                    None => Ok(()),
                },

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => self.handle_action(action).await,
            };

            if let Err(e) = result {
                if !e.is_recoverable() {
                    return Err(e);
                }
                tracing::warn!("{}", e);
                self.store.reduce(Action::SetError(e.to_string()));
            }

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        tracing::info!("Shutting down");
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let ui = &self.ui;
        let store = &self.store;
        self.terminal.draw(|frame| ui.render(frame, store))?;
        Ok(())
    }

    /// Handle an action.
    async fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Refresh => self.refresh().await?,
            action => {
                // A new selection always triggers a fresh computation.
                if self.store.reduce(action) {
                    self.store.dispatch(Action::Refresh)?;
                }
            }
        }
        Ok(())
    }

    /// Recompute the dashboard for the current selection.
    async fn refresh(&mut self) -> Result<()> {
        self.store.reduce(Action::Refresh);
        self.draw()?;

        let company = *self.store.companies.selected();
        let dashboard = self.controller.refresh(&company).await;

        for diagnostic in &dashboard.diagnostics {
            tracing::warn!("{} ({}): {}", company.name, company.ticker, diagnostic);
        }
        if let Some(first) = dashboard.diagnostics.first() {
            let notification = match &dashboard.view {
                DashboardView::Unavailable => Notification::error(first.to_string()),
                DashboardView::Ready(_) => Notification::warning(first.to_string()),
            };
            self.store.reduce(Action::ShowNotification(notification));
        }

        self.store
            .reduce(Action::DashboardLoaded(Box::new(dashboard)));
        Ok(())
    }
}

/// Switch to raw mode and the alternate screen.
///
/// If any step after raw mode fails, the terminal is restored before the
/// error is returned.
fn setup_terminal(mouse_capture: bool) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let result = enter_screen(mouse_capture);
    if result.is_err() {
        restore_terminal(&mut io::stdout(), mouse_capture);
    }
    result
}

fn enter_screen(mouse_capture: bool) -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_capture {
        execute!(stdout, EnableMouseCapture)?;
    }
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Undo [`setup_terminal`]. Every step is attempted; failures are ignored.
fn restore_terminal<W: io::Write>(out: &mut W, mouse_capture: bool) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen);
    if mouse_capture {
        let _ = execute!(out, DisableMouseCapture);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        restore_terminal(self.terminal.backend_mut(), self.mouse_capture);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_leaves_alternate_screen() {
        let mut out = Vec::new();
        restore_terminal(&mut out, false);
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(!written.contains("\x1b[?1000l"));
    }

    #[test]
    fn test_restore_releases_mouse_when_captured() {
        let mut out = Vec::new();
        restore_terminal(&mut out, true);
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?1000l"));
    }
}
