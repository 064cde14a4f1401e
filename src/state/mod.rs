//! State management for cacpulse.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture.

mod app_state;
mod company;
mod news_state;
mod quote_state;

pub use app_state::AppState;
pub use company::{CAC40, Company, CompanyState};
pub use news_state::{NewsItem, NewsState, UNKNOWN_DATE};
pub use quote_state::{PriceHeader, QuoteBar, percent_change};

use crate::dashboard::Dashboard;
use crate::error::Result;
use chrono::{DateTime, Local};
use std::time::Instant;
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Selection
    SelectCompany(usize),
    NextCompany,
    PreviousCompany,
    FirstCompany,
    LastCompany,

    // Data refresh
    Refresh,
    DashboardLoaded(Box<Dashboard>),

    // UI actions
    ScrollNewsUp,
    ScrollNewsDown,
    PageNewsUp,
    PageNewsDown,
    ToggleHelp,
    ShowNotification(Notification),
    DismissOverlay,

    // Error handling
    SetError(String),

    /// Periodic tick, expires notifications.
    Tick,

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Info,
            duration_secs: 3,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            duration_secs: 5,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Error,
            duration_secs: 10,
        }
    }
}

/// Dashboard data for the current selection.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Latest computed dashboard, if any refresh completed.
    pub current: Option<Dashboard>,
    /// When the latest refresh completed.
    pub last_updated: Option<DateTime<Local>>,
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Company selection.
    pub companies: CompanyState,
    /// Latest dashboard.
    pub dashboard: DashboardState,
    /// Headline table scroll.
    pub news: NewsState,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

/// Rows moved by a page scroll.
const PAGE_SIZE: i32 = 5;

impl Store {
    /// Create a new store with the given action sender.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>, app: AppState) -> Self {
        Self {
            app,
            companies: CompanyState::default(),
            dashboard: DashboardState::default(),
            news: NewsState::default(),
            action_tx,
        }
    }

    /// Dispatch an action to the store.
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.action_tx
            .send(action)
            .map_err(|e| crate::Error::channel(e.to_string()))
    }

    /// The dashboard for the current selection, if it has been loaded.
    ///
    /// A dashboard computed for a previous selection is not returned.
    pub fn current_dashboard(&self) -> Option<&Dashboard> {
        self.dashboard
            .current
            .as_ref()
            .filter(|d| d.company == *self.companies.selected())
    }

    /// Apply an action to update state. Returns whether the selection changed.
    pub fn reduce(&mut self, action: Action) -> bool {
        match action {
            // Selection
            Action::SelectCompany(index) => return self.companies.select(index),
            Action::NextCompany => return self.companies.move_by(1),
            Action::PreviousCompany => return self.companies.move_by(-1),
            Action::FirstCompany => return self.companies.select(0),
            Action::LastCompany => return self.companies.select(CAC40.len() - 1),

            // Data refresh
            Action::Refresh => self.app.loading = true,
            Action::DashboardLoaded(dashboard) => {
                self.dashboard.last_updated = Some(dashboard.refreshed_at);
                self.dashboard.current = Some(*dashboard);
                self.news.reset();
                self.app.loading = false;
            }

            // UI actions
            Action::ScrollNewsUp => self.scroll_news(-1),
            Action::ScrollNewsDown => self.scroll_news(1),
            Action::PageNewsUp => self.scroll_news(-PAGE_SIZE),
            Action::PageNewsDown => self.scroll_news(PAGE_SIZE),
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => {
                self.app.notify(notification, Instant::now());
            }
            Action::DismissOverlay => self.app.dismiss_overlay(),

            // Error handling
            Action::SetError(error) => {
                self.app.error = Some(error);
                self.app.loading = false;
            }
            Action::Tick => self.app.expire_notification(Instant::now()),

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
            }
        }
        false
    }

    fn scroll_news(&mut self, delta: i32) {
        let len = self
            .current_dashboard()
            .and_then(|d| d.ready())
            .map(|view| view.headlines.len())
            .unwrap_or(0);
        self.news.scroll(delta, len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{Dashboard, DashboardLimits};
    use crate::sentiment::{SentimentBackend, SentimentScorer};
    use chrono::NaiveDate;

    fn store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        Store::new(tx, AppState::default())
    }

    fn dashboard_for(company: Company, headlines: usize) -> Dashboard {
        let scorer = SentimentScorer::new(SentimentBackend::French).unwrap();
        let bars = vec![QuoteBar::new(
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            10.0,
            11.0,
            9.0,
            10.5,
        )];
        let news = (0..headlines)
            .map(|i| NewsItem::new(format!("titre {i}"), "https://example.com", None::<String>))
            .collect();
        Dashboard::assemble(
            company,
            bars,
            news,
            &scorer,
            DashboardLimits::default(),
            Vec::new(),
        )
    }

    #[test]
    fn test_selection_change_is_reported() {
        let mut store = store();
        assert!(store.reduce(Action::NextCompany));
        assert!(!store.reduce(Action::SelectCompany(1)));
        assert!(store.reduce(Action::LastCompany));
        assert_eq!(store.companies.selected().name, "Danone");
        assert!(!store.reduce(Action::NextCompany));
        assert!(store.reduce(Action::FirstCompany));
    }

    #[test]
    fn test_dashboard_loaded_clears_loading() {
        let mut store = store();
        store.reduce(Action::Refresh);
        assert!(store.app.loading);

        store.reduce(Action::DashboardLoaded(Box::new(dashboard_for(CAC40[0], 3))));
        assert!(!store.app.loading);
        assert!(store.current_dashboard().is_some());
        assert!(store.dashboard.last_updated.is_some());
    }

    #[test]
    fn test_stale_dashboard_is_hidden_after_selection_change() {
        let mut store = store();
        store.reduce(Action::DashboardLoaded(Box::new(dashboard_for(CAC40[0], 3))));
        store.reduce(Action::NextCompany);
        assert!(store.current_dashboard().is_none());
    }

    #[test]
    fn test_news_scroll_bounded_by_headlines() {
        let mut store = store();
        store.reduce(Action::DashboardLoaded(Box::new(dashboard_for(CAC40[0], 12))));
        store.reduce(Action::PageNewsDown);
        store.reduce(Action::PageNewsDown);
        store.reduce(Action::PageNewsDown);
        assert_eq!(store.news.scroll_offset, 11);
        store.reduce(Action::ScrollNewsUp);
        assert_eq!(store.news.scroll_offset, 10);
    }

    #[test]
    fn test_dismiss_overlay_closes_help_first() {
        let mut store = store();
        store.reduce(Action::ToggleHelp);
        store.reduce(Action::SetError("boom".to_string()));
        store.reduce(Action::DismissOverlay);
        assert!(!store.app.show_help);
        assert!(store.app.error.is_some());
        store.reduce(Action::DismissOverlay);
        assert!(!store.app.has_overlay());
    }

    #[test]
    fn test_dispatch_sends_on_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let store = Store::new(tx, AppState::default());
        store.dispatch(Action::Refresh).unwrap();
        assert!(matches!(rx.try_recv(), Ok(Action::Refresh)));
    }
}
