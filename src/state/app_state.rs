//! Application-level state.

use super::Notification;
use crate::config::Palette;
use crate::sentiment::SentimentBackend;
use std::time::{Duration, Instant};

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Current notification.
    pub notification: Option<Notification>,
    /// When the current notification was shown.
    pub notification_shown_at: Option<Instant>,
    /// Current error message.
    pub error: Option<String>,
    /// Whether a refresh is in flight.
    pub loading: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Scoring backend, shown in the status bar.
    pub backend: SentimentBackend,
    /// Resolved theme colors.
    pub palette: Palette,
}

impl AppState {
    /// Create application state for a backend and theme.
    pub fn new(backend: SentimentBackend, palette: Palette) -> Self {
        Self {
            backend,
            palette,
            ..Default::default()
        }
    }

    /// Whether any overlay is covering the dashboard.
    pub fn has_overlay(&self) -> bool {
        self.show_help || self.notification.is_some() || self.error.is_some()
    }

    /// Show a notification, replacing any previous one.
    pub fn notify(&mut self, notification: Notification, now: Instant) {
        self.notification = Some(notification);
        self.notification_shown_at = Some(now);
    }

    /// Drop the notification once its display time has passed.
    pub fn expire_notification(&mut self, now: Instant) {
        let expired = match (&self.notification, self.notification_shown_at) {
            (Some(notification), Some(shown_at)) => {
                now.duration_since(shown_at) >= Duration::from_secs(notification.duration_secs)
            }
            _ => false,
        };
        if expired {
            self.notification = None;
            self.notification_shown_at = None;
        }
    }

    /// Close the topmost overlay.
    pub fn dismiss_overlay(&mut self) {
        if self.show_help {
            self.show_help = false;
        } else if self.error.is_some() {
            self.error = None;
        } else {
            self.notification = None;
            self.notification_shown_at = None;
        }
    }
}
