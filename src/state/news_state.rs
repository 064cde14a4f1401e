//! News headline types.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// Placeholder for entries the feed did not date.
pub const UNKNOWN_DATE: &str = "unknown";

/// A headline as returned by the news feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    /// Raw publish date from the feed, or [`UNKNOWN_DATE`].
    pub published_at: String,
}

impl NewsItem {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        published_at: Option<impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            published_at: published_at
                .map(Into::into)
                .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
        }
    }

    /// Short rendering of the publish date; falls back to the raw value.
    pub fn published_display(&self) -> String {
        DateTime::parse_from_rfc2822(&self.published_at)
            .map(|dt| dt.format("%d/%m %H:%M").to_string())
            .unwrap_or_else(|_| self.published_at.clone())
    }
}

/// Scroll state of the headline table.
#[derive(Debug, Default)]
pub struct NewsState {
    /// First visible row.
    pub scroll_offset: usize,
}

impl NewsState {
    /// Scroll by `delta` rows within `len` rows.
    pub fn scroll(&mut self, delta: i32, len: usize) {
        let max_offset = len.saturating_sub(1) as i32;
        self.scroll_offset = (self.scroll_offset as i32 + delta).clamp(0, max_offset) as usize;
    }

    pub fn reset(&mut self) {
        self.scroll_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_date_becomes_unknown() {
        let item = NewsItem::new("Titre", "https://example.com", None::<String>);
        assert_eq!(item.published_at, UNKNOWN_DATE);
        assert_eq!(item.published_display(), "unknown");
    }

    #[test]
    fn test_rfc2822_date_is_shortened() {
        let item = NewsItem::new(
            "Titre",
            "https://example.com",
            Some("Tue, 05 Mar 2024 14:30:00 GMT"),
        );
        assert_eq!(item.published_display(), "05/03 14:30");
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut state = NewsState::default();
        state.scroll(-3, 15);
        assert_eq!(state.scroll_offset, 0);
        state.scroll(10, 15);
        assert_eq!(state.scroll_offset, 10);
        state.scroll(10, 15);
        assert_eq!(state.scroll_offset, 14);
        state.scroll(1, 0);
        assert_eq!(state.scroll_offset, 0);
    }
}
