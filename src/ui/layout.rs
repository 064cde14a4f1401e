//! Layout management for the TUI.

use crate::config::UiConfig;
use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Rows taken by the price header.
const HEADER_HEIGHT: u16 = 3;

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top), empty when hidden.
    pub status_area: Rect,
    /// Company list on the left.
    pub sidebar_area: Rect,
    /// Everything right of the sidebar.
    pub main_area: Rect,
    /// Price header.
    pub header_area: Rect,
    /// Sentiment gauge, left half of the chart row.
    pub gauge_area: Rect,
    /// Candlestick chart, right half of the chart row.
    pub candle_area: Rect,
    /// Headline table.
    pub news_area: Rect,
    /// Notification area (overlaid).
    pub notification_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect, config: &UiConfig) -> Self {
        let status_height = if config.show_status_bar { 1 } else { 0 };
        let rows = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(status_height), // Status bar
                Constraint::Min(0),                // Body
            ])
            .split(area);

        let columns = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(config.sidebar_width),
                Constraint::Min(0),
            ])
            .split(rows[1]);
        let main_area = columns[1];

        let sections = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(8),
                Constraint::Length(config.news_table_height),
            ])
            .split(main_area);

        let charts = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(sections[1]);

        // Notification area is centered in the main area
        let notification_area = Rect {
            x: area.x + area.width / 4,
            y: area.y + (area.height / 2).saturating_sub(2),
            width: area.width / 2,
            height: 4.min(area.height),
        };

        Self {
            status_area: rows[0],
            sidebar_area: columns[0],
            main_area,
            header_area: sections[0],
            gauge_area: charts[0],
            candle_area: charts[1],
            news_area: sections[2],
            notification_area,
        }
    }
}

/// Create a centered popup area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charts_split_evenly() {
        let layout = Layout::new(Rect::new(0, 0, 124, 40), &UiConfig::default());
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.sidebar_area.width, 24);
        assert_eq!(layout.gauge_area.width, layout.candle_area.width);
        assert_eq!(layout.news_area.height, 18);
        assert_eq!(layout.header_area.height, HEADER_HEIGHT);
    }

    #[test]
    fn test_hidden_status_bar() {
        let config = UiConfig {
            show_status_bar: false,
            ..UiConfig::default()
        };
        let layout = Layout::new(Rect::new(0, 0, 100, 40), &config);
        assert_eq!(layout.status_area.height, 0);
        assert_eq!(layout.sidebar_area.y, 0);
    }
}
