//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic.

mod layout;
mod widgets;

pub use layout::{Layout, centered_rect};
pub use widgets::{
    CandlestickWidget, CompanyList, HeaderBar, HelpPanel, NO_NEWS, NOTHING_TO_ANALYZE, NewsTable,
    SentimentGaugeWidget, StatusBar, UNAVAILABLE_NOTICE,
};

use crate::config::{KeyBindings, UiConfig};
use crate::dashboard::DashboardView;
use crate::state::Store;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Main UI renderer.
pub struct Ui {
    config: UiConfig,
    keys: KeyBindings,
}

impl Ui {
    pub fn new(config: UiConfig, keys: KeyBindings) -> Self {
        Self { config, keys }
    }

    /// Render the entire UI.
    pub fn render(&self, frame: &mut Frame, store: &Store) {
        let layout = Layout::new(frame.area(), &self.config);
        let palette = &store.app.palette;

        if self.config.show_status_bar {
            StatusBar::render(frame, layout.status_area, store);
        }

        CompanyList::render(frame, layout.sidebar_area, store);

        match store.current_dashboard() {
            None => self.render_waiting(frame, layout.main_area, store),
            Some(dashboard) => match &dashboard.view {
                DashboardView::Unavailable => {
                    widgets::render_unavailable(frame, layout.main_area, palette);
                }
                DashboardView::Ready(view) => {
                    HeaderBar::render(
                        frame,
                        layout.header_area,
                        &dashboard.company,
                        &view.header,
                        palette,
                    );
                    frame.render_widget(
                        SentimentGaugeWidget::new(&view.sentiment, palette),
                        layout.gauge_area,
                    );
                    frame.render_widget(
                        CandlestickWidget::new(&view.candlestick, palette),
                        layout.candle_area,
                    );
                    NewsTable::render(
                        frame,
                        layout.news_area,
                        &view.headlines,
                        store.news.scroll_offset,
                        palette,
                    );
                }
            },
        }

        // Render help panel if visible
        if store.app.show_help {
            HelpPanel::render(frame, frame.area(), &self.keys, palette);
        }

        // Render notification if present
        if let Some(notification) = &store.app.notification {
            widgets::render_notification(frame, layout.notification_area, notification, palette);
        }

        // Render error if present
        if let Some(error) = &store.app.error {
            widgets::render_error(frame, layout.notification_area, error, palette);
        }
    }

    fn render_waiting(&self, frame: &mut Frame, area: Rect, store: &Store) {
        let palette = &store.app.palette;
        let company = store.companies.selected();
        let message = if store.app.loading {
            format!("Chargement des données pour {}...", company.name)
        } else {
            format!("Appuyez sur {} pour charger {}.", self.keys.refresh, company.name)
        };

        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                message,
                Style::default()
                    .fg(palette.muted)
                    .add_modifier(Modifier::ITALIC),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{Dashboard, DashboardLimits};
    use crate::sentiment::{SentimentBackend, SentimentScorer};
    use crate::state::{Action, AppState, CAC40, NewsItem, QuoteBar};
    use chrono::NaiveDate;
    use ratatui::{Terminal, backend::TestBackend};
    use tokio::sync::mpsc;

    fn store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        Store::new(tx, AppState::default())
    }

    fn screen(store: &Store) -> String {
        let ui = Ui::new(UiConfig::default(), KeyBindings::default());
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|frame| ui.render(frame, store)).unwrap();

        let buf = terminal.backend().buffer();
        let mut content = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                content.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            content.push('\n');
        }
        content
    }

    fn dashboard(bars: Vec<QuoteBar>, news: Vec<NewsItem>) -> Dashboard {
        let scorer = SentimentScorer::new(SentimentBackend::French).unwrap();
        Dashboard::assemble(
            CAC40[0],
            bars,
            news,
            &scorer,
            DashboardLimits::default(),
            Vec::new(),
        )
    }

    fn bars() -> Vec<QuoteBar> {
        vec![
            QuoteBar::new(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), 700.0, 710.0, 695.0, 705.0),
            QuoteBar::new(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(), 705.0, 720.0, 700.0, 712.3),
        ]
    }

    #[test]
    fn test_ready_dashboard() {
        let mut store = store();
        let news = vec![NewsItem::new(
            "Forte hausse du titre LVMH",
            "https://example.com/lvmh",
            None::<String>,
        )];
        store.reduce(Action::DashboardLoaded(Box::new(dashboard(bars(), news))));

        let text = screen(&store);
        assert!(text.contains("Prix actuel"));
        assert!(text.contains("€712.30"));
        assert!(text.contains("Variation 24h"));
        assert!(text.contains("Sentiment pour LVMH"));
        assert!(text.contains("Cours des 5 derniers jours"));
        assert!(text.contains("Forte hausse du titre LVMH"));
        assert!(!text.contains(UNAVAILABLE_NOTICE));
    }

    #[test]
    fn test_unavailable_notice_replaces_dashboard() {
        let mut store = store();
        store.reduce(Action::DashboardLoaded(Box::new(dashboard(Vec::new(), Vec::new()))));

        let text = screen(&store);
        assert!(text.contains(UNAVAILABLE_NOTICE));
        assert!(!text.contains("Prix actuel"));
        assert!(text.contains("Credit Agricole"));
    }

    #[test]
    fn test_no_news_placeholder() {
        let mut store = store();
        store.reduce(Action::DashboardLoaded(Box::new(dashboard(bars(), Vec::new()))));
        assert!(screen(&store).contains(NO_NEWS));
    }

    #[test]
    fn test_loading_message() {
        let mut store = store();
        store.reduce(Action::Refresh);
        assert!(screen(&store).contains("Chargement des données pour LVMH"));
    }

    #[test]
    fn test_help_overlay() {
        let mut store = store();
        store.reduce(Action::ToggleHelp);
        let text = screen(&store);
        assert!(text.contains("Aide"));
        assert!(text.contains("Quitter"));
    }
}
