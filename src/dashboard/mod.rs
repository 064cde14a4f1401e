//! Presentation controller.
//!
//! A refresh fetches quotes and news for the selected company, scores the
//! headlines, and builds both charts. Each refresh is a full recomputation
//! from the selection; nothing is carried over from the previous one.

mod view;

pub use view::{
    Dashboard, DashboardView, ReadyView, RowTint, ScoredHeadline, SentimentPanel,
    average_sentiment,
};

use crate::api::{self, Diagnostic, NewsSource, QuoteSource};
use crate::config::ApiConfig;
use crate::sentiment::SentimentScorer;
use crate::state::Company;

/// Limits applied while assembling a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLimits {
    /// Headlines kept for the table.
    pub news_limit: usize,
    /// Leading headlines averaged into the gauge.
    pub scored_headlines: usize,
}

impl Default for DashboardLimits {
    fn default() -> Self {
        Self {
            news_limit: 15,
            scored_headlines: 10,
        }
    }
}

impl From<&ApiConfig> for DashboardLimits {
    fn from(config: &ApiConfig) -> Self {
        Self {
            news_limit: config.news_limit,
            scored_headlines: config.scored_headlines,
        }
    }
}

/// Orchestrates fetching, scoring and chart building for one selection.
pub struct Controller<Q, N> {
    quotes: Q,
    news: N,
    scorer: SentimentScorer,
    limits: DashboardLimits,
}

impl<Q: QuoteSource, N: NewsSource> Controller<Q, N> {
    /// Create a new controller.
    pub fn new(quotes: Q, news: N, scorer: SentimentScorer, limits: DashboardLimits) -> Self {
        Self {
            quotes,
            news,
            scorer,
            limits,
        }
    }

    /// Fetch, score and build the dashboard for a company.
    ///
    /// Never fails: fetch errors degrade to empty data and are listed in
    /// [`Dashboard::diagnostics`].
    pub async fn refresh(&self, company: &Company) -> Dashboard {
        tracing::info!("Refreshing {} ({})", company.name, company.ticker);

        let (quotes, news) = tokio::join!(
            api::quotes_or_empty(&self.quotes, company.ticker),
            api::news_or_empty(&self.news, company.news_query(), self.limits.news_limit),
        );

        let diagnostics: Vec<Diagnostic> = quotes
            .diagnostic
            .into_iter()
            .chain(news.diagnostic)
            .collect();

        Dashboard::assemble(
            *company,
            quotes.data,
            news.data,
            &self.scorer,
            self.limits,
            diagnostics,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DataSource, MockNewsSource, MockQuoteSource};
    use crate::chart::GaugeBand;
    use crate::error::Error;
    use crate::sentiment::SentimentBackend;
    use crate::state::{CAC40, NewsItem, QuoteBar};
    use chrono::NaiveDate;

    fn scorer() -> SentimentScorer {
        SentimentScorer::new(SentimentBackend::French).unwrap()
    }

    fn bars() -> Vec<QuoteBar> {
        vec![
            QuoteBar::new(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(), 30.0, 31.0, 29.5, 30.5),
            QuoteBar::new(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(), 30.5, 32.0, 30.0, 31.5),
        ]
    }

    fn headline(title: &str) -> NewsItem {
        NewsItem::new(title, "https://news.google.com/articles/x", Some("Tue, 05 Mar 2024 14:30:00 GMT"))
    }

    #[tokio::test]
    async fn test_refresh_builds_ready_view() {
        let mut quotes = MockQuoteSource::new();
        quotes.expect_fetch_quotes().times(1).returning(|ticker| {
            assert_eq!(ticker, "BNP.PA");
            Ok(bars())
        });

        let mut news = MockNewsSource::new();
        news.expect_fetch_news().times(1).returning(|query, limit| {
            assert_eq!(query, "BNP Paribas");
            assert_eq!(limit, 15);
            Ok(vec![
                headline("BNP Paribas: forte hausse des bénéfices"),
                headline("Chute du titre BNP Paribas"),
            ])
        });

        let controller = Controller::new(quotes, news, scorer(), DashboardLimits::default());
        let dashboard = controller.refresh(&CAC40[6]).await;

        assert!(dashboard.diagnostics.is_empty());
        let DashboardView::Ready(view) = &dashboard.view else {
            panic!("expected ready view");
        };
        assert_eq!(view.headlines.len(), 2);
        assert_eq!(view.candlestick.candles.len(), 2);
        assert_eq!(view.header.current_price, 31.5);
        assert!(matches!(view.sentiment, SentimentPanel::Gauge(_)));
    }

    #[tokio::test]
    async fn test_unknown_ticker_shows_failure_notice() {
        let mut quotes = MockQuoteSource::new();
        quotes
            .expect_fetch_quotes()
            .times(1)
            .returning(|_| Err(Error::data_unavailable("XXX.PA (Not Found: No data found)")));

        let mut news = MockNewsSource::new();
        news.expect_fetch_news()
            .times(1)
            .returning(|_, _| Ok(vec![headline("hausse")]));

        let controller = Controller::new(quotes, news, scorer(), DashboardLimits::default());
        let dashboard = controller.refresh(&CAC40[0]).await;

        assert!(matches!(dashboard.view, DashboardView::Unavailable));
        assert_eq!(dashboard.diagnostics.len(), 1);
        assert_eq!(dashboard.diagnostics[0].source, DataSource::Quotes);
    }

    #[tokio::test]
    async fn test_news_failure_keeps_prices() {
        let mut quotes = MockQuoteSource::new();
        quotes.expect_fetch_quotes().returning(|_| Ok(bars()));

        let mut news = MockNewsSource::new();
        news.expect_fetch_news()
            .returning(|_, _| Err(Error::data_unavailable("HTTP 503")));

        let controller = Controller::new(quotes, news, scorer(), DashboardLimits::default());
        let dashboard = controller.refresh(&CAC40[9]).await;

        let DashboardView::Ready(view) = &dashboard.view else {
            panic!("expected ready view");
        };
        assert_eq!(view.sentiment, SentimentPanel::NoNews);
        assert!(view.headlines.is_empty());
        assert_eq!(dashboard.diagnostics[0].source, DataSource::News);
    }

    #[tokio::test]
    async fn test_gauge_reflects_average_of_leading_headlines() {
        let mut quotes = MockQuoteSource::new();
        quotes.expect_fetch_quotes().returning(|_| Ok(bars()));

        let mut news = MockNewsSource::new();
        news.expect_fetch_news().returning(|_, _| {
            Ok(vec![
                headline("excellent trimestre"), // 0.9
                headline("faillite évitée"),     // -0.9, outside the scored window
            ])
        });

        let limits = DashboardLimits {
            news_limit: 15,
            scored_headlines: 1,
        };
        let controller = Controller::new(quotes, news, scorer(), limits);
        let dashboard = controller.refresh(&CAC40[4]).await;

        let DashboardView::Ready(view) = &dashboard.view else {
            panic!("expected ready view");
        };
        let SentimentPanel::Gauge(gauge) = &view.sentiment else {
            panic!("expected gauge");
        };
        assert!((gauge.value - 95.0).abs() < 1e-9);
        assert_eq!(gauge.band, GaugeBand::Green);
        assert_eq!(view.headlines[1].tint, RowTint::Negative);
    }

    #[test]
    fn test_limits_from_config() {
        let config = ApiConfig {
            news_limit: 20,
            scored_headlines: 5,
            ..ApiConfig::default()
        };
        assert_eq!(
            DashboardLimits::from(&config),
            DashboardLimits {
                news_limit: 20,
                scored_headlines: 5
            }
        );
    }
}
