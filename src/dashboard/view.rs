//! The dashboard view model.

use super::DashboardLimits;
use crate::api::{DataSource, Diagnostic};
use crate::chart::{CandlestickFigure, GaugeFigure, candlestick_chart, sentiment_gauge};
use crate::sentiment::SentimentScorer;
use crate::state::{Company, NewsItem, PriceHeader, QuoteBar};
use chrono::{DateTime, Local};

/// Scores above this are tinted positive.
const POSITIVE_THRESHOLD: f64 = 0.1;
/// Scores below this are tinted negative.
const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Background tint of a headline's sentiment cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTint {
    /// Green, score > 0.1.
    Positive,
    /// Red, score < -0.1.
    Negative,
    /// Yellow, everything in between (bounds included).
    Neutral,
}

impl RowTint {
    pub fn for_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            Self::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// A headline with its own sentiment score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredHeadline {
    pub item: NewsItem,
    pub score: f64,
    pub tint: RowTint,
}

/// What the sentiment panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SentimentPanel {
    Gauge(GaugeFigure),
    /// Headlines exist but none fell in the scored window.
    NothingToAnalyze,
    /// The feed returned no headlines.
    NoNews,
}

/// Everything drawn when price data is available.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadyView {
    pub header: PriceHeader,
    pub sentiment: SentimentPanel,
    pub candlestick: CandlestickFigure,
    pub headlines: Vec<ScoredHeadline>,
    /// The raw series behind the chart.
    pub bars: Vec<QuoteBar>,
}

/// Outcome of a refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    Ready(Box<ReadyView>),
    /// Quotes came back empty; only a generic failure notice is shown.
    Unavailable,
}

/// One fully computed dashboard for a company.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub company: Company,
    pub view: DashboardView,
    /// Reasons for any empty or neutral substitution.
    pub diagnostics: Vec<Diagnostic>,
    pub refreshed_at: DateTime<Local>,
}

/// Arithmetic mean, `None` for an empty slice.
pub fn average_sentiment(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}

impl Dashboard {
    /// Build the dashboard from already fetched data.
    pub fn assemble(
        company: Company,
        bars: Vec<QuoteBar>,
        news: Vec<NewsItem>,
        scorer: &SentimentScorer,
        limits: DashboardLimits,
        mut diagnostics: Vec<Diagnostic>,
    ) -> Self {
        let Some(header) = PriceHeader::from_bars(&bars) else {
            return Self {
                company,
                view: DashboardView::Unavailable,
                diagnostics,
                refreshed_at: Local::now(),
            };
        };

        let headlines: Vec<ScoredHeadline> = news
            .into_iter()
            .take(limits.news_limit)
            .map(|item| {
                let score = scorer.try_score(&item.title).unwrap_or_else(|e| {
                    diagnostics.push(Diagnostic::new(DataSource::Sentiment, e.to_string()));
                    0.0
                });
                ScoredHeadline {
                    tint: RowTint::for_score(score),
                    score,
                    item,
                }
            })
            .collect();

        let sentiment = if headlines.is_empty() {
            SentimentPanel::NoNews
        } else {
            let scores: Vec<f64> = headlines
                .iter()
                .take(limits.scored_headlines)
                .map(|h| h.score)
                .collect();
            match average_sentiment(&scores) {
                Some(average) => SentimentPanel::Gauge(sentiment_gauge(average, company.name)),
                None => SentimentPanel::NothingToAnalyze,
            }
        };

        let candlestick = candlestick_chart(&bars);

        Self {
            company,
            view: DashboardView::Ready(Box::new(ReadyView {
                header,
                sentiment,
                candlestick,
                headlines,
                bars,
            })),
            diagnostics,
            refreshed_at: Local::now(),
        }
    }

    /// The ready view, if prices were available.
    pub fn ready(&self) -> Option<&ReadyView> {
        match &self.view {
            DashboardView::Ready(view) => Some(view.as_ref()),
            DashboardView::Unavailable => None,
        }
    }
}
