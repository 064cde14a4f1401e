//! Market data and news integration.
//!
//! Data sources sit behind the [`QuoteSource`] and [`NewsSource`] traits.
//! Callers that want the degrade-to-empty behaviour go through
//! [`quotes_or_empty`] and [`news_or_empty`], which swap any failure for an
//! empty result and report the reason as a [`Diagnostic`].

mod client;
mod converter;

pub use client::{ApiClient, ApiClientBuilder};
pub use converter::DataConverter;

use crate::error::Result;
use crate::state::{NewsItem, QuoteBar};
use async_trait::async_trait;

/// A source of daily OHLC history.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch the most recent trading days for a ticker, oldest first.
    async fn fetch_quotes(&self, ticker: &str) -> Result<Vec<QuoteBar>>;
}

/// A source of news headlines.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch at most `limit` headlines matching a search query, in feed order.
    async fn fetch_news(&self, query: &str, limit: usize) -> Result<Vec<NewsItem>>;
}

/// Which step of a refresh produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Quotes,
    News,
    Sentiment,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quotes => write!(f, "quotes"),
            Self::News => write!(f, "news"),
            Self::Sentiment => write!(f, "sentiment"),
        }
    }
}

/// Why a step fell back to its empty or neutral value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub source: DataSource,
    pub message: String,
}

impl Diagnostic {
    pub fn new(source: DataSource, message: impl Into<String>) -> Self {
        Self {
            source,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.source, self.message)
    }
}

/// A fetch result that never fails: data, plus the reason if it had to be emptied.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub data: T,
    pub diagnostic: Option<Diagnostic>,
}

impl<T: Default> Fetched<T> {
    fn from_result(source: DataSource, result: Result<T>) -> Self {
        match result {
            Ok(data) => Self {
                data,
                diagnostic: None,
            },
            Err(e) => {
                tracing::warn!("Error fetching {}: {}", source, e);
                Self {
                    data: T::default(),
                    diagnostic: Some(Diagnostic::new(source, e.to_string())),
                }
            }
        }
    }
}

/// Fetch quotes, substituting an empty series on failure.
pub async fn quotes_or_empty<Q>(source: &Q, ticker: &str) -> Fetched<Vec<QuoteBar>>
where
    Q: QuoteSource + ?Sized,
{
    let fetched = Fetched::from_result(DataSource::Quotes, source.fetch_quotes(ticker).await);
    tracing::debug!("{} quote bars for {}", fetched.data.len(), ticker);
    fetched
}

/// Fetch news, substituting an empty list on failure.
pub async fn news_or_empty<N>(source: &N, query: &str, limit: usize) -> Fetched<Vec<NewsItem>>
where
    N: NewsSource + ?Sized,
{
    let fetched = Fetched::from_result(DataSource::News, source.fetch_news(query, limit).await);
    tracing::debug!("{} headlines for {:?}", fetched.data.len(), query);
    fetched
}
