//! HTTP client for the market data and news endpoints.

use super::converter::ChartResponse;
use super::{DataConverter, NewsSource, QuoteSource};
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::state::{NewsItem, QuoteBar};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

/// Builder for creating an API client.
pub struct ApiClientBuilder {
    config: ApiConfig,
}

impl ApiClientBuilder {
    /// Create a new builder with default config.
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
        }
    }

    /// Set the API configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the API client.
    pub fn build(self) -> Result<ApiClient> {
        ApiClient::new(self.config)
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Yahoo Finance chart API and the Google News RSS search.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { config, http })
    }

    /// Chart endpoint for a ticker.
    pub fn chart_url(&self, ticker: &str) -> Result<Url> {
        let range = format!("{}d", self.config.history_days);
        let url = Url::parse_with_params(
            &format!(
                "{}/v8/finance/chart/{}",
                self.config.quote_base_url.trim_end_matches('/'),
                ticker
            ),
            &[("range", range.as_str()), ("interval", "1d")],
        )?;
        Ok(url)
    }

    /// News search feed for a query.
    pub fn news_url(&self, query: &str) -> Result<Url> {
        let ceid = format!("{}:{}", self.config.region, self.config.language);
        let url = Url::parse_with_params(
            &format!(
                "{}/rss/search",
                self.config.news_base_url.trim_end_matches('/')
            ),
            &[
                ("q", query),
                ("hl", self.config.language.as_str()),
                ("gl", self.config.region.as_str()),
                ("ceid", ceid.as_str()),
            ],
        )?;
        Ok(url)
    }
}

#[async_trait]
impl QuoteSource for ApiClient {
    async fn fetch_quotes(&self, ticker: &str) -> Result<Vec<QuoteBar>> {
        let url = self.chart_url(ticker)?;
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let chart = parse_chart_body(status, &body, ticker)?;

        DataConverter::convert_chart(ticker, chart)
    }
}

#[async_trait]
impl NewsSource for ApiClient {
    async fn fetch_news(&self, query: &str, limit: usize) -> Result<Vec<NewsItem>> {
        let url = self.news_url(query)?;
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        check_news_status(response.status(), query)?;

        let body = response.bytes().await?;
        let channel = rss::Channel::read_from(&body[..])?;
        Ok(DataConverter::convert_feed(&channel, limit))
    }
}

/// Decode a chart response body.
///
/// Yahoo answers unknown tickers with a 404 carrying a chart error body, so
/// the body is parsed whatever the status. Only an unparseable body on an
/// error status is reported as the bare status.
fn parse_chart_body(status: StatusCode, body: &str, ticker: &str) -> Result<ChartResponse> {
    match serde_json::from_str(body) {
        Ok(chart) => Ok(chart),
        Err(_) if !status.is_success() => Err(Error::data_unavailable(format!(
            "HTTP {} for {}",
            status, ticker
        ))),
        Err(e) => Err(e.into()),
    }
}

fn check_news_status(status: StatusCode, query: &str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    Err(Error::data_unavailable(format!(
        "HTTP {} for news query {:?}",
        status, query
    )))
}
