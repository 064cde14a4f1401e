//! Data conversion utilities for API responses.

use crate::error::{Error, Result};
use crate::state::{NewsItem, QuoteBar};
use chrono::DateTime;
use serde::Deserialize;

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteSeries>,
}

#[derive(Debug, Deserialize)]
struct QuoteSeries {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Converts API responses to internal state types.
pub struct DataConverter;

impl DataConverter {
    /// Convert a chart response into chronological quote bars.
    ///
    /// Days with any missing price (holidays, halted sessions) are skipped.
    /// An answer with no usable day is an error, so callers can tell an
    /// unknown ticker from a quiet one.
    pub fn convert_chart(ticker: &str, response: ChartResponse) -> Result<Vec<QuoteBar>> {
        let results = match (response.chart.result, response.chart.error) {
            (_, Some(err)) => {
                return Err(Error::data_unavailable(format!(
                    "{} ({}: {})",
                    ticker, err.code, err.description
                )));
            }
            (Some(results), None) => results,
            (None, None) => {
                return Err(Error::data_unavailable(format!(
                    "{}: empty chart result",
                    ticker
                )));
            }
        };

        let data = results
            .into_iter()
            .next()
            .ok_or_else(|| Error::data_unavailable(format!("{}: no chart data", ticker)))?;
        let timestamps = data.timestamp.unwrap_or_default();
        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| Error::data_unavailable(format!("{}: no quote series", ticker)))?;

        let mut bars = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let price = |series: &[Option<f64>]| series.get(i).copied().flatten();
            let (Some(open), Some(high), Some(low), Some(close)) = (
                price(&quote.open),
                price(&quote.high),
                price(&quote.low),
                price(&quote.close),
            ) else {
                continue;
            };

            let date = DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.date_naive())
                .ok_or_else(|| Error::invalid_input(format!("invalid timestamp: {}", ts)))?;

            bars.push(QuoteBar::new(date, open, high, low, close));
        }

        if bars.is_empty() {
            return Err(Error::data_unavailable(format!(
                "{}: no trading days in response",
                ticker
            )));
        }

        bars.sort_by_key(|bar| bar.date);
        Ok(bars)
    }

    /// Convert an RSS channel into at most `limit` headlines, in feed order.
    pub fn convert_feed(channel: &rss::Channel, limit: usize) -> Vec<NewsItem> {
        channel
            .items()
            .iter()
            .take(limit)
            .map(|item| {
                NewsItem::new(
                    item.title().unwrap_or_default(),
                    item.link().unwrap_or_default(),
                    item.pub_date(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::UNKNOWN_DATE;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn chart(json: &str) -> ChartResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_convert_chart() {
        // 2024-03-04 and 2024-03-05, 08:00 UTC
        let response = chart(
            r#"{"chart":{"result":[{
                "meta":{"currency":"EUR","symbol":"MC.PA"},
                "timestamp":[1709539200,1709625600],
                "indicators":{"quote":[{
                    "open":[800.0,810.0],
                    "high":[815.0,812.0],
                    "low":[795.0,790.0],
                    "close":[810.0,801.9],
                    "volume":[1000,2000]
                }]}
            }],"error":null}}"#,
        );

        let bars = DataConverter::convert_chart("MC.PA", response).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        assert_eq!(bars[1].date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert!((bars[0].percent_change - 1.25).abs() < 1e-9);
        assert!((bars[1].percent_change - (801.9 - 810.0) / 810.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_chart_skips_incomplete_days() {
        let response = chart(
            r#"{"chart":{"result":[{
                "timestamp":[1709539200,1709625600],
                "indicators":{"quote":[{
                    "open":[null,810.0],
                    "high":[null,812.0],
                    "low":[null,790.0],
                    "close":[null,801.0]
                }]}
            }],"error":null}}"#,
        );

        let bars = DataConverter::convert_chart("MC.PA", response).unwrap();
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].open, 810.0);
    }

    #[test]
    fn test_convert_chart_unknown_ticker() {
        let response = chart(
            r#"{"chart":{"result":null,"error":{
                "code":"Not Found",
                "description":"No data found, symbol may be delisted"
            }}}"#,
        );

        let err = DataConverter::convert_chart("XXX.PA", response).unwrap_err();
        assert!(matches!(err, Error::DataUnavailable(_)));
        assert!(err.to_string().contains("Not Found"));
    }

    #[test]
    fn test_convert_chart_without_timestamps() {
        let response = chart(
            r#"{"chart":{"result":[{"indicators":{"quote":[{}]}}],"error":null}}"#,
        );
        assert!(DataConverter::convert_chart("MC.PA", response).is_err());
    }

    #[test]
    fn test_convert_feed() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
            <rss version="2.0"><channel>
                <title>"Danone" - Google Actualités</title>
                <link>https://news.google.com</link>
                <description>Google Actualités</description>
                <item>
                    <title>Danone relève ses objectifs - Les Echos</title>
                    <link>https://news.google.com/articles/1</link>
                    <pubDate>Tue, 05 Mar 2024 14:30:00 GMT</pubDate>
                </item>
                <item>
                    <title>Danone: la grève s'étend - Le Monde</title>
                    <link>https://news.google.com/articles/2</link>
                </item>
                <item>
                    <title>Troisième</title>
                    <link>https://news.google.com/articles/3</link>
                </item>
            </channel></rss>"#;
        let channel = rss::Channel::read_from(xml.as_bytes()).unwrap();

        let items = DataConverter::convert_feed(&channel, 2);
        assert_eq!(
            items,
            vec![
                NewsItem::new(
                    "Danone relève ses objectifs - Les Echos",
                    "https://news.google.com/articles/1",
                    Some("Tue, 05 Mar 2024 14:30:00 GMT"),
                ),
                NewsItem {
                    title: "Danone: la grève s'étend - Le Monde".to_string(),
                    link: "https://news.google.com/articles/2".to_string(),
                    published_at: UNKNOWN_DATE.to_string(),
                },
            ]
        );
    }
}
