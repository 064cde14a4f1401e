//! Price history types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Intraday percent change from open to close.
pub fn percent_change(open: f64, close: f64) -> f64 {
    (close - open) / open * 100.0
}

/// One trading day of OHLC data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBar {
    /// Trading date.
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// (close - open) / open * 100.
    pub percent_change: f64,
}

impl QuoteBar {
    /// Create a bar, deriving its percent change.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            percent_change: percent_change(open, close),
        }
    }

    /// Whether the bar closed at or above its open.
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// Current price and day-over-day change shown in the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceHeader {
    /// Latest close.
    pub current_price: f64,
    /// Change of the latest close against the previous close, in percent.
    pub change_percent: f64,
}

impl PriceHeader {
    /// Derive the header from a chronological series. `None` when the series is empty.
    pub fn from_bars(bars: &[QuoteBar]) -> Option<Self> {
        let latest = bars.last()?;
        let previous = if bars.len() > 1 {
            &bars[bars.len() - 2]
        } else {
            latest
        };

        Some(Self {
            current_price: latest.close,
            change_percent: (latest.close - previous.close) / previous.close * 100.0,
        })
    }
}
