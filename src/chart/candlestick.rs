//! Candlestick figure.

use crate::state::QuoteBar;
use chrono::NaiveDate;
use serde::Serialize;

/// One candle, OHLC copied straight from a quote bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candle {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// Everything needed to draw the price chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandlestickFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Chronological candles.
    pub candles: Vec<Candle>,
}

impl CandlestickFigure {
    /// Lowest low and highest high, or `None` without candles.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        if self.candles.is_empty() {
            return None;
        }
        let low = self
            .candles
            .iter()
            .map(|c| c.low)
            .fold(f64::INFINITY, f64::min);
        let high = self
            .candles
            .iter()
            .map(|c| c.high)
            .fold(f64::NEG_INFINITY, f64::max);
        Some((low, high))
    }
}

/// Fixed chart title, whatever number of sessions came back.
const CHART_TITLE: &str = "Cours des 5 derniers jours";

/// Build the price chart from a quote series.
pub fn candlestick_chart(bars: &[QuoteBar]) -> CandlestickFigure {
    CandlestickFigure {
        title: CHART_TITLE.to_string(),
        x_label: "Date".to_string(),
        y_label: "Prix (EUR)".to_string(),
        candles: bars
            .iter()
            .map(|bar| Candle {
                date: bar.date,
                open: bar.open,
                high: bar.high,
                low: bar.low,
                close: bar.close,
            })
            .collect(),
    }
}
