//! Chart builders.
//!
//! Pure transforms from domain values to figure descriptions. They trust
//! their inputs; the UI widgets turn the figures into terminal cells.

mod candlestick;
mod gauge;

pub use candlestick::{Candle, CandlestickFigure, candlestick_chart};
pub use gauge::{GAUGE_MAX, GaugeBand, GaugeFigure, normalize, sentiment_gauge};
