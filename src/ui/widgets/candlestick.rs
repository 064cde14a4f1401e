//! Candlestick chart widget.
//!
//! Renders the chart using direct buffer writes:
//! - Each candle gets an equal slot of columns, drawn in the slot's center
//! - Body: block char, positive color if close >= open, negative otherwise
//! - Wicks: vertical line chars to high/low
//! - Dates along the bottom row, price labels on the left

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Widget},
};

use crate::chart::CandlestickFigure;
use crate::config::Palette;

/// Columns reserved for the price labels.
const LABEL_WIDTH: u16 = 9;

/// Candlestick chart widget.
pub struct CandlestickWidget<'a> {
    figure: &'a CandlestickFigure,
    palette: &'a Palette,
}

impl<'a> CandlestickWidget<'a> {
    pub fn new(figure: &'a CandlestickFigure, palette: &'a Palette) -> Self {
        Self { figure, palette }
    }

    /// Map a price to a Y position in the plot area (0 = top).
    fn price_to_y(price: f64, y_min: f64, y_max: f64, plot_height: u16) -> u16 {
        if (y_max - y_min).abs() < 1e-9 || plot_height == 0 {
            return 0;
        }
        let frac = (price - y_min) / (y_max - y_min);
        let y = plot_height.saturating_sub(1) as f64 * (1.0 - frac);
        y.round().max(0.0).min(plot_height.saturating_sub(1) as f64) as u16
    }
}

impl Widget for CandlestickWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.figure.title))
            .title(Line::from(format!(" {} ", self.figure.y_label)).right_aligned())
            .title_bottom(Line::from(format!(" {} ", self.figure.x_label)).centered())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.accent));

        let inner = block.inner(area);
        block.render(area, buf);

        let Some((low, high)) = self.figure.price_bounds() else {
            return;
        };

        // Add padding
        let range = high - low;
        let pad = if range > 0.0 { range * 0.05 } else { 1.0 };
        let y_lower = low - pad;
        let y_upper = high + pad;

        // Left margin for price labels, bottom row for dates
        let plot_left = inner.x + LABEL_WIDTH;
        let plot_top = inner.y;
        let plot_width = inner.width.saturating_sub(LABEL_WIDTH);
        let plot_height = inner.height.saturating_sub(1);

        if plot_width == 0 || plot_height == 0 {
            return;
        }

        let muted = Style::default().fg(self.palette.muted);
        let y_labels = [y_upper, (y_upper + y_lower) / 2.0, y_lower];
        let y_positions = [0u16, plot_height / 2, plot_height.saturating_sub(1)];
        for (value, offset) in y_labels.iter().zip(y_positions.iter()) {
            buf.set_string(inner.x, plot_top + offset, format!("{:>8.2}", value), muted);
        }

        // Keep the most recent candles when there are more than columns.
        let visible = self.figure.candles.len().min(plot_width as usize);
        let candles = &self.figure.candles[self.figure.candles.len() - visible..];
        let slot = plot_width / visible as u16;
        let date_row = plot_top + plot_height;

        for (i, candle) in candles.iter().enumerate() {
            let slot_left = plot_left + i as u16 * slot;
            let x = slot_left + slot / 2;
            if x >= inner.right() {
                break;
            }

            let color = if candle.is_up() {
                self.palette.positive
            } else {
                self.palette.negative
            };
            let style = Style::default().fg(color);

            let high_y = Self::price_to_y(candle.high, y_lower, y_upper, plot_height);
            let low_y = Self::price_to_y(candle.low, y_lower, y_upper, plot_height);
            let body_top_y =
                Self::price_to_y(candle.open.max(candle.close), y_lower, y_upper, plot_height);
            let body_bot_y =
                Self::price_to_y(candle.open.min(candle.close), y_lower, y_upper, plot_height);

            // Upper wick
            for y in high_y..body_top_y {
                buf.set_string(x, plot_top + y, "│", style);
            }

            // Body
            for y in body_top_y..=body_bot_y {
                buf.set_string(x, plot_top + y, "█", style);
            }

            // Lower wick
            for y in (body_bot_y + 1)..=low_y {
                buf.set_string(x, plot_top + y, "│", style);
            }

            let date = candle.date.format("%d/%m").to_string();
            if slot as usize >= date.len() {
                let date_x = slot_left + (slot - date.len() as u16) / 2;
                buf.set_string(date_x, date_row, &date, muted);
            }
        }
    }
}
