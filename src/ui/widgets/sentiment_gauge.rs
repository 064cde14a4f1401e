//! Sentiment gauge panel.
//!
//! Draws the three colored bands of the dial as a strip, a marker at the
//! threshold, and a filled bar for the gauge value.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget, Wrap},
};

use crate::chart::{GAUGE_MAX, GaugeBand, GaugeFigure};
use crate::config::Palette;
use crate::dashboard::SentimentPanel;

pub const NOTHING_TO_ANALYZE: &str = "Aucun sentiment à analyser pour le moment.";
pub const NO_NEWS: &str = "Aucune actualité trouvée pour cette entreprise.";

/// Sentiment panel widget.
pub struct SentimentGaugeWidget<'a> {
    panel: &'a SentimentPanel,
    palette: &'a Palette,
}

impl<'a> SentimentGaugeWidget<'a> {
    pub fn new(panel: &'a SentimentPanel, palette: &'a Palette) -> Self {
        Self { panel, palette }
    }

    fn band_color(&self, band: GaugeBand) -> Color {
        match band {
            GaugeBand::Red => self.palette.negative,
            GaugeBand::Yellow => self.palette.neutral,
            GaugeBand::Green => self.palette.positive,
        }
    }

    /// Column of a gauge value on a strip `width` cells wide.
    fn value_to_x(value: f64, width: u16) -> u16 {
        if width <= 1 {
            return 0;
        }
        let frac = (value / GAUGE_MAX).clamp(0.0, 1.0);
        (frac * (width - 1) as f64).round() as u16
    }

    fn render_placeholder(&self, message: &str, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Sentiment ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border));

        Paragraph::new(Line::from(Span::styled(
            message,
            Style::default()
                .fg(self.palette.muted)
                .add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block)
        .render(area, buf);
    }

    fn render_gauge(&self, figure: &GaugeFigure, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", figure.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.accent));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height < 4 {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Score
                Constraint::Length(1), // Bands
                Constraint::Length(1), // Threshold marker
                Constraint::Min(1),    // Value bar
            ])
            .split(inner);

        let band_color = self.band_color(figure.band);
        Paragraph::new(Line::from(vec![
            Span::styled("Score moyen ", Style::default().fg(self.palette.muted)),
            Span::styled(
                format!("{:+.2}", figure.score),
                Style::default().fg(band_color).add_modifier(Modifier::BOLD),
            ),
        ]))
        .render(rows[0], buf);

        let strip = rows[1];
        for offset in 0..strip.width {
            let value = if strip.width > 1 {
                offset as f64 / (strip.width - 1) as f64 * GAUGE_MAX
            } else {
                0.0
            };
            let color = self.band_color(GaugeBand::for_value(value));
            buf.set_string(strip.x + offset, strip.y, "█", Style::default().fg(color));
        }

        let marker = rows[2];
        let marker_x = marker.x + Self::value_to_x(figure.threshold, marker.width);
        buf.set_string(
            marker_x,
            marker.y,
            "▲",
            Style::default().add_modifier(Modifier::BOLD),
        );

        Gauge::default()
            .gauge_style(Style::default().fg(band_color))
            .ratio((figure.value / GAUGE_MAX).clamp(0.0, 1.0))
            .label(format!("{:.0}/{:.0}", figure.value, GAUGE_MAX))
            .render(rows[3], buf);
    }
}

impl Widget for SentimentGaugeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.panel {
            SentimentPanel::Gauge(figure) => self.render_gauge(figure, area, buf),
            SentimentPanel::NothingToAnalyze => self.render_placeholder(NOTHING_TO_ANALYZE, area, buf),
            SentimentPanel::NoNews => self.render_placeholder(NO_NEWS, area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::sentiment_gauge;

    fn content(buf: &Buffer) -> String {
        let area = buf.area;
        let mut content = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                content.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            content.push('\n');
        }
        content
    }

    fn draw(panel: &SentimentPanel, area: Rect) -> Buffer {
        let palette = Palette::default();
        let mut buf = Buffer::empty(area);
        SentimentGaugeWidget::new(panel, &palette).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_gauge_shows_title_and_value() {
        let panel = SentimentPanel::Gauge(sentiment_gauge(0.9, "Orange"));
        let buf = draw(&panel, Rect::new(0, 0, 50, 10));
        let text = content(&buf);
        assert!(text.contains("Sentiment pour Orange"));
        assert!(text.contains("95/100"));
        assert!(text.contains("+0.90"));
    }

    #[test]
    fn test_marker_sits_on_threshold() {
        let panel = SentimentPanel::Gauge(sentiment_gauge(0.0, "AXA"));
        let area = Rect::new(0, 0, 23, 10);
        let buf = draw(&panel, area);
        // Inner strip is 21 cells wide starting at x=1, so 50 lands on column 11.
        assert_eq!(buf.cell((11, 3)).unwrap().symbol(), "▲");
    }

    #[test]
    fn test_band_strip_colors() {
        let palette = Palette::default();
        let panel = SentimentPanel::Gauge(sentiment_gauge(0.0, "AXA"));
        let area = Rect::new(0, 0, 23, 10);
        let buf = draw(&panel, area);
        assert_eq!(buf.cell((1, 2)).unwrap().fg, palette.negative);
        assert_eq!(buf.cell((11, 2)).unwrap().fg, palette.neutral);
        assert_eq!(buf.cell((21, 2)).unwrap().fg, palette.positive);
    }

    #[test]
    fn test_placeholders() {
        let buf = draw(&SentimentPanel::NothingToAnalyze, Rect::new(0, 0, 60, 6));
        assert!(content(&buf).contains(NOTHING_TO_ANALYZE));

        let buf = draw(&SentimentPanel::NoNews, Rect::new(0, 0, 60, 6));
        assert!(content(&buf).contains(NO_NEWS));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let panel = SentimentPanel::Gauge(sentiment_gauge(-1.0, "Danone"));
        draw(&panel, Rect::new(0, 0, 3, 3));
    }
}
