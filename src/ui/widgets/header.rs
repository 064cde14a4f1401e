//! Price header widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::config::Palette;
use crate::state::{Company, PriceHeader};

/// Current price and 24h change of the selected company.
pub struct HeaderBar;

impl HeaderBar {
    /// Render the header.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        company: &Company,
        header: &PriceHeader,
        palette: &Palette,
    ) {
        let change_color = if header.change_percent >= 0.0 {
            palette.positive
        } else {
            palette.negative
        };

        let line = Line::from(vec![
            Span::styled("Prix actuel ", Style::default().fg(palette.muted)),
            Span::styled(
                format!("€{:.2}", header.current_price),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("Variation 24h ", Style::default().fg(palette.muted)),
            Span::styled(
                format!("{:+.2}%", header.change_percent),
                Style::default()
                    .fg(change_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let paragraph = Paragraph::new(line).block(
            Block::default()
                .title(format!(" {} ({}) ", company.name, company.ticker))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );

        frame.render_widget(paragraph, area);
    }
}
