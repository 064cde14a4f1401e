//! Headline table widget.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::config::Palette;
use crate::dashboard::{RowTint, ScoredHeadline};

/// Scrollable table of headlines with a tinted sentiment column.
pub struct NewsTable;

impl NewsTable {
    /// Render the table starting at row `offset`.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        headlines: &[ScoredHeadline],
        offset: usize,
        palette: &Palette,
    ) {
        let header_cells = ["Titre", "Publié", "Sentiment", "Lien"].iter().map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )
        });
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows = headlines.iter().skip(offset).map(|headline| {
            let tint = tint_color(headline.tint, palette);
            let cells = vec![
                Cell::from(headline.item.title.clone()),
                Cell::from(headline.item.published_display())
                    .style(Style::default().fg(palette.muted)),
                Cell::from(format!("{:+.2}", headline.score))
                    .style(Style::default().bg(tint).fg(Color::Black)),
                Cell::from(headline.item.link.clone()).style(
                    Style::default()
                        .fg(palette.muted)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ];
            Row::new(cells).height(1)
        });

        let title = if offset > 0 {
            format!(" Actualités ({}) ↑{} ", headlines.len(), offset)
        } else {
            format!(" Actualités ({}) ", headlines.len())
        };

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(55),
                Constraint::Length(11),
                Constraint::Length(9),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        );

        frame.render_widget(table, area);
    }
}

/// Palette color of a row tint.
pub fn tint_color(tint: RowTint, palette: &Palette) -> Color {
    match tint {
        RowTint::Positive => palette.positive,
        RowTint::Negative => palette.negative,
        RowTint::Neutral => palette.neutral,
    }
}
