//! Status bar widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::Store;

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let palette = &store.app.palette;

        let backend = Span::styled(
            format!(" Sentiment: {} ", store.app.backend),
            Style::default().fg(palette.neutral),
        );

        let loading = if store.app.loading {
            Span::styled(
                " Chargement... ",
                Style::default()
                    .fg(palette.neutral)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw("")
        };

        let refreshed = match store.dashboard.last_updated {
            Some(at) => Span::raw(format!(" Mis à jour {} ", at.format("%H:%M:%S"))),
            None => Span::raw(""),
        };

        let diagnostics = match store.current_dashboard() {
            Some(dashboard) if !dashboard.diagnostics.is_empty() => {
                let first = &dashboard.diagnostics[0];
                Span::styled(
                    format!(" ⚠ {} ({}) ", first, dashboard.diagnostics.len()),
                    Style::default().fg(palette.negative),
                )
            }
            _ => Span::raw(""),
        };

        let help_hint = Span::styled(" ? aide ", Style::default().fg(palette.muted));

        // Create the status line
        let left_content = vec![
            Span::styled(
                " cacpulse ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("|"),
            backend,
            Span::raw("|"),
            refreshed,
            loading,
            diagnostics,
        ];

        let status_line = Line::from(left_content);

        // Calculate padding for right-aligned help hint
        let left_len = status_line.width();
        let right_len = help_hint.width();
        let padding = (area.width as usize).saturating_sub(left_len + right_len);

        let mut full_line = status_line.spans;
        full_line.push(Span::raw(" ".repeat(padding)));
        full_line.push(help_hint);

        let paragraph =
            Paragraph::new(Line::from(full_line)).style(Style::default().bg(Color::Black));

        frame.render_widget(paragraph, area);
    }
}
