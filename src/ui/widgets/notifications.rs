//! Notification rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::config::Palette;
use crate::state::{Notification, NotificationLevel};

/// Shown in place of the dashboard when no quotes came back.
pub const UNAVAILABLE_NOTICE: &str =
    "Impossible de charger les données boursières. Veuillez réessayer.";

/// Render a notification popup.
pub fn render_notification(
    frame: &mut Frame,
    area: Rect,
    notification: &Notification,
    palette: &Palette,
) {
    frame.render_widget(Clear, area);

    let (border_color, icon) = match notification.level {
        NotificationLevel::Info => (palette.accent, "ℹ"),
        NotificationLevel::Warning => (palette.neutral, "⚠"),
        NotificationLevel::Error => (palette.negative, "✗"),
    };

    let content = Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().fg(border_color)),
        Span::raw(&notification.message),
    ]);

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

/// Render an error popup.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str, palette: &Palette) {
    frame.render_widget(Clear, area);

    let content = Line::from(vec![
        Span::styled(
            "✗ Erreur : ",
            Style::default()
                .fg(palette.negative)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(error),
    ]);

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.negative)),
        )
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

/// Render the generic failure notice over the whole dashboard area.
pub fn render_unavailable(frame: &mut Frame, area: Rect, palette: &Palette) {
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            UNAVAILABLE_NOTICE,
            Style::default()
                .fg(palette.negative)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.negative)),
    );

    frame.render_widget(paragraph, area);
}
