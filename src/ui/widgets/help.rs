//! Help panel widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::super::layout::centered_rect;
use crate::config::{KeyBindings, Palette};

/// Help panel showing keybindings.
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel.
    pub fn render(frame: &mut Frame, area: Rect, keys: &KeyBindings, palette: &Palette) {
        let popup_area = centered_rect(60, 70, area);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let section = |title: &'static str| {
            Line::from(vec![Span::styled(
                title,
                Style::default()
                    .fg(palette.neutral)
                    .add_modifier(Modifier::BOLD),
            )])
        };
        let entry = |key: String, description: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {:<10}", key), Style::default().fg(palette.accent)),
                Span::raw(description),
            ])
        };

        let help_text = vec![
            section("Entreprises"),
            Line::from(""),
            entry(format!("{}/↓", keys.down), "Entreprise suivante"),
            entry(format!("{}/↑", keys.up), "Entreprise précédente"),
            entry("Home/End".to_string(), "Première / dernière"),
            entry("1-9, 0".to_string(), "Sélection directe"),
            Line::from(""),
            section("Actualités"),
            Line::from(""),
            entry("PgDn/PgUp".to_string(), "Faire défiler les titres"),
            entry("molette".to_string(), "Défiler ligne par ligne"),
            Line::from(""),
            section("Actions"),
            Line::from(""),
            entry(keys.refresh.clone(), "Actualiser"),
            entry(keys.back.clone(), "Fermer le message"),
            entry(keys.help.clone(), "Afficher / masquer l'aide"),
            entry(keys.quit.clone(), "Quitter"),
        ];

        let help = Paragraph::new(help_text).block(
            Block::default()
                .title(" Aide ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.neutral)),
        );

        frame.render_widget(help, popup_area);
    }
}
