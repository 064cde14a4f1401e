//! Company selector sidebar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::state::Store;

/// Single-select list of the tracked companies.
pub struct CompanyList;

impl CompanyList {
    /// Render the company list.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let palette = &store.app.palette;

        let items: Vec<ListItem> = store
            .companies
            .companies()
            .iter()
            .map(|company| {
                ListItem::new(Line::from(vec![
                    Span::raw(company.name),
                    Span::styled(
                        format!(" {}", company.ticker),
                        Style::default().fg(palette.muted),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Choisissez une entreprise ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent)),
            )
            .highlight_style(
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(Some(store.companies.selected_index));

        frame.render_stateful_widget(list, area, &mut state);
    }
}
