//! Populated fragment: one entry per character.
//!
//! Each entry is an avatar badge (the initial of the alt text, colored by id),
//! the name as a bold heading, then the gender and status lines.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{HighlightSpacing, List, ListItem, ListState},
    Frame,
};

use super::helpers::{initial, truncate_to_width};
use super::theme::{avatar_color, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED_BG};
use crate::models::Character;

/// Rows per entry: heading, gender, status, spacer
pub const LINES_PER_ENTRY: u16 = 4;

const HIGHLIGHT_SYMBOL: &str = "▌ ";
const INDENT: &str = "    ";

pub fn gender_line(character: &Character) -> String {
    format!("Género: {}", character.gender)
}

pub fn status_line(character: &Character) -> String {
    format!("Estado: {}", character.status)
}

/// View model for one list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterEntry {
    pub badge: String,
    pub badge_color: Color,
    pub heading: String,
    pub gender: String,
    pub status: String,
}

impl CharacterEntry {
    pub fn new(character: &Character) -> Self {
        Self {
            badge: initial(character.avatar_alt()),
            badge_color: avatar_color(character.id),
            heading: character.name.clone(),
            gender: gender_line(character),
            status: status_line(character),
        }
    }

    /// Lines of the entry, fit into `width` columns.
    pub fn to_lines(&self, width: usize) -> Vec<Line<'static>> {
        let badge = format!(" {} ", self.badge);
        let heading_width = width.saturating_sub(badge.chars().count() + 1);
        let text_width = width.saturating_sub(INDENT.len());

        vec![
            Line::from(vec![
                Span::styled(
                    badge,
                    Style::default()
                        .fg(Color::Black)
                        .bg(self.badge_color)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    truncate_to_width(&self.heading, heading_width),
                    Style::default()
                        .fg(COLOR_HEADER)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw(INDENT),
                Span::styled(
                    truncate_to_width(&self.gender, text_width),
                    Style::default().fg(COLOR_DIM),
                ),
            ]),
            Line::from(vec![
                Span::raw(INDENT),
                Span::styled(
                    truncate_to_width(&self.status, text_width),
                    Style::default().fg(COLOR_DIM),
                ),
            ]),
            Line::raw(""),
        ]
    }
}

/// Render the list with the selection from `state`.
pub fn render_character_list(
    frame: &mut Frame,
    area: Rect,
    characters: &[Character],
    state: &mut ListState,
) {
    let width = (area.width as usize).saturating_sub(HIGHLIGHT_SYMBOL.chars().count());
    let items: Vec<ListItem> = characters
        .iter()
        .map(|character| ListItem::new(CharacterEntry::new(character).to_lines(width)))
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(COLOR_SELECTED_BG))
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always);

    frame.render_stateful_widget(list, area, state);
}
