//! Title bar, refresh strip and footer.

use chrono::{DateTime, Local};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::helpers::spinner_frame;
use super::theme::{COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::app::App;
use crate::input::Keybindings;

pub const TITLE: &str = "Futurama Characters";
pub const REFRESHING_TEXT: &str = "Actualizando...";

/// Rows taken by the header (title line plus bottom border)
pub const HEADER_HEIGHT: u16 = 2;

/// "50 de 87 personajes · actualizado 12:04:31"
pub fn meta_line(
    count: usize,
    total: Option<u64>,
    loaded_at: Option<DateTime<Local>>,
) -> Option<String> {
    let loaded_at = loaded_at?;
    let count = match total {
        Some(total) if total as usize != count => format!("{} de {} personajes", count, total),
        _ if count == 1 => "1 personaje".to_string(),
        _ => format!("{} personajes", count),
    };
    Some(format!(
        "{} · actualizado {}",
        count,
        loaded_at.format("%H:%M:%S")
    ))
}

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Paragraph::new(Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, inner);

    if let Some(meta) = meta_line(app.screen.items().len(), app.page_total, app.last_loaded_at) {
        let meta = Paragraph::new(Line::styled(meta, Style::default().fg(COLOR_DIM)))
            .alignment(Alignment::Right);
        frame.render_widget(meta, inner);
    }
}

/// Spinner row shown while a pull-to-refresh gesture is pending.
pub fn render_refresh_strip(frame: &mut Frame, area: Rect, tick_count: u64) {
    let line = Line::from(vec![
        Span::styled(spinner_frame(tick_count), Style::default().fg(COLOR_ACTIVE)),
        Span::raw(" "),
        Span::styled(REFRESHING_TEXT, Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

pub fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Line::styled(
        Keybindings::hints(),
        Style::default().fg(COLOR_DIM),
    ));
    frame.render_widget(hints, area);
}
