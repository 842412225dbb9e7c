//! Render selector: exactly one view fragment per screen state.
//!
//! [`select_fragment`] is pure; the `render_*` functions draw the non-list
//! fragments centered in the body area.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

use super::helpers::{center_vertically, spinner_frame};
use super::theme::{COLOR_ACTIVE, COLOR_ERROR};
use crate::models::Character;
use crate::state::ScreenState;

pub const LOADING_TEXT: &str = "Cargando personajes...";
pub const EMPTY_TEXT: &str = "No hay personajes para mostrar 📭";

/// The view fragment shown in the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fragment<'a> {
    LoadingIndicator,
    ErrorMessage(&'a str),
    EmptyMessage,
    CharacterList(&'a [Character]),
}

/// Pick the fragment for a state. Loading > Error > Empty > Populated.
pub fn select_fragment<'a>(state: &ScreenState<'a>) -> Fragment<'a> {
    match *state {
        ScreenState::Loading => Fragment::LoadingIndicator,
        ScreenState::Error(message) => Fragment::ErrorMessage(message),
        ScreenState::Empty => Fragment::EmptyMessage,
        ScreenState::Populated(items) => Fragment::CharacterList(items),
    }
}

pub fn render_loading(frame: &mut Frame, area: Rect, tick_count: u64) {
    let line = Line::from(vec![
        Span::styled(spinner_frame(tick_count), Style::default().fg(COLOR_ACTIVE)),
        Span::raw(" "),
        Span::raw(LOADING_TEXT),
    ]);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, center_vertically(area, 1));
}

pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let text = Text::from(Line::styled(
        message.to_string(),
        Style::default()
            .fg(COLOR_ERROR)
            .add_modifier(Modifier::BOLD),
    ));
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, center_vertically(area, 1));
}

pub fn render_empty(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(EMPTY_TEXT)).alignment(Alignment::Center);
    frame.render_widget(paragraph, center_vertically(area, 1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FETCH_FAILED_MESSAGE;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_contains(terminal: &Terminal<TestBackend>, needle: &str) -> bool {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height).any(|y| {
            let line: String = (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.contains(needle)
        })
    }

    fn fry() -> Character {
        Character {
            id: 1,
            name: "Fry".into(),
            gender: "Male".into(),
            status: "Alive".into(),
            species: "Human".into(),
            image: "http://x/1.png".into(),
        }
    }

    #[test]
    fn test_select_fragment_priority() {
        let items = vec![fry()];
        assert_eq!(
            select_fragment(&ScreenState::derive(true, Some("x"), &items)),
            Fragment::LoadingIndicator
        );
        assert_eq!(
            select_fragment(&ScreenState::derive(false, Some("x"), &items)),
            Fragment::ErrorMessage("x")
        );
        assert_eq!(
            select_fragment(&ScreenState::derive(false, None, &[])),
            Fragment::EmptyMessage
        );
        assert!(matches!(
            select_fragment(&ScreenState::derive(false, None, &items)),
            Fragment::CharacterList(list) if list.len() == 1
        ));
    }

    #[test]
    fn test_render_loading() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|frame| render_loading(frame, frame.area(), 0))
            .unwrap();
        assert!(buffer_contains(&terminal, "Cargando personajes..."));
    }

    #[test]
    fn test_render_error_is_red() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|frame| render_error(frame, frame.area(), FETCH_FAILED_MESSAGE))
            .unwrap();

        assert!(buffer_contains(&terminal, "No se pudieron cargar los personajes"));
        let buffer = terminal.backend().buffer();
        let red_cells = buffer
            .content()
            .iter()
            .filter(|cell| cell.fg == COLOR_ERROR && cell.symbol() != " ")
            .count();
        assert!(red_cells > 0);
    }

    #[test]
    fn test_render_empty() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal.draw(|frame| render_empty(frame, frame.area())).unwrap();
        assert!(buffer_contains(&terminal, "No hay personajes para mostrar"));
    }
}
