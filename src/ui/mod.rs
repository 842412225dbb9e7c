//! UI rendering for the character screen.
//!
//! Layout, top to bottom:
//! - Header: title, item count and last update time
//! - Refresh strip (only while a pull-to-refresh is pending)
//! - Body: the fragment picked by [`select_fragment`]
//! - Footer: key hints

mod character_list;
mod chrome;
mod helpers;
mod plain;
mod states;
mod theme;

pub use character_list::{CharacterEntry, LINES_PER_ENTRY};
pub use chrome::{meta_line, REFRESHING_TEXT, TITLE};
pub use plain::render_plain;
pub use states::{select_fragment, Fragment, EMPTY_TEXT, LOADING_TEXT};
pub use theme::COLOR_ERROR;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;
use character_list::render_character_list;
use chrome::{render_footer, render_header, render_refresh_strip, HEADER_HEIGHT};
use states::{render_empty, render_error, render_loading};

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let refreshing = app.refresh_gesture.is_active();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(if refreshing { 1 } else { 0 }),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    if refreshing {
        render_refresh_strip(frame, chunks[1], app.tick_count);
    }
    render_body(frame, chunks[2], app);
    render_footer(frame, chunks[3]);
}

fn render_body(frame: &mut Frame, area: Rect, app: &mut App) {
    app.page_rows = (area.height / LINES_PER_ENTRY).max(1) as usize;

    let App {
        screen,
        list_state,
        tick_count,
        ..
    } = app;

    match select_fragment(&screen.state()) {
        Fragment::LoadingIndicator => render_loading(frame, area, *tick_count),
        Fragment::ErrorMessage(message) => render_error(frame, area, message),
        Fragment::EmptyMessage => render_empty(frame, area),
        Fragment::CharacterList(characters) => {
            render_character_list(frame, area, characters, list_state)
        }
    }
}
