//! Input handling: terminal key and mouse events to screen commands.

pub mod keybindings;

pub use keybindings::{Command, KeyCombo, Keybindings};

use crossterm::event::{MouseEvent, MouseEventKind};

/// Mouse wheel direction, the terminal's stand-in for a swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    Up,
    Down,
}

/// Map a mouse event to a wheel scroll. Clicks and drags are ignored.
pub fn scroll_from_mouse(event: &MouseEvent) -> Option<Scroll> {
    match event.kind {
        MouseEventKind::ScrollUp => Some(Scroll::Up),
        MouseEventKind::ScrollDown => Some(Scroll::Down),
        _ => None,
    }
}
