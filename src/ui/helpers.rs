//! Helper functions and constants for UI rendering

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Spinner frames for the loading indicator and the refresh strip
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Ticks per spinner frame (16 ms ticks, ~64 ms per frame)
const TICKS_PER_FRAME: u64 = 4;

pub fn spinner_frame(tick_count: u64) -> &'static str {
    SPINNER_FRAMES[((tick_count / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

/// A rect of `height` rows, vertically centered in `area`.
pub fn center_vertically(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let y_offset = area.height.saturating_sub(height) / 2;
    Rect::new(area.x, area.y + y_offset, area.width, height)
}

/// Truncate to at most `max_width` display columns, adding `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// First character of `name`, uppercased, for avatar badges.
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}
