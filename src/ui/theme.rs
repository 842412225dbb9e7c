//! Color theme constants for the character screen

use ratatui::style::Color;

/// Title and headings
pub const COLOR_HEADER: Color = Color::White;

/// Borders and separators
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Secondary text (meta line, key hints)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Spinners
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Error state text
pub const COLOR_ERROR: Color = Color::Red;

/// Selected row background
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 34, 52);

/// Avatar badge backgrounds, picked by character id
pub const AVATAR_PALETTE: [Color; 6] = [
    Color::Rgb(0, 122, 204),
    Color::Rgb(4, 181, 117),
    Color::Rgb(196, 82, 44),
    Color::Rgb(142, 68, 173),
    Color::Rgb(202, 160, 0),
    Color::Rgb(46, 134, 171),
];

/// Badge color for a character id.
pub fn avatar_color(id: i64) -> Color {
    AVATAR_PALETTE[id.rem_euclid(AVATAR_PALETTE.len() as i64) as usize]
}
