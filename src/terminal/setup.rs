//! Entering and leaving the alternate-screen TUI mode.

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::panic;

/// Raw mode, alternate screen and mouse capture (the scroll wheel drives
/// both list scrolling and pull-to-refresh).
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(writer, EnterAlternateScreen, EnableMouseCapture, Hide)
}

/// Undo [`enter_tui_mode`]. Never fails; safe to call more than once.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen);

    // Terminals that negotiated the kitty keyboard protocol keep it after
    // leaving the alternate screen unless reset explicitly
    let _ = write!(writer, "\x1b[=0u");
    let _ = execute!(writer, Show);
    let _ = writer.flush();
}

/// Restore stdout from any state, ignoring errors.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

/// Chain a panic hook that restores the terminal before the previous hook
/// prints the report.
pub fn setup_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        previous(info);
    }));
}
