//! Terminal lifecycle.
//!
//! [`TerminalManager`] puts the terminal into TUI mode on creation and
//! restores it when dropped. [`setup_panic_hook`] covers the panic path,
//! where the manager may never be dropped.

mod setup;

pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode, setup_panic_hook};

use color_eyre::Result;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the ratatui terminal while the screen is up.
pub struct TerminalManager {
    terminal: Tui,
    restored: bool,
}

impl TerminalManager {
    pub fn new() -> Result<Self> {
        let mut stdout = io::stdout();
        if let Err(err) = enter_tui_mode(&mut stdout) {
            leave_tui_mode(&mut stdout);
            return Err(err.into());
        }

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        tracing::debug!("Entered TUI mode");

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Restore the terminal now. Later calls and the drop are no-ops.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tui_mode(self.terminal.backend_mut());
        tracing::debug!("Left TUI mode");
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        self.restore();
    }
}
