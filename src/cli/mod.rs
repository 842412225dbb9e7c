//! Command-line entry points that run before (or instead of) the TUI.
//!
//! ```ignore
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command) {
//!     return result;
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{usage_text, version_text, VERSION};

use std::io::Write;

use color_eyre::{eyre::eyre, Result};

use crate::app::App;
use crate::state::ScreenState;
use crate::ui::render_plain;

/// Exit code of `--print` when the fetch failed
pub const EXIT_FETCH_FAILED: i32 = 1;

/// Run the commands that need no runtime.
///
/// Returns `None` for [`CliCommand::Print`] and [`CliCommand::RunTui`], which
/// `main` drives itself.
pub fn run_cli_command(command: CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_text());
            Some(Ok(()))
        }
        CliCommand::Help => {
            print!("{}", usage_text());
            Some(Ok(()))
        }
        CliCommand::Print | CliCommand::RunTui => None,
    }
}

/// Mount `app`, wait for its fetch to settle and write the screen as plain
/// text. Returns the process exit code: 0 for a list (even empty), 1 for the
/// error state.
pub async fn print_once<W: Write>(app: &mut App, out: &mut W) -> Result<i32> {
    let mut rx = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("message receiver already taken"))?;

    app.mount();
    while app.screen.is_loading() {
        match rx.recv().await {
            Some(msg) => app.handle_message(msg),
            None => break,
        }
    }

    let state = app.screen_state();
    write!(out, "{}", render_plain(&state))?;
    out.flush()?;

    Ok(match state {
        ScreenState::Error(_) => EXIT_FETCH_FAILED,
        _ => 0,
    })
}
