//! `--version` and `--help` output.

use crate::config::{ENV_API_URL, ENV_LOG, ENV_TIMEOUT_SECS};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("futurama-tui {}", VERSION)
}

pub fn usage_text() -> String {
    format!(
        "{}
Browse Futurama characters in the terminal.

Usage: futurama-tui [OPTIONS]

Options:
  -p, --print    Fetch once and print the list as plain text
  -h, --help     Print this help
  -V, --version  Print version

Environment:
  {:<22} API origin (default https://futuramaapi.com)
  {:<22} Request timeout in seconds (default 15)
  {:<22} Log file prefix; logging is off when unset
  {:<22} Log filter (default info)
",
        version_text(),
        ENV_API_URL,
        ENV_TIMEOUT_SECS,
        ENV_LOG,
        "RUST_LOG"
    )
}
