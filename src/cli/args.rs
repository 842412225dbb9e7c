//! Command-line argument parsing.

/// What the binary should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Print usage and exit
    Help,
    /// Fetch once and print the screen as plain text
    Print,
    /// Run the interactive screen (default)
    RunTui,
}

/// Parse arguments, skipping the program name. The first recognized flag
/// wins; unknown arguments are ignored.
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--print" | "-p" => return CliCommand::Print,
            _ => {}
        }
    }
    CliCommand::RunTui
}
