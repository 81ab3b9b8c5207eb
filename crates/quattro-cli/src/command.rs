//! Human input parsing.

use quattro_core::COLUMNS;

use crate::error::CliError;

/// A parsed line of human input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drop a piece into this column (0-based).
    Drop(usize),
    /// Leave the game.
    Quit,
}

/// Parse a single line of human input into a [`Command`].
///
/// Columns are entered 1 to 7; `exit` and `quit` leave the game.
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let token = line.trim();

    if token.eq_ignore_ascii_case("exit") || token.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    match token.parse::<usize>() {
        Ok(n) if (1..=COLUMNS).contains(&n) => Ok(Command::Drop(n - 1)),
        _ => Err(CliError::InvalidColumn {
            value: token.to_string(),
        }),
    }
}
