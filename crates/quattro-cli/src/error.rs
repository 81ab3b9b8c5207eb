//! Driver errors.

use quattro_core::{BoardError, PositionError};

/// Errors that can occur while configuring or playing a game.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A difficulty outside `1..=5`.
    #[error("invalid difficulty: {value} (choose 1, 2, 3, 4 or 5)")]
    InvalidDifficulty {
        /// The text that failed to parse.
        value: String,
    },

    /// Human input that is neither a column nor a quit command.
    #[error("invalid column: {value} (choose 1 to 7, or exit)")]
    InvalidColumn {
        /// The text that failed to parse.
        value: String,
    },

    /// The chosen column has no empty cell.
    #[error("column {column} is full")]
    ColumnFull {
        /// The column as the player numbers it, 1 to 7.
        column: usize,
    },

    /// A command-line flag the driver does not know.
    #[error("unknown argument: {arg}")]
    UnknownArgument {
        /// The unrecognized argument.
        arg: String,
    },

    /// A flag given without its value.
    #[error("missing value for {flag}")]
    MissingValue {
        /// The flag, e.g. `--depth`.
        flag: &'static str,
    },

    /// Two flags that select different game modes.
    #[error("{first} cannot be combined with {second}")]
    ConflictingFlags {
        /// The mode flag given first.
        first: &'static str,
        /// The mode flag given later.
        second: &'static str,
    },

    /// A flag value that failed to parse.
    #[error("invalid value for {flag}: {value}")]
    InvalidValue {
        /// The flag, e.g. `--threads`.
        flag: &'static str,
        /// The value that failed to parse.
        value: String,
    },

    /// The `--position` text did not describe a legal board.
    #[error("invalid position: {source}")]
    BadPosition {
        /// The underlying parse error.
        #[from]
        source: PositionError,
    },

    /// A move the board rejected for a reason other than a full column.
    #[error("illegal move: {source}")]
    IllegalMove {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },

    /// An I/O error on stdin or stdout.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
