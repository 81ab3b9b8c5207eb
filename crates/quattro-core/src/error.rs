//! Error types for position parsing and board operations.

use std::fmt;

/// Errors that occur when parsing position text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// The text does not have exactly 6 `/`-separated rows.
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 7 cells.
    BadRowLength {
        /// Zero-based row index (0 = top row).
        row: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in a row.
    InvalidChar {
        /// The invalid character.
        character: char,
    },
    /// A piece sits above an empty cell in the same column.
    FloatingPiece {
        /// Row of the unsupported piece.
        row: usize,
        /// Column of the unsupported piece.
        col: usize,
    },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::WrongRowCount { found } => {
                write!(f, "expected 6 rows, found {found}")
            }
            PositionError::BadRowLength { row, length } => {
                write!(f, "row {row} describes {length} cells, expected 7")
            }
            PositionError::InvalidChar { character } => {
                write!(f, "invalid cell character: '{character}'")
            }
            PositionError::FloatingPiece { row, col } => {
                write!(f, "piece at row {row}, column {col} has an empty cell below it")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Errors from checked board operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A player identifier other than 1 or 2.
    #[error("invalid player identifier {id}, expected 1 or 2")]
    InvalidPlayer {
        /// The rejected identifier.
        id: u8,
    },
    /// A column index outside the board.
    #[error("column {col} is out of range")]
    ColumnOutOfRange {
        /// The rejected column.
        col: usize,
    },
    /// The column has no empty cell left.
    #[error("column {col} is full")]
    ColumnFull {
        /// The full column.
        col: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, PositionError};

    #[test]
    fn position_error_display() {
        let err = PositionError::WrongRowCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 6 rows, found 4");
    }

    #[test]
    fn floating_piece_display() {
        let err = PositionError::FloatingPiece { row: 2, col: 5 };
        assert_eq!(
            format!("{err}"),
            "piece at row 2, column 5 has an empty cell below it"
        );
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::ColumnFull { col: 3 };
        assert_eq!(format!("{err}"), "column 3 is full");
        let err = BoardError::InvalidPlayer { id: 7 };
        assert_eq!(format!("{err}"), "invalid player identifier 7, expected 1 or 2");
    }
}
