//! Position text parsing and serialization for [`Board`].
//!
//! Rows are listed top to bottom and separated by `/`. `X` is a piece of
//! [`Player::One`], `O` a piece of [`Player::Two`], and a digit stands for
//! that many empty cells: `7/7/7/7/7/3X3` is a single piece in the center.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, COLUMNS, ROWS};
use crate::error::PositionError;
use crate::player::Player;

/// Position text for the empty board.
pub const EMPTY_POSITION: &str = "7/7/7/7/7/7";

impl FromStr for Board {
    type Err = PositionError;

    fn from_str(text: &str) -> Result<Board, PositionError> {
        let rows: Vec<&str> = text.trim().split('/').collect();
        if rows.len() != ROWS {
            return Err(PositionError::WrongRowCount { found: rows.len() });
        }

        let mut cells = [[None; COLUMNS]; ROWS];

        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=COLUMNS as u32).contains(&digit) {
                        return Err(PositionError::InvalidChar { character: c });
                    }
                    col += digit as usize;
                } else {
                    let player =
                        Player::from_symbol(c).ok_or(PositionError::InvalidChar { character: c })?;
                    if col >= COLUMNS {
                        return Err(PositionError::BadRowLength {
                            row,
                            length: col + 1,
                        });
                    }
                    cells[row][col] = Some(player);
                    col += 1;
                }
            }

            if col != COLUMNS {
                return Err(PositionError::BadRowLength { row, length: col });
            }
        }

        // Every piece above the bottom row must rest on another piece
        for row in 0..ROWS - 1 {
            for col in 0..COLUMNS {
                if cells[row][col].is_some() && cells[row + 1][col].is_none() {
                    return Err(PositionError::FloatingPiece { row, col });
                }
            }
        }

        Ok(Board::from_cells(cells))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            let mut empty_count = 0u8;

            for col in 0..COLUMNS {
                match self.player_at(row, col) {
                    Some(player) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", player.symbol())?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }

            if row + 1 < ROWS {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
