//! The game board: a 6x7 grid filled by gravity.

use std::fmt;

use tracing::trace;

use crate::direction::Direction;
use crate::error::BoardError;
use crate::move_list::MoveList;
use crate::player::Player;

/// Number of rows. Row 0 is the top row.
pub const ROWS: usize = 6;

/// Number of columns.
pub const COLUMNS: usize = 7;

/// Index of the center column.
pub const CENTER_COLUMN: usize = COLUMNS / 2;

/// Number of pieces in a winning line.
pub const CONNECT: usize = 4;

/// The contents of a cell addressed with possibly off-board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Outside the grid. Never equal to a player and never empty.
    OffBoard,
    /// Inside the grid, no piece.
    Empty,
    /// Inside the grid, holding a piece.
    Occupied(Player),
}

impl Cell {
    /// Return `true` if the cell holds a piece of `player`.
    #[inline]
    pub fn is(self, player: Player) -> bool {
        self == Cell::Occupied(player)
    }

    /// Return `true` if the cell is on the board and empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Complete game state: which player occupies each cell.
///
/// Columns always fill from the bottom row upward. A `Board` is a plain
/// value, so every copy is independent of the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Indexed `[row][col]`, row 0 at the top.
    cells: [[Option<Player>; COLUMNS]; ROWS],
}

impl Board {
    /// Return an empty board.
    pub const fn new() -> Board {
        Board {
            cells: [[None; COLUMNS]; ROWS],
        }
    }

    /// Construct a board from raw cells. Used by position parsing, which
    /// checks the gravity invariant first.
    pub(crate) fn from_cells(cells: [[Option<Player>; COLUMNS]; ROWS]) -> Board {
        Board { cells }
    }

    /// Return the player occupying `(row, col)`, if any.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    #[inline]
    pub fn player_at(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row][col]
    }

    /// Probe a cell that may lie outside the grid.
    #[inline]
    pub fn cell(&self, row: isize, col: isize) -> Cell {
        if row < 0 || col < 0 || row >= ROWS as isize || col >= COLUMNS as isize {
            return Cell::OffBoard;
        }
        match self.cells[row as usize][col as usize] {
            Some(player) => Cell::Occupied(player),
            None => Cell::Empty,
        }
    }

    /// Return `true` if `col` is on the board and its top cell is empty.
    #[inline]
    pub fn is_legal_column(&self, col: usize) -> bool {
        col < COLUMNS && self.cells[0][col].is_none()
    }

    /// Return the row a piece dropped into `col` would land in.
    ///
    /// Scans from the bottom row upward. Returns `None` when the column is
    /// full or out of range.
    #[inline]
    pub fn drop_row(&self, col: usize) -> Option<usize> {
        if col >= COLUMNS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_none())
    }

    /// Return `true` if a piece dropped now would land exactly on `(row, col)`.
    #[inline]
    pub fn is_landing(&self, row: isize, col: isize) -> bool {
        if col < 0 || col >= COLUMNS as isize {
            return false;
        }
        self.drop_row(col as usize).is_some_and(|r| r as isize == row)
    }

    /// Write `player` into `(row, col)`.
    ///
    /// `row` must come from [`drop_row`](Self::drop_row) for the same column
    /// on this same state. The precondition is only checked in debug builds.
    #[inline]
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        debug_assert_eq!(
            self.drop_row(col),
            Some(row),
            "place at ({row}, {col}) does not match the column's drop row"
        );
        self.cells[row][col] = Some(player);
    }

    /// Drop a piece for `player` into `col`, returning the landing row.
    pub fn play(&mut self, col: usize, player: Player) -> Result<usize, BoardError> {
        if col >= COLUMNS {
            return Err(BoardError::ColumnOutOfRange { col });
        }
        let row = self.drop_row(col).ok_or(BoardError::ColumnFull { col })?;
        self.place(row, col, player);
        trace!(row, col, player = player.id(), "piece dropped");
        Ok(row)
    }

    /// Return the columns that can still take a piece, ascending.
    pub fn valid_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for col in 0..COLUMNS {
            if self.cells[0][col].is_none() {
                moves.push(col);
            }
        }
        moves
    }

    /// Return `true` if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Return the number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Return `true` if the `len` cells starting at the anchor and running
    /// along `dir` all belong to `player`.
    #[inline]
    pub fn is_run(&self, row: isize, col: isize, dir: Direction, len: usize, player: Player) -> bool {
        (0..len as isize).all(|k| {
            let (r, c) = dir.offset(row, col, k);
            self.cell(r, c).is(player)
        })
    }

    /// Return `true` if `player` has four in a row anywhere.
    pub fn is_won_for(&self, player: Player) -> bool {
        for row in 0..ROWS as isize {
            for col in 0..COLUMNS as isize {
                if Direction::ALL
                    .into_iter()
                    .any(|dir| self.is_run(row, col, dir, CONNECT, player))
                {
                    return true;
                }
            }
        }
        false
    }

    /// Return the winner, if either player has four in a row.
    pub fn winner(&self) -> Option<Player> {
        Player::ALL.into_iter().find(|&p| self.is_won_for(p))
    }

    /// Return `true` if the game is over: board full or either side has won.
    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.is_won_for(Player::One) || self.is_won_for(Player::Two)
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as a grid with column labels.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0..ROWS {
            for col in 0..COLUMNS {
                let c = board.player_at(row, col).map_or('.', Player::symbol);
                if col + 1 < COLUMNS {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "=============")?;
        write!(f, "1 2 3 4 5 6 7")
    }
}
