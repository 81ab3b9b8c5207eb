//! Cell probes along one orientation from an anchor.

use quattro_core::{Board, Cell, Direction, Player};

/// A line through the board: an anchor cell plus an orientation.
///
/// Position `k` is the cell `k` steps from the anchor; negative `k` walks
/// backward. Off-board positions are neither empty nor owned by anyone.
#[derive(Clone, Copy)]
pub(crate) struct Ray<'a> {
    board: &'a Board,
    row: isize,
    col: isize,
    dir: Direction,
}

impl<'a> Ray<'a> {
    #[inline]
    pub(crate) fn new(board: &'a Board, row: usize, col: usize, dir: Direction) -> Self {
        Self {
            board,
            row: row as isize,
            col: col as isize,
            dir,
        }
    }

    #[inline]
    pub(crate) fn dir(&self) -> Direction {
        self.dir
    }

    #[inline]
    fn at(&self, k: isize) -> Cell {
        let (r, c) = self.dir.offset(self.row, self.col, k);
        self.board.cell(r, c)
    }

    /// Cell `k` holds a piece of `player`.
    #[inline]
    pub(crate) fn is(&self, k: isize, player: Player) -> bool {
        self.at(k).is(player)
    }

    /// Cell `k` is on the board and empty.
    #[inline]
    pub(crate) fn is_empty(&self, k: isize) -> bool {
        self.at(k).is_empty()
    }

    /// A piece dropped now would land on cell `k`.
    #[inline]
    pub(crate) fn lands(&self, k: isize) -> bool {
        let (r, c) = self.dir.offset(self.row, self.col, k);
        self.board.is_landing(r, c)
    }

    /// Cells `0..len` all hold pieces of `player`.
    #[inline]
    pub(crate) fn is_run(&self, len: isize, player: Player) -> bool {
        (0..len).all(|k| self.is(k, player))
    }
}
