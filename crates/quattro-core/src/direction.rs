//! The four line orientations a connection can run in.

/// A line orientation, stepped from an anchor cell.
///
/// Row 0 is the top of the board, so "up" is a negative row step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Bottom to top within a column.
    Vertical,
    /// Bottom-left to top-right.
    DiagonalUp,
    /// Top-left to bottom-right.
    DiagonalDown,
}

impl Direction {
    /// All orientations.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// Return the `(row, col)` step for one cell along this orientation.
    #[inline]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (-1, 0),
            Direction::DiagonalUp => (-1, 1),
            Direction::DiagonalDown => (1, 1),
        }
    }

    /// Return the cell `k` steps from `(row, col)`. `k` may be negative.
    #[inline]
    pub const fn offset(self, row: isize, col: isize, k: isize) -> (isize, isize) {
        let (dr, dc) = self.step();
        (row + dr * k, col + dc * k)
    }
}
