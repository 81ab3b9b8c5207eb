//! Center column occupancy.

use quattro_core::{Board, Player, CENTER_COLUMN};

/// Bonus per piece in the center column.
pub const CENTER: i32 = 2;

/// Return `true` if the anchor is a center-column cell held by `player`.
#[inline]
pub fn center_at(board: &Board, row: usize, col: usize, player: Player) -> bool {
    col == CENTER_COLUMN && board.player_at(row, col) == Some(player)
}
