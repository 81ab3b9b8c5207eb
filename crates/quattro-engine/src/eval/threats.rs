//! Opponent threes that must be blocked on the next move.

use quattro_core::{Board, CONNECT, Direction, Player};

use crate::eval::ray::Ray;

/// Penalty for an opponent three whose missing cell is playable right now.
pub const BLOCK_NOW: i32 = -1000;

/// Window shapes checked for a single missing cell, as (orientation, gap
/// positions within the four-cell window).
///
/// Horizontally the gap may sit anywhere (`XXX_`, `XX_X`, `X_XX`, `_XXX`);
/// vertically only on top of a stack of three.
const THREAT_WINDOWS: [(Direction, &[isize]); 2] = [
    (Direction::Horizontal, &[3, 2, 1, 0]),
    (Direction::Vertical, &[3]),
];

fn gap_threat(ray: Ray<'_>, gap: isize, opponent: Player) -> bool {
    (0..CONNECT as isize).all(|k| {
        if k == gap {
            ray.is_empty(k) && ray.lands(k)
        } else {
            ray.is(k, opponent)
        }
    })
}

/// Return `true` if the opponent of `player` completes four from this anchor
/// with one drop that is playable now.
pub fn opponent_threat_at(board: &Board, row: usize, col: usize, player: Player) -> bool {
    let opponent = player.opponent();
    THREAT_WINDOWS.iter().any(|&(dir, gaps)| {
        let ray = Ray::new(board, row, col, dir);
        gaps.iter().any(|&gap| gap_threat(ray, gap, opponent))
    })
}
