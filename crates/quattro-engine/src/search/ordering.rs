//! Move ordering by one-ply static score.

use quattro_core::{Board, MoveList, Player, COLUMNS};

use crate::evaluate;

/// Remaining depth above which candidates are pre-sorted.
///
/// Sorting costs one evaluation per candidate; at shallow depth the extra
/// cutoffs do not pay for it, so moves stay in column order.
pub const ORDERING_DEPTH: u8 = 2;

/// Score the position after the agent drops into `(row, col)`.
fn one_ply_score(board: &Board, row: usize, col: usize, agent: Player) -> i32 {
    let mut child = *board;
    child.place(row, col, agent);
    evaluate(&child, agent)
}

/// Return the legal columns in search order.
///
/// Above [`ORDERING_DEPTH`] the columns are sorted by descending
/// [`one_ply_score`], always with the agent's piece dropped, even at
/// minimizing nodes. The sort is stable, so equal scores keep ascending
/// column order. Otherwise columns come out ascending.
pub fn order_moves(board: &Board, agent: Player, depth: u8) -> MoveList {
    let mut moves = board.valid_moves();
    if depth <= ORDERING_DEPTH {
        return moves;
    }

    let mut scored = [(0usize, 0i32); COLUMNS];
    for (slot, &col) in scored.iter_mut().zip(&moves) {
        let row = board.drop_row(col).expect("legal column has a drop row");
        *slot = (col, one_ply_score(board, row, col, agent));
    }
    let scored = &mut scored[..moves.len()];
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    for (dst, &(col, _)) in moves.as_mut_slice().iter_mut().zip(scored.iter()) {
        *dst = col;
    }
    moves
}
