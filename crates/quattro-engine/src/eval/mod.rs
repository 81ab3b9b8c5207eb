//! Static evaluation of non-terminal positions.
//!
//! Every cell is used as an anchor. At each anchor the pattern families in
//! [`connections`], [`threats`], and [`center`] are tested, and each family
//! that matches adds its weight once. Overlapping windows are counted again
//! from every anchor they match at.

pub mod center;
pub mod connections;
pub(crate) mod ray;
pub mod threats;

use quattro_core::{Board, Player, COLUMNS, ROWS};

use center::{CENTER, center_at};
use connections::{FOUR, OPEN_THREE, OPEN_TWO, four_at, open_three_at, open_two_at};
use threats::{BLOCK_NOW, opponent_threat_at};

/// Evaluate `board` from `player`'s point of view.
///
/// Positive scores favor `player`. The value only ranks positions; it says
/// nothing about won or lost games, which the search scores separately.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let mut score = 0;

    for row in 0..ROWS {
        for col in 0..COLUMNS {
            if four_at(board, row, col, player) {
                score += FOUR;
            }
            if opponent_threat_at(board, row, col, player) {
                score += BLOCK_NOW;
            }
            if open_three_at(board, row, col, player) {
                score += OPEN_THREE;
            }
            if open_two_at(board, row, col, player) {
                score += OPEN_TWO;
            }
            if center_at(board, row, col, player) {
                score += CENTER;
            }
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use quattro_core::{Board, Player};

    use super::evaluate;

    #[test]
    fn empty_board_is_zero() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Player::One), 0);
        assert_eq!(evaluate(&board, Player::Two), 0);
    }

    #[test]
    fn single_center_piece() {
        let board: Board = "7/7/7/7/7/3X3".parse().unwrap();
        assert_eq!(evaluate(&board, Player::One), 2);
        assert_eq!(evaluate(&board, Player::Two), 0);
    }

    #[test]
    fn single_edge_piece_scores_nothing() {
        let board: Board = "7/7/7/7/7/X6".parse().unwrap();
        assert_eq!(evaluate(&board, Player::One), 0);
    }

    #[test]
    fn horizontal_two_in_the_middle() {
        // Open two at (5, 2) plus one center piece.
        let board: Board = "7/7/7/7/7/2XX3".parse().unwrap();
        assert_eq!(evaluate(&board, Player::One), 12);
    }

    #[test]
    fn open_three_from_the_edge() {
        // Open three anchored at (5, 0), open two anchored at (5, 1).
        let board: Board = "7/7/7/7/7/XXX4".parse().unwrap();
        assert_eq!(evaluate(&board, Player::One), 60);
    }

    #[test]
    fn opponent_three_is_heavily_penalized() {
        let board: Board = "7/7/7/7/7/OOO4".parse().unwrap();
        assert_eq!(evaluate(&board, Player::One), -1000);
        assert_eq!(evaluate(&board, Player::Two), 60);
    }

    #[test]
    fn completed_four() {
        let board: Board = "7/7/7/7/7/XXXX3".parse().unwrap();
        assert_eq!(evaluate(&board, Player::One), 1062);
        // The last three of the four still has a landable gap after it.
        assert_eq!(evaluate(&board, Player::Two), -1000);
    }

    #[test]
    fn vertical_stack() {
        let board: Board = "7/7/7/3O3/3O3/3O3".parse().unwrap();
        assert_eq!(evaluate(&board, Player::Two), 66);
        assert_eq!(evaluate(&board, Player::One), -1000);
    }

    #[test]
    fn mixed_position() {
        let board: Board = "7/7/2O4/2XX3/1OXO3/XOXXO1O".parse().unwrap();
        assert_eq!(evaluate(&board, Player::One), 24);
        assert_eq!(evaluate(&board, Player::Two), 12);
    }

    #[test]
    fn cell_above_a_full_column_never_lands() {
        // The rising X three (2, 1)..(0, 3) would only land past its end,
        // above full column 4, so it is not open.
        let board: Board = "3XX2/2XOX2/1XOXO2/1OOOX2/1XOOO2/XXXOO2".parse().unwrap();
        assert_eq!(evaluate(&board, Player::One), 14);
    }
}
