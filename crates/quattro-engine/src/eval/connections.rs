//! Connections built by the evaluated player: fours, open threes, open twos.
//!
//! Each pattern is tested along every orientation from one anchor cell and
//! scores at most once per anchor, however many orientations match.

use quattro_core::{Board, CONNECT, Direction, Player};

use crate::eval::ray::Ray;

/// Bonus for a completed four-in-a-row.
pub const FOUR: i32 = 1000;

/// Bonus for three in a row with room to grow and a landable flank.
pub const OPEN_THREE: i32 = 50;

/// Bonus for two in a row with two free cells beside it and a landable flank.
pub const OPEN_TWO: i32 = 10;

/// Return `true` if four `player` pieces run from the anchor in any orientation.
pub fn four_at(board: &Board, row: usize, col: usize, player: Player) -> bool {
    Direction::ALL
        .into_iter()
        .any(|dir| Ray::new(board, row, col, dir).is_run(CONNECT as isize, player))
}

/// Cell tested for emptiness past the far end of a three.
///
/// Horizontally this is one cell beyond the adjacent flank.
const fn open_three_reach(dir: Direction) -> isize {
    match dir {
        Direction::Horizontal => 4,
        _ => 3,
    }
}

fn open_three_along(ray: Ray<'_>, player: Player) -> bool {
    ray.is_run(3, player)
        && (ray.is_empty(-1) || ray.is_empty(open_three_reach(ray.dir())))
        && (ray.lands(-1) || ray.lands(3))
}

/// Return `true` if an open three for `player` starts at the anchor.
pub fn open_three_at(board: &Board, row: usize, col: usize, player: Player) -> bool {
    Direction::ALL
        .into_iter()
        .any(|dir| open_three_along(Ray::new(board, row, col, dir), player))
}

fn open_two_along(ray: Ray<'_>, player: Player) -> bool {
    let room = (ray.is_empty(-1) && ray.is_empty(-2))
        || (ray.is_empty(-1) && ray.is_empty(2))
        || (ray.is_empty(2) && ray.is_empty(3));
    ray.is_run(2, player) && room && (ray.lands(-1) || ray.lands(2))
}

/// Return `true` if an open two for `player` starts at the anchor.
pub fn open_two_at(board: &Board, row: usize, col: usize, player: Player) -> bool {
    Direction::ALL
        .into_iter()
        .any(|dir| open_two_along(Ray::new(board, row, col, dir), player))
}

#[cfg(test)]
mod tests {
    use quattro_core::{Board, Player};

    use super::{four_at, open_three_at, open_two_at};

    #[test]
    fn four_found_only_at_its_anchor_end() {
        let board: Board = "7/7/7/7/7/XXXX3".parse().unwrap();
        assert!(four_at(&board, 5, 0, Player::One));
        assert!(!four_at(&board, 5, 1, Player::One));
        assert!(!four_at(&board, 5, 0, Player::Two));
    }

    #[test]
    fn four_needs_a_full_connect_length_run() {
        let three: Board = "7/7/7/7/7/XXX4".parse().unwrap();
        assert!(!four_at(&three, 5, 0, Player::One));
        let five: Board = "7/7/7/7/7/XXXXX2".parse().unwrap();
        assert!(four_at(&five, 5, 0, Player::One));
        assert!(four_at(&five, 5, 1, Player::One));
        assert!(!four_at(&five, 5, 2, Player::One));
    }

    #[test]
    fn vertical_four_anchors_at_bottom() {
        let board: Board = "7/7/O6/O6/O6/O6".parse().unwrap();
        assert!(four_at(&board, 5, 0, Player::Two));
        assert!(!four_at(&board, 2, 0, Player::Two));
    }

    #[test]
    fn open_three_with_landable_flank() {
        let board: Board = "7/7/7/7/7/XXX4".parse().unwrap();
        assert!(open_three_at(&board, 5, 0, Player::One));
    }

    #[test]
    fn horizontal_three_needs_free_cell_two_past_the_end() {
        // X X X _ O: right flank is landable but the reach cell holds O
        // and the left flank is off the board.
        let board: Board = "7/7/7/7/7/XXX1O2".parse().unwrap();
        assert!(!open_three_at(&board, 5, 0, Player::One));

        // The reach cell holding the player's own piece does not count either.
        let board: Board = "7/7/7/7/7/XXX1X2".parse().unwrap();
        assert!(!open_three_at(&board, 5, 0, Player::One));

        let board: Board = "7/7/7/7/7/XXX4".parse().unwrap();
        assert!(open_three_at(&board, 5, 0, Player::One));
    }

    #[test]
    fn diagonal_three_reach_is_the_adjacent_cell() {
        // Rising diagonal from (5, 0): the cell past the end is (2, 3), one
        // step out, and it sits on top of column 3 so it is also landable.
        let board: Board = "7/7/7/2XO3/1XOO3/XOOO3".parse().unwrap();
        assert!(open_three_at(&board, 5, 0, Player::One));

        let capped: Board = "7/7/3O3/2XO3/1XOO3/XOOO3".parse().unwrap();
        assert!(!open_three_at(&capped, 5, 0, Player::One));
    }

    #[test]
    fn flank_above_a_full_column_does_not_count() {
        // Past the end of the rising three is (-1, 4), over a full column;
        // the other flank (3, 0) floats.
        let board: Board = "3XX2/2XOX2/1XOXO2/1OOOX2/1XOOO2/XXXOO2".parse().unwrap();
        assert!(!open_three_at(&board, 2, 1, Player::One));
    }

    #[test]
    fn vertical_three_with_room_on_top() {
        let board: Board = "7/7/7/X6/X6/X6".parse().unwrap();
        assert!(open_three_at(&board, 5, 0, Player::One));
        let capped: Board = "7/7/O6/X6/X6/X6".parse().unwrap();
        assert!(!open_three_at(&capped, 5, 0, Player::One));
    }

    #[test]
    fn blocked_three_is_not_open() {
        let board: Board = "7/7/7/7/7/OXXXO2".parse().unwrap();
        assert!(!open_three_at(&board, 5, 1, Player::One));
    }

    #[test]
    fn open_two_needs_room_and_landing() {
        let board: Board = "7/7/7/7/7/2XX3".parse().unwrap();
        assert!(open_two_at(&board, 5, 2, Player::One));
        assert!(!open_two_at(&board, 5, 3, Player::One));

        let boxed: Board = "7/7/7/7/7/1OXXO2".parse().unwrap();
        assert!(!open_two_at(&boxed, 5, 2, Player::One));
    }

    #[test]
    fn vertical_two_needs_two_free_cells_above() {
        let board: Board = "7/7/7/7/X6/X6".parse().unwrap();
        assert!(open_two_at(&board, 5, 0, Player::One));
        let high: Board = "X6/X6/O6/O6/X6/O6".parse().unwrap();
        assert!(!open_two_at(&high, 1, 0, Player::One));
    }
}
