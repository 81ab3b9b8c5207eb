//! Core game types: the gravity-filled board, players, and game rules.

mod board;
mod direction;
mod error;
mod move_list;
mod player;
mod position;

pub use board::{Board, Cell, PrettyBoard, CENTER_COLUMN, COLUMNS, CONNECT, ROWS};
pub use direction::Direction;
pub use error::{BoardError, PositionError};
pub use move_list::MoveList;
pub use player::Player;
pub use position::EMPTY_POSITION;
