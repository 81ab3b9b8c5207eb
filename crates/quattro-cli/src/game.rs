//! Game state: the authoritative board, turn order and who controls each side.

use quattro_core::{Board, BoardError, Player};
use quattro_engine::Searcher;
use tracing::debug;

use crate::error::CliError;

/// Who chooses the moves for one side.
#[derive(Debug, Clone)]
pub enum Controller {
    /// Moves are read from the terminal.
    Human,
    /// Moves come from a searcher playing this side.
    Engine(Searcher),
}

impl Controller {
    pub fn is_human(&self) -> bool {
        matches!(self, Controller::Human)
    }
}

/// Whether the game is still going, and how it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    controllers: [Controller; Player::COUNT],
    moves_played: usize,
}

impl Game {
    /// Start a game from `board` with `first` to move.
    pub fn new(board: Board, first: Player, one: Controller, two: Controller) -> Self {
        Self {
            board,
            to_move: first,
            controllers: [one, two],
            moves_played: 0,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Moves played since the game started.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// The controller for `player`.
    pub fn controller(&self, player: Player) -> &Controller {
        &self.controllers[player.id() as usize - 1]
    }

    /// `true` when no side is played by a human.
    pub fn is_self_play(&self) -> bool {
        !self.controllers.iter().any(Controller::is_human)
    }

    /// `true` when both sides are played by humans.
    pub fn is_two_player(&self) -> bool {
        self.controllers.iter().all(Controller::is_human)
    }

    /// Evaluate the board for a result.
    pub fn status(&self) -> GameStatus {
        match self.board.winner() {
            Some(player) => GameStatus::Won(player),
            None if self.board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Ask the side to move for its column, if an engine plays it.
    ///
    /// Returns `None` for a human side or a board without legal columns.
    pub fn engine_move(&self) -> Option<usize> {
        match self.controller(self.to_move) {
            Controller::Engine(searcher) => searcher.find_best_move(&self.board),
            Controller::Human => None,
        }
    }

    /// Drop a piece for the side to move and pass the turn.
    ///
    /// Returns the row the piece landed in. The turn does not pass if the move
    /// is rejected.
    pub fn apply(&mut self, col: usize) -> Result<usize, CliError> {
        let row = self.board.play(col, self.to_move).map_err(|e| match e {
            BoardError::ColumnFull { col } => CliError::ColumnFull { column: col + 1 },
            other => CliError::IllegalMove { source: other },
        })?;
        debug!(player = self.to_move.id(), row, col, "move applied");
        self.to_move = self.to_move.opponent();
        self.moves_played += 1;
        Ok(row)
    }
}
