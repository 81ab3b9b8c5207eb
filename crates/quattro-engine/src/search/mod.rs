//! Search algorithms and move ordering.

pub mod minimax;
pub mod ordering;
pub mod pool;

use quattro_core::{Board, Player};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use pool::ThreadPool;

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Score from the agent's perspective.
    pub score: i32,
    /// Best column, or `None` when the root was not expanded (depth 0 or a
    /// finished game).
    pub column: Option<usize>,
    /// Total nodes visited during the search.
    pub nodes: u64,
}

/// Tunable search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to look ahead. Zero picks a random legal column.
    pub depth: u8,
    /// Worker threads for the root split.
    pub threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 4, threads: 1 }
    }
}

/// Depth-limited minimax player for one side.
#[derive(Debug, Clone)]
pub struct Searcher {
    agent: Player,
    depth: u8,
    pool: ThreadPool,
}

impl Searcher {
    /// Create a single-threaded searcher for `agent` with a fixed depth.
    pub fn new(agent: Player, depth: u8) -> Self {
        Self::with_config(agent, SearchConfig { depth, ..SearchConfig::default() })
    }

    /// Create a searcher from a full [`SearchConfig`].
    pub fn with_config(agent: Player, config: SearchConfig) -> Self {
        Self {
            agent,
            depth: config.depth,
            pool: ThreadPool::new(config.threads),
        }
    }

    /// The side this searcher maximizes for.
    pub fn agent(&self) -> Player {
        self.agent
    }

    /// The side this searcher minimizes for.
    pub fn opponent(&self) -> Player {
        self.agent.opponent()
    }

    /// Search depth in plies.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Run the search and return the root score, column and node count.
    pub fn search(&self, board: &Board) -> SearchResult {
        let result = self.pool.search(board, self.agent, self.depth);
        debug!(
            agent = self.agent.id(),
            depth = self.depth,
            threads = self.pool.num_threads(),
            score = result.score,
            column = ?result.column,
            nodes = result.nodes,
            "search complete"
        );
        result
    }

    /// Choose a column to play.
    ///
    /// Returns `None` only when the board has no legal column.
    pub fn find_best_move(&self, board: &Board) -> Option<usize> {
        self.find_best_move_with(board, &mut rand::thread_rng())
    }

    /// Like [`find_best_move`](Self::find_best_move), drawing the fallback
    /// column from `rng`.
    ///
    /// When the search yields no usable column (depth 0, or a root that is
    /// already decided) a uniformly random legal column is played instead.
    pub fn find_best_move_with<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<usize> {
        let result = self.search(board);
        match result.column {
            Some(col) if board.is_legal_column(col) => Some(col),
            _ => {
                let col = board.valid_moves().as_slice().choose(rng).copied();
                debug!(column = ?col, "no searched move, playing a random column");
                col
            }
        }
    }
}
