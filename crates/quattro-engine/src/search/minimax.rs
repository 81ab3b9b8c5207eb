//! Bounded minimax with alpha-beta pruning.

use quattro_core::{Board, Player};

use crate::evaluate;
use crate::search::ordering::order_moves;

/// Score of a position the agent has won, regardless of depth.
pub const WIN_SCORE: i32 = 10_000_000;

/// Score representing an unreachable upper/lower bound.
pub const INF: i32 = i32::MAX;

/// A node's value and the move that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Scored {
    pub score: i32,
    /// `None` at leaves.
    pub column: Option<usize>,
}

/// Search state threaded through minimax calls.
pub(crate) struct SearchContext {
    /// The maximizing side.
    pub agent: Player,
    /// Total nodes visited.
    pub nodes: u64,
}

impl SearchContext {
    pub fn new(agent: Player) -> Self {
        Self { agent, nodes: 0 }
    }
}

/// Score a node the search does not expand.
///
/// A win for either side outranks any heuristic value; a full board with no
/// winner is a draw.
pub(crate) fn leaf_score(board: &Board, agent: Player) -> i32 {
    if board.is_won_for(agent) {
        WIN_SCORE
    } else if board.is_won_for(agent.opponent()) {
        -WIN_SCORE
    } else if board.is_full() {
        0
    } else {
        evaluate(board, agent)
    }
}

/// Minimax with alpha-beta pruning.
///
/// The agent drops at maximizing nodes, its opponent at minimizing nodes.
/// Each child is searched on its own copy of `board`. Among equal scores the
/// first move in search order is kept.
pub(crate) fn minimax(
    board: &Board,
    depth: u8,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext,
) -> Scored {
    ctx.nodes += 1;

    if depth == 0 || board.is_terminal() {
        return Scored {
            score: leaf_score(board, ctx.agent),
            column: None,
        };
    }

    let mover = if maximizing { ctx.agent } else { ctx.agent.opponent() };
    let mut best = Scored {
        score: if maximizing { -INF } else { INF },
        column: None,
    };

    for &col in &order_moves(board, ctx.agent, depth) {
        let Some(row) = board.drop_row(col) else {
            continue;
        };
        let mut child = *board;
        child.place(row, col, mover);

        let score = minimax(&child, depth - 1, !maximizing, alpha, beta, ctx).score;

        if maximizing {
            if score > best.score {
                best = Scored { score, column: Some(col) };
            }
            alpha = alpha.max(score);
        } else {
            if score < best.score {
                best = Scored { score, column: Some(col) };
            }
            beta = beta.min(score);
        }

        if alpha >= beta {
            break;
        }
    }

    best
}
