//! Root-parallel thread pool.

use std::sync::atomic::{AtomicU64, Ordering};

use quattro_core::{Board, COLUMNS, MoveList, Player};

use crate::search::SearchResult;
use crate::search::minimax::{INF, SearchContext, minimax};
use crate::search::ordering::order_moves;

/// Splits the root moves across worker threads.
///
/// Every root child is searched with a full window, and the results are
/// merged in root order with the same strict comparison the sequential search
/// uses. The chosen column and score therefore match a single-threaded search;
/// only the node count differs.
#[derive(Debug, Clone)]
pub struct ThreadPool {
    num_threads: usize,
}

impl ThreadPool {
    /// Create a pool that searches with `num_threads` threads (at least one).
    pub fn new(num_threads: usize) -> Self {
        Self {
            num_threads: num_threads.max(1),
        }
    }

    /// Number of search threads.
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Search `board` to `depth` plies with `agent` to move.
    pub fn search(&self, board: &Board, agent: Player, depth: u8) -> SearchResult {
        if self.num_threads <= 1 || depth == 0 || board.is_terminal() {
            return search_single(board, agent, depth);
        }

        let roots = order_moves(board, agent, depth);
        let workers = self.num_threads.min(roots.len());

        // One counter per worker to avoid contention
        let node_counters: Vec<AtomicU64> = (0..workers).map(|_| AtomicU64::new(0)).collect();
        let mut scores = [-INF; COLUMNS];

        std::thread::scope(|s| {
            let handles: Vec<_> = node_counters
                .iter()
                .enumerate()
                .map(|(worker, counter)| {
                    let roots = &roots;
                    s.spawn(move || {
                        search_share(board, agent, depth, roots, worker, workers, counter)
                    })
                })
                .collect();

            for handle in handles {
                let share = handle
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload));
                for (index, score) in share {
                    scores[index] = score;
                }
            }
        });

        let mut result = SearchResult {
            score: -INF,
            column: None,
            // The root itself counts as one node
            nodes: 1 + node_counters
                .iter()
                .map(|c| c.load(Ordering::Relaxed))
                .sum::<u64>(),
        };

        for (index, &col) in roots.iter().enumerate() {
            if scores[index] > result.score {
                result.score = scores[index];
                result.column = Some(col);
            }
        }

        result
    }
}

impl Default for ThreadPool {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Single-thread fast path, no scope overhead.
fn search_single(board: &Board, agent: Player, depth: u8) -> SearchResult {
    let mut ctx = SearchContext::new(agent);
    let best = minimax(board, depth, true, -INF, INF, &mut ctx);
    SearchResult {
        score: best.score,
        column: best.column,
        nodes: ctx.nodes,
    }
}

/// Search the root moves at `worker`, `worker + workers`, ... and return
/// their (root index, score) pairs.
fn search_share(
    board: &Board,
    agent: Player,
    depth: u8,
    roots: &MoveList,
    worker: usize,
    workers: usize,
    node_counter: &AtomicU64,
) -> Vec<(usize, i32)> {
    let mut ctx = SearchContext::new(agent);
    let mut share = Vec::new();

    for index in (worker..roots.len()).step_by(workers) {
        let col = roots[index];
        let Some(row) = board.drop_row(col) else {
            continue;
        };
        let mut child = *board;
        child.place(row, col, agent);
        let score = minimax(&child, depth - 1, false, -INF, INF, &mut ctx).score;
        share.push((index, score));
    }

    node_counter.store(ctx.nodes, Ordering::Relaxed);
    share
}
