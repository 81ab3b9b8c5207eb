//! Integration tests for the root-parallel thread pool.
//!
//! A parallel search must agree with the sequential one on column and score
//! for every thread count; only the node count may differ.

use quattro_core::{Board, Player};
use quattro_engine::{SearchConfig, SearchResult, Searcher, ThreadPool, WIN_SCORE};

const POSITIONS: [&str; 6] = [
    "7/7/7/7/7/7",
    "7/7/7/7/OOO4/XXX4",
    "7/7/7/7/O6/XXX4",
    "7/7/2O4/2XX3/1OXO3/XOXXO1O",
    "7/7/7/3X3/2OO3/1XXOX2",
    "7/2X4/2O1O2/1XXOX2/1OXOO2/XOXXOX1",
];

/// Helper: run a search on `board` at `depth` using `threads` threads.
fn search_with_threads(board: &Board, agent: Player, depth: u8, threads: usize) -> SearchResult {
    ThreadPool::new(threads).search(board, agent, depth)
}

// ── Agreement with the sequential search ──────────────────────────────────────

#[test]
fn parallel_matches_sequential() {
    for text in POSITIONS {
        let board: Board = text.parse().unwrap();
        for agent in Player::ALL {
            for depth in 1..=5 {
                let sequential = search_with_threads(&board, agent, depth, 1);
                for threads in [2, 3, 4, 7] {
                    let parallel = search_with_threads(&board, agent, depth, threads);
                    assert_eq!(
                        (parallel.column, parallel.score),
                        (sequential.column, sequential.score),
                        "{text} agent {agent} depth {depth} threads {threads}"
                    );
                }
            }
        }
    }
}

#[test]
fn parallel_counts_every_worker_node() {
    let board = Board::new();
    let result = search_with_threads(&board, Player::One, 4, 4);
    // Root plus at least one node per root child
    assert!(result.nodes > 7, "nodes {} too low", result.nodes);
}

// ── Scenarios through the public searcher ─────────────────────────────────────

#[test]
fn multi_threaded_searcher_takes_the_win() {
    let board: Board = "7/7/7/7/OOO4/XXX4".parse().unwrap();
    let searcher = Searcher::with_config(Player::One, SearchConfig { depth: 4, threads: 4 });
    let result = searcher.search(&board);
    assert_eq!(result.column, Some(3));
    assert_eq!(result.score, WIN_SCORE);
}

#[test]
fn multi_threaded_searcher_blocks() {
    let board: Board = "7/7/7/7/O6/XXX4".parse().unwrap();
    let searcher = Searcher::with_config(Player::Two, SearchConfig { depth: 4, threads: 3 });
    assert_eq!(searcher.find_best_move(&board), Some(3));
}

#[test]
fn engine_self_play_finishes_with_legal_moves() {
    let mut board = Board::new();
    let searchers = [Searcher::new(Player::One, 2), Searcher::new(Player::Two, 3)];
    let mut turn = 0;

    while !board.is_terminal() {
        let searcher = &searchers[turn % 2];
        let col = searcher.find_best_move(&board).expect("non-terminal board has a move");
        board.play(col, searcher.agent()).unwrap();
        turn += 1;
    }

    assert!(turn <= 42);
    assert_eq!(board.piece_count(), turn);
}
