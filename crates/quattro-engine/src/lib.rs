//! Search and evaluation for quattro.

pub mod eval;
pub mod search;

pub use eval::evaluate;
pub use search::minimax::WIN_SCORE;
pub use search::pool::ThreadPool;
pub use search::{SearchConfig, SearchResult, Searcher};
