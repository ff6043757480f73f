//! Search module for the Tic-Tac-Toe AI
//!
//! Contains:
//! - Minimax with optional alpha-beta pruning
//! - Iterative deepening driver with early exit on forced outcomes

pub mod alphabeta;
pub mod deepening;

pub use alphabeta::{Move, SearchResult, Searcher};
