//! Evaluation module for Tic-Tac-Toe positions
//!
//! Leaf scoring for the minimax search:
//! - Exact winner-only scores for searches that reach the end of the game
//! - Line heuristic for depth-limited 4x4 search
//! - The search's initial score bound (`INF`)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_exact, evaluate_lines, line_score};
pub use patterns::{ExactScore, LineScore, INF};
