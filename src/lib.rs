//! Tic-Tac-Toe AI engine with minimax and alpha-beta pruning
//!
//! Two variants are supported:
//! - Classic 3x3, searched to the end of the game with exact scores
//! - Extended 4x4, depth-limited with a line-counting heuristic
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Winner detection and game outcome
//! - [`eval`]: Exact and heuristic position evaluation
//! - [`search`]: Minimax, alpha-beta pruning, iterative deepening
//! - [`engine`]: AI engine facade with search statistics
//! - [`game`]: Game session owning the board and turn order
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AIEngine, Board, Player, Pos, Variant};
//!
//! let engine = AIEngine::new(Variant::Classic);
//! let mut board = Board::new(Variant::Classic);
//! board.place(Pos::new(0, 0), Player::X);
//!
//! // AI responds as O
//! if let Some(pos) = engine.get_move(&board, Player::O) {
//!     board.place(pos, Player::O);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Scores
//!
//! Scores are always from O's point of view: O maximizes, X minimizes.
//! The exact evaluation gives +1 / -1 / 0 and the line heuristic sums
//! ±1000 / ±100 / ±10 per line. Won positions are scored the same way and
//! additionally mark the search result as forced.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Evaluation, Player, Pos, Variant};
pub use engine::{AIEngine, EngineConfig, MoveResult, PruningComparison, SearchType};
pub use error::GameError;
pub use game::{GameMode, GameSession, NodeHistory};
pub use rules::{has_won, Outcome};
pub use search::{SearchResult, Searcher};
