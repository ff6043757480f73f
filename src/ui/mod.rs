//! GUI module for the Tic-Tac-Toe game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_state;
mod node_chart;
mod theme;

pub use app::TicTacToeApp;
pub use game_state::{AiState, GameState};
