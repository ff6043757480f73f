//! Game rules for Tic-Tac-Toe
//!
//! Winner detection and game outcome for both variants.

pub mod win;

// Re-exports for convenient access
pub use win::{has_won, lines, outcome, winner, winning_line, Outcome};
