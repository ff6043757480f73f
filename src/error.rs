//! Error types for game sessions and board parsing
//!
//! The search itself never fails: a board without open cells yields the
//! no-move result instead of an error.

use thiserror::Error;

use crate::board::Player;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("position ({row}, {col}) is off the {size}x{size} board")]
    OutOfBounds { row: u8, col: u8, size: usize },

    #[error("position ({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    #[error("game is over")]
    GameOver,

    #[error("not {player}'s turn")]
    NotYourTurn { player: Player },

    #[error("AI is thinking")]
    AiThinking,

    #[error("no legal move available")]
    NoLegalMove,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("unsupported board size {size} (expected 3 or 4)")]
    UnsupportedSize { size: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    InvalidBoardShape {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid character '{character}' at ({row}, {col})")]
    InvalidCell { character: char, row: usize, col: usize },

    #[error("could not parse move '{input}' (expected \"row col\")")]
    InvalidMoveInput { input: String },
}

pub type Result<T> = std::result::Result<T, GameError>;
