//! Score constants for position evaluation
//!
//! All scores are from O's point of view: O maximizes, X minimizes.

/// Per-line scores used by the line heuristic
pub struct LineScore;

impl LineScore {
    /// Every cell of the line owned by one side
    pub const FULL: i32 = 1_000;
    /// One cell short of a full line, the missing cell empty
    pub const ONE_SHORT: i32 = 100;
    /// Two cells short of a full line, both missing cells empty
    pub const TWO_SHORT: i32 = 10;
}

/// Scores of the exact (winner-only) evaluation
pub struct ExactScore;

impl ExactScore {
    pub const O_WINS: i32 = 1;
    pub const X_WINS: i32 = -1;
    pub const DRAW: i32 = 0;
}

/// Initial "nothing found yet" bound. Never produced by evaluation.
pub const INF: i32 = i32::MAX;
