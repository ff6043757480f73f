//! Minimax search with optional alpha-beta pruning
//!
//! This module implements the core search algorithm for the Tic-Tac-Toe AI.
//! O is the maximizing side and X the minimizing side; scores are always
//! from O's point of view.
//!
//! # Features
//!
//! - Plain minimax or alpha-beta, selected per searcher, so node counts
//!   can be compared on identical trees
//! - In-place make/undo on the caller's board
//! - Row-major move order with first-found tie-breaking (deterministic)
//! - One node counter per searcher, shared by every recursive call
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Player, Pos};
//! use tictactoe::search::Searcher;
//!
//! let mut board = Board::from_rows(&["XX ", "OO ", "   "]).unwrap();
//! let mut searcher = Searcher::new(board.variant().evaluation(), true);
//!
//! let result = searcher.search(&mut board, Player::X, 3);
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! ```

use log::trace;

use crate::board::{Board, Evaluation, Player, Pos, Variant};
use crate::eval::{evaluate, INF};
use crate::rules::winner;

/// A candidate move and its score.
///
/// `pos == None` is the no-move result: returned by leaves, and by the
/// root when the board has no open cell. Never apply it to a board.
///
/// `forced` is set when the line of play behind the score ends on a
/// completed line (a won position) rather than at the depth limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub pos: Option<Pos>,
    pub score: i32,
    pub forced: bool,
}

impl Move {
    #[inline]
    pub fn none(score: i32) -> Self {
        Self {
            pos: None,
            score,
            forced: false,
        }
    }

    /// Leaf where one side has completed a line
    #[inline]
    pub fn won(score: i32) -> Self {
        Self {
            pos: None,
            score,
            forced: true,
        }
    }

    /// Worst possible move for `player`: the starting point of every node
    #[inline]
    pub fn worst_for(player: Player) -> Self {
        Self::none(if player.is_maximizing() { -INF } else { INF })
    }

    /// True if `self` is strictly better than `other` for `player`
    #[inline]
    pub fn improves_on(&self, other: &Move, player: Player) -> bool {
        if player.is_maximizing() {
            self.score > other.score
        } else {
            self.score < other.score
        }
    }
}

/// Search result containing the best move found and the node count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the best move, from O's perspective
    pub score: i32,
    /// Depth of the last completed search
    pub depth: u8,
    /// Nodes visited by the searcher so far
    pub nodes: u64,
    /// The best line ends on a won position within the searched depth
    pub forced: bool,
}

impl SearchResult {
    #[inline]
    pub fn is_forced(&self) -> bool {
        self.forced
    }
}

/// Minimax searcher.
///
/// Holds the evaluation policy, the pruning switch and the node counter.
/// Create one per AI turn: the counter keeps growing across calls until
/// `reset_nodes` is called.
#[derive(Debug, Clone)]
pub struct Searcher {
    evaluation: Evaluation,
    pruning: bool,
    nodes: u64,
}

impl Searcher {
    pub fn new(evaluation: Evaluation, pruning: bool) -> Self {
        Self {
            evaluation,
            pruning,
            nodes: 0,
        }
    }

    /// Alpha-beta searcher with the variant's evaluation
    pub fn for_variant(variant: Variant) -> Self {
        Self::new(variant.evaluation(), true)
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn reset_nodes(&mut self) {
        self.nodes = 0;
    }

    /// Fixed-depth search from the root with a full window.
    ///
    /// `depth` is clamped to the number of open cells so that every full
    /// board inside the tree is reached with no depth left. A board with
    /// no open cells returns `best_move == None`.
    pub fn search(&mut self, board: &mut Board, player: Player, depth: u8) -> SearchResult {
        let depth = depth.min(board.open_count() as u8);
        let best = self.minimax(board, depth, player, -INF, INF);

        SearchResult {
            best_move: best.pos,
            score: best.score,
            depth,
            nodes: self.nodes,
            forced: best.forced,
        }
    }

    /// Recursive minimax.
    ///
    /// `player` moves at this node. `alpha` and `beta` are only read when
    /// pruning is enabled. Every cell placed on `board` is cleared again
    /// before the next sibling is explored, so the board is unchanged
    /// when this returns.
    ///
    /// Terminal nodes (a completed line, or `depth == 0`) score with the
    /// evaluation policy; a completed line also marks the move `forced`.
    /// A node with depth left but no open cell returns the
    /// `worst_for(player)` sentinel.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        player: Player,
        mut alpha: i32,
        mut beta: i32,
    ) -> Move {
        self.nodes += 1;

        if winner(board).is_some() {
            return Move::won(evaluate(board, self.evaluation));
        }
        if depth == 0 {
            return Move::none(evaluate(board, self.evaluation));
        }

        let mut best = Move::worst_for(player);

        for pos in board.open_cells() {
            board.place(pos, player);
            let child = self.minimax(board, depth - 1, player.opponent(), alpha, beta);
            board.clear(pos);

            let candidate = Move {
                pos: Some(pos),
                ..child
            };
            if candidate.improves_on(&best, player) {
                best = candidate;
            }

            if self.pruning {
                if player.is_maximizing() {
                    alpha = alpha.max(best.score);
                } else {
                    beta = beta.min(best.score);
                }
                if alpha >= beta {
                    trace!("cutoff at depth {} after {}", depth, pos);
                    break;
                }
            }
        }

        best
    }
}
