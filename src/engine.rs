//! Main AI Engine wrapping the minimax search
//!
//! The engine owns the search configuration for a game: depth cap,
//! pruning, iterative deepening and evaluation policy. Each call searches
//! a private copy of the caller's board with a fresh node counter.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Player, Pos, Variant};
//!
//! let engine = AIEngine::new(Variant::Classic);
//! let board = Board::from_rows(&["XX ", "OO ", "   "]).unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Player::X);
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! println!("Nodes: {}", result.nodes);
//! ```

use std::time::Instant;

use log::{debug, warn};

use crate::board::{Board, Evaluation, Player, Pos, Variant};
use crate::search::{SearchResult, Searcher};

/// Search driver that produced the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// One minimax search at the configured depth
    FixedDepth,
    /// Depth 1, 2, ... up to the configured depth
    IterativeDeepening,
}

/// Search configuration for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Depth cap, further limited by the number of open cells
    pub max_depth: u8,
    /// Alpha-beta pruning on or off
    pub pruning: bool,
    /// Iterative deepening instead of a single fixed-depth search
    pub iterative: bool,
    /// Leaf evaluation policy
    pub evaluation: Evaluation,
}

impl EngineConfig {
    /// Defaults for a variant, pruning enabled.
    ///
    /// 3x3 runs one search to the end of the game. 4x4 deepens up to
    /// depth 4. The deepening driver keeps its first move unless a deeper
    /// depth scores strictly better, which with exact 0/±1 scores can keep
    /// a move that only a deeper search shows to be losing.
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            max_depth: variant.default_depth(),
            pruning: true,
            iterative: variant == Variant::Extended,
            evaluation: variant.evaluation(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found; `None` when the board has no open cell
    pub best_move: Option<Pos>,
    /// Score of the move, from O's perspective
    pub score: i32,
    /// Depth of the last completed search
    pub depth: u8,
    /// Driver that produced the move
    pub search_type: SearchType,
    /// Whether alpha-beta pruning was on
    pub pruning: bool,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// The best line ends on a won position
    pub forced: bool,
}

impl MoveResult {
    fn from_search(result: SearchResult, search_type: SearchType, pruning: bool, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            search_type,
            pruning,
            time_ms,
            nodes: result.nodes,
            forced: result.forced,
        }
    }

    /// True if the search stopped on a completed line rather than the
    /// depth limit
    pub fn is_forced(&self) -> bool {
        self.forced
    }
}

/// Node counts of the same turn searched with and without pruning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PruningComparison {
    /// Result with pruning on; this is the move to play
    pub pruned: MoveResult,
    /// Result with pruning off, for diagnostics
    pub unpruned: MoveResult,
}

impl PruningComparison {
    /// The result matching an engine's pruning setting
    pub fn played(&self, pruning: bool) -> &MoveResult {
        if pruning {
            &self.pruned
        } else {
            &self.unpruned
        }
    }

    /// Fraction of the unpruned tree that pruning skipped
    pub fn savings(&self) -> f64 {
        if self.unpruned.nodes == 0 {
            0.0
        } else {
            1.0 - self.pruned.nodes as f64 / self.unpruned.nodes as f64
        }
    }
}

/// Tic-Tac-Toe AI engine.
///
/// Stateless between calls apart from its configuration.
#[derive(Debug, Clone)]
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    /// Engine with the variant's default configuration
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self::with_config(EngineConfig::for_variant(variant))
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the best move for the given position.
    ///
    /// Convenience wrapper; use `get_move_with_stats` for node counts.
    #[must_use]
    pub fn get_move(&self, board: &Board, player: Player) -> Option<Pos> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Get the best move with search statistics, using the configured
    /// pruning setting.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board, player: Player) -> MoveResult {
        self.run(board, player, self.config.pruning)
    }

    /// Search the turn twice, with and without pruning.
    ///
    /// Both runs see the same board and configuration, so the node counts
    /// are directly comparable. Both runs choose the same move.
    #[must_use]
    pub fn compare_pruning(&self, board: &Board, player: Player) -> PruningComparison {
        let pruned = self.run(board, player, true);
        let unpruned = self.run(board, player, false);
        debug!(
            "nodes with pruning: {}, without pruning: {}",
            pruned.nodes, unpruned.nodes
        );
        PruningComparison { pruned, unpruned }
    }

    fn run(&self, board: &Board, player: Player, pruning: bool) -> MoveResult {
        let start = Instant::now();
        let mut work_board = *board;
        let mut searcher = Searcher::new(self.config.evaluation, pruning);

        let (result, search_type) = if self.config.iterative {
            (
                searcher.iterative_deepening(&mut work_board, self.config.max_depth, player),
                SearchType::IterativeDeepening,
            )
        } else {
            (
                searcher.search(&mut work_board, player, self.config.max_depth),
                SearchType::FixedDepth,
            )
        };

        let elapsed = start.elapsed().as_millis() as u64;
        match result.best_move {
            Some(pos) => debug!(
                "{} plays {} (score {}, depth {}, {} nodes, {}ms)",
                player, pos, result.score, result.depth, result.nodes, elapsed
            ),
            None => warn!("no legal move for {}: board full or already won", player),
        }

        MoveResult::from_search(result, search_type, pruning, elapsed)
    }
}
