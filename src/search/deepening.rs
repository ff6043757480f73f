//! Iterative deepening driver
//!
//! Runs the minimax search at depth 1, 2, ... up to a cap and keeps the
//! best result. Stops early once a depth's best line ends on a won
//! position.

use log::debug;

use crate::board::{Board, Player};
use crate::eval::INF;

use super::alphabeta::{Move, SearchResult, Searcher};

impl Searcher {
    /// Iterative deepening search.
    ///
    /// `max_depth` is capped at the number of open cells. A depth's move
    /// replaces the incumbent only if it is strictly better for `player`.
    /// The node counter keeps accumulating across depths.
    ///
    /// The returned `depth` is the last depth searched, which is below the
    /// cap when a forced outcome stopped the loop.
    pub fn iterative_deepening(
        &mut self,
        board: &mut Board,
        max_depth: u8,
        player: Player,
    ) -> SearchResult {
        let max_depth = max_depth.min(board.open_count() as u8);
        let mut best = Move::worst_for(player);
        let mut completed = 0;

        for depth in 1..=max_depth {
            let current = self.minimax(board, depth, player, -INF, INF);
            completed = depth;

            debug!(
                "depth {}: move {:?} score {} nodes {}",
                depth, current.pos, current.score, self.nodes()
            );

            if current.improves_on(&best, player) {
                best = current;
            }

            if current.forced {
                debug!("forced outcome at depth {}, stopping", depth);
                break;
            }
        }

        SearchResult {
            best_move: best.pos,
            score: best.score,
            depth: completed,
            nodes: self.nodes(),
            forced: best.forced,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Evaluation, Player, Pos, Variant};
    use crate::eval::ExactScore;
    use crate::search::Searcher;

    #[test]
    fn test_stops_at_forced_win() {
        let mut board =
            Board::from_rows(&["OOO ", "XX  ", "X   ", "    "]).unwrap();
        let mut searcher = Searcher::for_variant(Variant::Extended);

        let result = searcher.iterative_deepening(&mut board, 4, Player::O);
        assert_eq!(result.best_move, Some(Pos::new(0, 3)));
        assert_eq!(result.score, 990);
        assert!(result.is_forced());
        assert!(result.depth < 4);
        assert_eq!(result.depth, 1);
        // Root plus one child per open cell
        assert_eq!(result.nodes, 11);
    }

    #[test]
    fn test_stops_at_forced_win_without_pruning() {
        let mut board = Board::from_rows(&["XX ", "OO ", "   "]).unwrap();
        let mut searcher = Searcher::new(Evaluation::Exact, false);

        let result = searcher.iterative_deepening(&mut board, 5, Player::X);
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(result.score, ExactScore::X_WINS);
        assert!(result.is_forced());
        assert_eq!(result.depth, 1);
    }

    #[test]
    fn test_counter_accumulates_across_depths() {
        let mut board = Board::new(Variant::Extended);
        let mut deepening = Searcher::new(Evaluation::LineHeuristic, false);
        let result = deepening.iterative_deepening(&mut board, 3, Player::O);

        // 17 + 257 + 3617 nodes for depths 1, 2 and 3
        assert_eq!(result.nodes, 3_891);
        assert_eq!(result.depth, 3);
        assert_eq!(result.best_move, Some(Pos::new(0, 0)));
        assert_eq!(result.score, 10);
        assert!(!result.is_forced());
    }

    #[test]
    fn test_stops_on_won_line_with_heuristic_score() {
        // Depth 1 finds three moves for O; two complete a line and the
        // one with the better line sum is kept
        let mut board = Board::from_rows(&["O OO", "OOXX", "O XX", " XXX"]).unwrap();
        for pruning in [true, false] {
            let mut searcher = Searcher::new(Evaluation::LineHeuristic, pruning);
            let result = searcher.iterative_deepening(&mut board, 3, Player::O);
            assert_eq!(result.best_move, Some(Pos::new(3, 0)));
            assert_eq!(result.score, 1100);
            assert!(result.is_forced());
            assert_eq!(result.depth, 1);
            assert_eq!(result.nodes, 4);
        }
    }

    #[test]
    fn test_depth_capped_by_open_cells() {
        let mut board = Board::from_rows(&["XOX", "XOO", "O  "]).unwrap();
        let mut searcher = Searcher::for_variant(Variant::Classic);
        let result = searcher.iterative_deepening(&mut board, 9, Player::X);
        assert!(result.depth <= 2);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn test_full_board_returns_no_move() {
        let mut board = Board::from_rows(&["XOX", "XOO", "OXX"]).unwrap();
        let mut searcher = Searcher::for_variant(Variant::Classic);
        let result = searcher.iterative_deepening(&mut board, 9, Player::O);
        assert_eq!(result.best_move, None);
        assert_eq!(result.depth, 0);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_keeps_incumbent_unless_strictly_better() {
        let mut board = Board::new(Variant::Classic);
        let before = board;
        let mut searcher = Searcher::for_variant(Variant::Classic);
        let result = searcher.iterative_deepening(&mut board, 9, Player::O);

        // Every depth scores 0 on the empty board; depth 1 already found (0, 0)
        assert_eq!(result.best_move, Some(Pos::new(0, 0)));
        assert_eq!(result.score, 0);
        assert_eq!(result.depth, 9);
        assert_eq!(board, before);
    }
}
