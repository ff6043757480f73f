//! Evaluation of board positions for the minimax search
//!
//! Two policies:
//! - Exact: only the winner matters (+1 / -1 / 0). Used when the search
//!   reaches the end of the game, as on 3x3.
//! - Line heuristic: every row, column and diagonal is scored on its own
//!   and the scores are summed. A cell on several lines counts once per
//!   line.

use crate::board::{Board, Evaluation, Player};
use crate::rules::{has_won, lines};

use super::patterns::{ExactScore, LineScore};

/// Evaluate the board from O's perspective.
///
/// Positive values favor O, negative values favor X.
#[must_use]
pub fn evaluate(board: &Board, evaluation: Evaluation) -> i32 {
    match evaluation {
        Evaluation::Exact => evaluate_exact(board),
        Evaluation::LineHeuristic => evaluate_lines(board),
    }
}

/// +1 if O has won, -1 if X has won, 0 otherwise
#[must_use]
pub fn evaluate_exact(board: &Board) -> i32 {
    if has_won(board, Player::O) {
        ExactScore::O_WINS
    } else if has_won(board, Player::X) {
        ExactScore::X_WINS
    } else {
        ExactScore::DRAW
    }
}

/// Sum of `line_score` over all N + N + 2 lines
#[must_use]
pub fn evaluate_lines(board: &Board) -> i32 {
    let o = board.marks(Player::O);
    let x = board.marks(Player::X);
    let size = board.size() as u32;

    lines(board.variant())
        .iter()
        .map(|&line| line_score(o.count_in(line), x.count_in(line), size))
        .sum()
}

/// Score of one line of length `size` holding `o` O marks and `x` X marks.
///
/// Mixed lines score 0: a line only counts when the non-empty cells all
/// belong to one side.
#[must_use]
pub fn line_score(o: u32, x: u32, size: u32) -> i32 {
    let empty = size - o - x;

    if o == size {
        LineScore::FULL
    } else if x == size {
        -LineScore::FULL
    } else if o == size - 1 && empty == 1 {
        LineScore::ONE_SHORT
    } else if x == size - 1 && empty == 1 {
        -LineScore::ONE_SHORT
    } else if o == size - 2 && empty == 2 {
        LineScore::TWO_SHORT
    } else if x == size - 2 && empty == 2 {
        -LineScore::TWO_SHORT
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, Variant};

    #[test]
    fn test_exact_scores() {
        let o_wins = Board::from_rows(&["OOO", "XX ", "X  "]).unwrap();
        let x_wins = Board::from_rows(&["OO ", "XXX", "O  "]).unwrap();
        let open = Board::from_rows(&["O  ", " X ", "   "]).unwrap();

        assert_eq!(evaluate_exact(&o_wins), 1);
        assert_eq!(evaluate_exact(&x_wins), -1);
        assert_eq!(evaluate_exact(&open), 0);
    }

    #[test]
    fn test_exact_full_board_without_winner_is_zero() {
        let board = Board::from_rows(&["XOX", "XOO", "OXX"]).unwrap();
        assert!(board.open_cells().is_empty());
        assert_eq!(evaluate(&board, Evaluation::Exact), 0);
    }

    #[test]
    fn test_line_score_table_4x4() {
        assert_eq!(line_score(4, 0, 4), 1_000);
        assert_eq!(line_score(0, 4, 4), -1_000);
        assert_eq!(line_score(3, 0, 4), 100);
        assert_eq!(line_score(0, 3, 4), -100);
        assert_eq!(line_score(2, 0, 4), 10);
        assert_eq!(line_score(0, 2, 4), -10);
        assert_eq!(line_score(1, 0, 4), 0);
        assert_eq!(line_score(0, 0, 4), 0);
        // Mixed lines get no credit
        assert_eq!(line_score(3, 1, 4), 0);
        assert_eq!(line_score(2, 1, 4), 0);
        assert_eq!(line_score(2, 2, 4), 0);
    }

    #[test]
    fn test_three_in_a_row_contributes_one_hundred() {
        let board = Board::from_rows(&["OOO ", "    ", "    ", "    "]).unwrap();
        // Columns and the main diagonal hold a single O: no credit
        assert_eq!(evaluate_lines(&board), 100);
    }

    #[test]
    fn test_heuristic_is_antisymmetric() {
        let board = Board::from_rows(&["OO  ", " X  ", "  X ", "O   "]).unwrap();
        let mut mirrored = Board::new(Variant::Extended);
        for row in 0..4u8 {
            for col in 0..4u8 {
                let pos = Pos::new(row, col);
                if let Some(player) = board.get(pos).player() {
                    mirrored.place(pos, player.opponent());
                }
            }
        }
        assert_eq!(evaluate_lines(&board), -evaluate_lines(&mirrored));
    }

    #[test]
    fn test_diagonal_cells_count_once_per_line() {
        // (0,0) and (1,1) sit on row, column and diagonal lines
        let board = Board::from_rows(&["O   ", " O  ", "    ", "    "]).unwrap();
        // Main diagonal: two O + two empty = 10; every other line holds at
        // most one O
        assert_eq!(evaluate_lines(&board), 10);

        let board = Board::from_rows(&["OO  ", "OO  ", "    ", "    "]).unwrap();
        // rows 0,1 and columns 0,1 each 10, main diagonal 10
        assert_eq!(evaluate_lines(&board), 50);
    }

    #[test]
    fn test_line_heuristic_on_3x3() {
        let board = Board::from_rows(&["OO ", "   ", "   "]).unwrap();
        // Row 0: one short (100). Columns 0 and 1, main diagonal: one O and
        // two empty (10 each)
        assert_eq!(evaluate(&board, Evaluation::LineHeuristic), 130);
    }
}
