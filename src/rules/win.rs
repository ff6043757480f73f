//! Win condition checking
//!
//! A player wins by owning every cell of a row, a column or one of the
//! two main diagonals. Each variant has exactly N + N + 2 lines.

use crate::board::{Board, Player, Pos, Variant};

/// Build the line masks (rows, columns, main diagonal, anti-diagonal)
/// for an `N`x`N` board. `L` must equal `2 * N + 2`.
const fn build_lines<const N: usize, const L: usize>() -> [u16; L] {
    let mut lines = [0u16; L];
    let mut i = 0;
    while i < N {
        let mut j = 0;
        while j < N {
            // Row i, column i
            lines[i] |= 1u16 << (i * N + j);
            lines[N + i] |= 1u16 << (j * N + i);
            j += 1;
        }
        lines[2 * N] |= 1u16 << (i * N + i);
        lines[2 * N + 1] |= 1u16 << (i * N + (N - 1 - i));
        i += 1;
    }
    lines
}

const CLASSIC_LINES: [u16; 8] = build_lines::<3, 8>();
const EXTENDED_LINES: [u16; 10] = build_lines::<4, 10>();

/// Line masks for a variant: rows, then columns, then both diagonals
#[inline]
pub fn lines(variant: Variant) -> &'static [u16] {
    match variant {
        Variant::Classic => &CLASSIC_LINES,
        Variant::Extended => &EXTENDED_LINES,
    }
}

/// Check if `player` owns a complete line
#[inline]
pub fn has_won(board: &Board, player: Player) -> bool {
    let marks = board.marks(player);
    lines(board.variant())
        .iter()
        .any(|&line| marks.contains_all(line))
}

/// The winning side, if any
pub fn winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| has_won(board, player))
}

/// Cells of the first completed line, for highlighting
pub fn winning_line(board: &Board) -> Option<Vec<Pos>> {
    let size = board.size();
    for player in [Player::X, Player::O] {
        let marks = board.marks(player);
        if let Some(&line) = lines(board.variant())
            .iter()
            .find(|&&line| marks.contains_all(line))
        {
            let cells = crate::board::Bitboard::from_bits(line)
                .iter_ones()
                .map(|idx| Pos::from_index(idx, size))
                .collect();
            return Some(cells);
        }
    }
    None
}

/// State of a game after some move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(Player),
    Tie,
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Classify the board
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::Won(player),
        None if board.is_full() => Outcome::Tie,
        None => Outcome::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Bitboard;

    fn line_positions(variant: Variant, line: u16) -> Vec<Pos> {
        Bitboard::from_bits(line)
            .iter_ones()
            .map(|idx| Pos::from_index(idx, variant.size()))
            .collect()
    }

    #[test]
    fn test_line_counts() {
        assert_eq!(lines(Variant::Classic).len(), 8);
        assert_eq!(lines(Variant::Extended).len(), 10);
    }

    #[test]
    fn test_classic_line_masks() {
        let l = lines(Variant::Classic);
        assert_eq!(l[0], 0b000_000_111);
        assert_eq!(l[3], 0b001_001_001);
        assert_eq!(l[6], 0b100_010_001);
        assert_eq!(l[7], 0b001_010_100);
    }

    #[test]
    fn test_every_line_wins_for_its_owner_only() {
        for variant in [Variant::Classic, Variant::Extended] {
            for &line in lines(variant) {
                for player in [Player::X, Player::O] {
                    let mut board = Board::new(variant);
                    for pos in line_positions(variant, line) {
                        board.place(pos, player);
                    }
                    assert!(has_won(&board, player), "{:?} line {:#b}", variant, line);
                    assert!(!has_won(&board, player.opponent()));
                    assert_eq!(winner(&board), Some(player));
                    assert_eq!(outcome(&board), Outcome::Won(player));
                }
            }
        }
    }

    #[test]
    fn test_incomplete_line_does_not_win() {
        let board = Board::from_rows(&["OOO ", "    ", "    ", "    "]).unwrap();
        assert!(!has_won(&board, Player::O));
        assert_eq!(winner(&board), None);
        assert_eq!(outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = Board::from_rows(&["XOX", "   ", "   "]).unwrap();
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_full_board_tie() {
        let board = Board::from_rows(&["XOX", "XOO", "OXX"]).unwrap();
        assert_eq!(outcome(&board), Outcome::Tie);
        assert!(outcome(&board).is_over());
    }

    #[test]
    fn test_winning_line_anti_diagonal() {
        let board = Board::from_rows(&["  X", " X ", "XOO"]).unwrap();
        assert_eq!(
            winning_line(&board),
            Some(vec![Pos::new(0, 2), Pos::new(1, 1), Pos::new(2, 0)])
        );
    }
}
