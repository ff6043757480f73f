//! Board structure backed by one bitboard per side

use super::bitboard::Bitboard;
use super::{Cell, Player, Pos, Variant};
use crate::error::GameError;

/// Game board for one of the two variants.
///
/// The board is `Copy`: the search mutates it in place and undoes every
/// move, and tests snapshot it with a plain copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    variant: Variant,
    /// X marks
    x: Bitboard,
    /// O marks
    o: Bitboard,
}

impl Board {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    /// Parse a board from one string per row.
    ///
    /// `X`/`x` and `O`/`o` are marks; space, `.`, `_` and `-` are empty.
    /// The number of rows picks the variant.
    ///
    /// ```
    /// use tictactoe::{Board, Cell, Pos};
    ///
    /// let board = Board::from_rows(&["XX ", "OO ", "   "]).unwrap();
    /// assert_eq!(board.get(Pos::new(0, 1)), Cell::X);
    /// assert_eq!(board.open_cells().len(), 5);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, GameError> {
        let variant = Variant::from_size(rows.len())
            .ok_or(GameError::UnsupportedSize { size: rows.len() })?;
        let size = variant.size();
        let mut board = Board::new(variant);

        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != size {
                return Err(GameError::InvalidBoardShape {
                    row,
                    expected: size,
                    got: chars.len(),
                });
            }
            for (col, ch) in chars.into_iter().enumerate() {
                let pos = Pos::new(row as u8, col as u8);
                match ch {
                    'X' | 'x' => board.place(pos, Player::X),
                    'O' | 'o' => board.place(pos, Player::O),
                    ' ' | '.' | '_' | '-' => {}
                    character => {
                        return Err(GameError::InvalidCell { character, row, col });
                    }
                }
            }
        }

        Ok(board)
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.variant.size()
    }

    /// True if `pos` lies on this board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        Pos::is_valid(pos.row as i32, pos.col as i32, self.size())
    }

    /// Get the cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        let idx = pos.to_index(self.size());
        if self.x.get(idx) {
            Cell::X
        } else if self.o.get(idx) {
            Cell::O
        } else {
            Cell::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Put a mark on a cell. Does not check that the cell is free;
    /// the session validates human moves before calling this.
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        let idx = pos.to_index(self.size());
        match player {
            Player::X => self.x.set(idx),
            Player::O => self.o.set(idx),
        }
    }

    /// Reset a cell to empty
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size());
        self.x.clear(idx);
        self.o.clear(idx);
    }

    /// Bitboard of one side's marks
    #[inline]
    pub fn marks(&self, player: Player) -> Bitboard {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Bitboard of all occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        Bitboard::from_bits(self.x.bits() | self.o.bits())
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.mark_count() as usize == self.variant.cell_count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }

    /// All empty cells in row-major order.
    ///
    /// The order fixes which of several equally scored moves the search
    /// picks, so it must stay row-major.
    pub fn open_cells(&self) -> Vec<Pos> {
        let size = self.size();
        let occupied = self.occupied();
        (0..self.variant.cell_count())
            .filter(|&idx| !occupied.get(idx))
            .map(|idx| Pos::from_index(idx, size))
            .collect()
    }

    /// Number of empty cells
    #[inline]
    pub fn open_count(&self) -> usize {
        self.variant.cell_count() - self.mark_count() as usize
    }

    /// Rows as strings, one char per cell (space for empty)
    pub fn to_rows(&self) -> Vec<String> {
        let size = self.size();
        (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| self.get(Pos::new(row as u8, col as u8)).symbol())
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.size();
        let separator = vec!["---"; size].join("+");
        for (i, row) in self.to_rows().iter().enumerate() {
            let cells: Vec<String> = row.chars().map(|c| format!(" {} ", c)).collect();
            writeln!(f, "{}", cells.join("|"))?;
            if i + 1 < size {
                writeln!(f, "{}", separator)?;
            }
        }
        Ok(())
    }
}
