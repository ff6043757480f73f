//! Board representation for Tic-Tac-Toe

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Largest supported side length (4x4)
pub const MAX_SIZE: usize = 4;
pub const MAX_CELLS: usize = MAX_SIZE * MAX_SIZE; // 16

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Character used in board strings and the console
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Owner of the cell, if any
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

/// Side to move. O maximizes the score, X minimizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// True for the side that maximizes the score
    #[inline]
    pub fn is_maximizing(self) -> bool {
        self == Player::O
    }

    pub fn symbol(self) -> char {
        Cell::from(self).symbol()
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// How non-terminal leaves are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// +1 / -1 / 0 from the winner only. Meant for full-depth search.
    Exact,
    /// Sum of per-line scores over every row, column and diagonal.
    LineHeuristic,
}

/// The two supported board variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// 3x3, searched to the end of the game
    #[default]
    Classic,
    /// 4x4, depth-limited with the line heuristic
    Extended,
}

impl Variant {
    /// Side length of the grid
    #[inline]
    pub fn size(self) -> usize {
        match self {
            Variant::Classic => 3,
            Variant::Extended => 4,
        }
    }

    #[inline]
    pub fn cell_count(self) -> usize {
        self.size() * self.size()
    }

    /// Evaluation policy the variant is played with
    pub fn evaluation(self) -> Evaluation {
        match self {
            Variant::Classic => Evaluation::Exact,
            Variant::Extended => Evaluation::LineHeuristic,
        }
    }

    /// Default search depth cap for the AI
    pub fn default_depth(self) -> u8 {
        match self {
            Variant::Classic => 9,
            Variant::Extended => 4,
        }
    }

    /// Variant for a side length, if supported
    pub fn from_size(size: usize) -> Option<Variant> {
        match size {
            3 => Some(Variant::Classic),
            4 => Some(Variant::Extended),
            _ => None,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_SIZE && (col as usize) < MAX_SIZE);
        Self { row, col }
    }

    /// Row-major index for a board of side `size`
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
