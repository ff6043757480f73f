//! Game session: the authoritative board and turn order
//!
//! The GUI and the console both drive a `GameSession`. The search engine
//! only ever sees a board passed to it explicitly.

mod history;

pub use history::NodeHistory;

use log::info;

use crate::board::{Board, Player, Pos, Variant};
use crate::engine::{AIEngine, EngineConfig, MoveResult, PruningComparison};
use crate::error::{GameError, Result};
use crate::rules::{outcome, Outcome};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::X }
    }
}

/// Parse a console move such as `"1 2"` or `"1,2"` (zero-based row, col).
pub fn parse_move(input: &str, size: usize) -> Result<Pos> {
    let invalid = || GameError::InvalidMoveInput {
        input: input.trim().to_string(),
    };
    let mut parts = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());

    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let row: u8 = row.parse().map_err(|_| invalid())?;
    let col: u8 = col.parse().map_err(|_| invalid())?;

    if !Pos::is_valid(row as i32, col as i32, size) {
        return Err(GameError::OutOfBounds { row, col, size });
    }
    Ok(Pos::new(row, col))
}

/// One game of Tic-Tac-Toe. X always moves first.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    mode: GameMode,
    current_turn: Player,
    outcome: Outcome,
    move_history: Vec<(Pos, Player)>,
    node_history: NodeHistory,
    last_ai_result: Option<MoveResult>,
    engine: AIEngine,
}

impl GameSession {
    /// New game with the variant's default engine configuration
    pub fn new(variant: Variant, mode: GameMode) -> Self {
        Self::with_config(variant, mode, EngineConfig::for_variant(variant))
    }

    pub fn with_config(variant: Variant, mode: GameMode, config: EngineConfig) -> Self {
        Self {
            board: Board::new(variant),
            mode,
            current_turn: Player::X,
            outcome: Outcome::InProgress,
            move_history: Vec::new(),
            node_history: NodeHistory::new(),
            last_ai_result: None,
            engine: AIEngine::with_config(config),
        }
    }

    /// Start over on an empty board. The node history is kept so the chart
    /// spans several games.
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.variant());
        self.current_turn = Player::X;
        self.outcome = Outcome::InProgress;
        self.move_history.clear();
        self.last_ai_result = None;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn variant(&self) -> Variant {
        self.board.variant()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn engine(&self) -> &AIEngine {
        &self.engine
    }

    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.move_history.last().map(|&(pos, _)| pos)
    }

    pub fn move_history(&self) -> &[(Pos, Player)] {
        &self.move_history
    }

    pub fn node_history(&self) -> &NodeHistory {
        &self.node_history
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn == human,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && !self.is_human_turn()
    }

    /// Place the current player's mark for a human.
    pub fn try_place(&mut self, pos: Pos) -> Result<Outcome> {
        if !self.is_over() && !self.is_human_turn() {
            return Err(GameError::NotYourTurn {
                player: self.current_turn,
            });
        }
        self.play(pos)
    }

    /// Place the current player's mark, whoever is moving.
    pub fn play(&mut self, pos: Pos) -> Result<Outcome> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.board.contains(pos) {
            return Err(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.board.size(),
            });
        }
        if !self.board.is_empty(pos) {
            return Err(GameError::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }

        let player = self.current_turn;
        self.board.place(pos, player);
        self.move_history.push((pos, player));
        self.outcome = outcome(&self.board);

        match self.outcome {
            Outcome::InProgress => self.current_turn = player.opponent(),
            Outcome::Won(winner) => info!("{} wins after {} moves", winner, self.move_history.len()),
            Outcome::Tie => info!("tie after {} moves", self.move_history.len()),
        }

        Ok(self.outcome)
    }

    /// Search and play the AI's move on the session board.
    ///
    /// Searches with and without pruning, records both node counts, and
    /// plays the move of the configured pruning setting.
    pub fn ai_move(&mut self) -> Result<PruningComparison> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let comparison = self.engine.compare_pruning(&self.board, self.current_turn);
        self.apply_ai_result(&comparison)?;
        Ok(comparison)
    }

    /// Record a finished AI search and play its move.
    ///
    /// The search may have run elsewhere (the GUI runs it on a worker
    /// thread). A result without a move is rejected, never applied.
    pub fn apply_ai_result(&mut self, comparison: &PruningComparison) -> Result<Outcome> {
        self.node_history.record(comparison);
        let played = *comparison.played(self.engine.config().pruning);
        self.last_ai_result = Some(played);

        let pos = played.best_move.ok_or(GameError::NoLegalMove)?;
        self.play(pos)
    }

    /// Take back the last move; in PvE also the AI's reply before it, so
    /// the human is to move again.
    pub fn undo(&mut self) -> Result<()> {
        if self.move_history.is_empty() {
            return Err(GameError::NothingToUndo);
        }

        let mut count = match self.mode {
            GameMode::PvE { .. } if self.move_history.len() >= 2 => 2,
            _ => 1,
        };
        if let GameMode::PvE { human } = self.mode {
            // Only one move to take back when the human made the last move
            // (the AI has not answered yet, or the human ended the game)
            if self.move_history.last().map(|&(_, p)| p) == Some(human) {
                count = 1;
            }
        }

        for _ in 0..count {
            if let Some((pos, player)) = self.move_history.pop() {
                self.board.clear(pos);
                self.current_turn = player;
            }
        }
        self.outcome = outcome(&self.board);
        self.last_ai_result = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvp(variant: Variant) -> GameSession {
        GameSession::new(variant, GameMode::PvP)
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("1 2", 3), Ok(Pos::new(1, 2)));
        assert_eq!(parse_move(" 3,0 \n", 4), Ok(Pos::new(3, 0)));
        assert_eq!(
            parse_move("3 0", 3),
            Err(GameError::OutOfBounds { row: 3, col: 0, size: 3 })
        );
        for bad in ["", "1", "1 2 3", "a b", "-1 0", "300 0"] {
            assert!(
                matches!(parse_move(bad, 3), Err(GameError::InvalidMoveInput { .. })),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_turns_alternate_from_x() {
        let mut game = pvp(Variant::Classic);
        assert_eq!(game.current_turn(), Player::X);
        game.play(Pos::new(0, 0)).unwrap();
        assert_eq!(game.current_turn(), Player::O);
        game.play(Pos::new(1, 1)).unwrap();
        assert_eq!(game.current_turn(), Player::X);
        assert_eq!(game.last_move(), Some(Pos::new(1, 1)));
    }

    #[test]
    fn test_rejects_bad_moves() {
        let mut game = pvp(Variant::Classic);
        game.play(Pos::new(0, 0)).unwrap();
        assert_eq!(
            game.play(Pos::new(0, 0)),
            Err(GameError::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(
            game.play(Pos::new(3, 0)),
            Err(GameError::OutOfBounds { row: 3, col: 0, size: 3 })
        );
        // Rejected moves do not change the turn
        assert_eq!(game.current_turn(), Player::O);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = pvp(Variant::Classic);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            game.play(Pos::new(row, col)).unwrap();
        }
        assert_eq!(game.play(Pos::new(0, 2)), Ok(Outcome::Won(Player::X)));
        assert!(game.is_over());
        assert_eq!(game.play(Pos::new(2, 2)), Err(GameError::GameOver));
    }

    #[test]
    fn test_human_cannot_move_for_ai() {
        let mut game = GameSession::new(Variant::Classic, GameMode::PvE { human: Player::O });
        assert!(game.is_ai_turn());
        assert_eq!(
            game.try_place(Pos::new(0, 0)),
            Err(GameError::NotYourTurn { player: Player::X })
        );
    }

    #[test]
    fn test_ai_answers_human() {
        let mut game = GameSession::new(Variant::Classic, GameMode::default());
        game.try_place(Pos::new(0, 0)).unwrap();
        assert!(game.is_ai_turn());

        let comparison = game.ai_move().unwrap();
        assert_eq!(game.move_history().len(), 2);
        assert_eq!(game.last_move(), comparison.pruned.best_move);
        assert_eq!(game.node_history().len(), 1);
        assert!(game.is_human_turn());
        assert_eq!(game.last_ai_result(), Some(&comparison.pruned));
    }

    #[test]
    fn test_ai_plays_to_a_tie_against_itself() {
        let mut game = pvp(Variant::Classic);
        game.play(Pos::new(1, 1)).unwrap();
        while !game.is_over() {
            game.ai_move().unwrap();
        }
        assert_eq!(game.outcome(), Outcome::Tie);
        assert_eq!(game.node_history().len(), 8);
    }

    #[test]
    fn test_ai_move_after_game_over() {
        let mut game = pvp(Variant::Classic);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(Pos::new(row, col)).unwrap();
        }
        assert_eq!(game.ai_move().unwrap_err(), GameError::GameOver);
    }

    #[test]
    fn test_undo_pve_takes_back_pair() {
        let mut game = GameSession::new(Variant::Extended, GameMode::default());
        game.try_place(Pos::new(0, 0)).unwrap();
        game.ai_move().unwrap();
        assert_eq!(game.move_history().len(), 2);

        game.undo().unwrap();
        assert!(game.move_history().is_empty());
        assert!(game.board().is_board_empty());
        assert_eq!(game.current_turn(), Player::X);
        assert_eq!(game.undo(), Err(GameError::NothingToUndo));
    }

    #[test]
    fn test_undo_reopens_finished_game() {
        let mut game = pvp(Variant::Classic);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play(Pos::new(row, col)).unwrap();
        }
        game.undo().unwrap();
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.current_turn(), Player::X);
    }

    #[test]
    fn test_reset_keeps_node_history() {
        let mut game = GameSession::new(Variant::Classic, GameMode::default());
        game.try_place(Pos::new(1, 1)).unwrap();
        game.ai_move().unwrap();
        game.reset();
        assert!(game.board().is_board_empty());
        assert_eq!(game.current_turn(), Player::X);
        assert_eq!(game.node_history().len(), 1);
    }
}
