//! Game state for the GUI: a session plus the AI worker thread

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use log::warn;

use crate::board::{Pos, Variant};
use crate::engine::{EngineConfig, PruningComparison};
use crate::error::GameError;
use crate::game::{GameMode, GameSession};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<PruningComparison>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub session: GameSession,
    pub ai_state: AiState,
    pub ai_thinking_time: Option<Duration>,
    pub message: Option<String>,
    last_comparison: Option<PruningComparison>,
    config: EngineConfig,
}

impl GameState {
    pub fn new(session: GameSession) -> Self {
        let config = *session.engine().config();
        Self {
            session,
            ai_state: AiState::Idle,
            ai_thinking_time: None,
            message: None,
            last_comparison: None,
            config,
        }
    }

    /// Start over on the same variant and mode. A search still running is
    /// abandoned; its result is dropped with the receiver.
    pub fn reset(&mut self) {
        self.session.reset();
        self.ai_state = AiState::Idle;
        self.ai_thinking_time = None;
        self.message = None;
        self.last_comparison = None;
    }

    /// Start a new game, keeping the engine settings except those tied to
    /// the variant
    pub fn new_game(&mut self, variant: Variant, mode: GameMode) {
        let mut config = EngineConfig::for_variant(variant);
        config.pruning = self.config.pruning;
        if variant == self.session.variant() {
            config = self.config;
        }
        self.config = config;
        self.session = GameSession::with_config(variant, mode, config);
        self.ai_state = AiState::Idle;
        self.ai_thinking_time = None;
        self.message = None;
        self.last_comparison = None;
    }

    /// Both searches of the last AI turn, while its move is on the board
    pub fn last_comparison(&self) -> Option<&PruningComparison> {
        self.last_comparison.as_ref()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Place the human's mark at `pos`
    pub fn try_place(&mut self, pos: Pos) -> Result<(), GameError> {
        if self.is_ai_thinking() {
            return Err(GameError::AiThinking);
        }
        self.session.try_place(pos)?;
        self.message = None;
        Ok(())
    }

    /// Start AI thinking on a worker thread against a copy of the board
    pub fn start_ai_thinking(&mut self) {
        if !self.session.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let board = *self.session.board();
        let player = self.session.current_turn();
        let engine = self.session.engine().clone();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let comparison = engine.compare_pruning(&board, player);
            let _ = tx.send(comparison);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(comparison) => Some((comparison, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((comparison, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.ai_thinking_time = Some(elapsed);
            match self.session.apply_ai_result(&comparison) {
                Ok(_) => self.last_comparison = Some(comparison),
                Err(e) => {
                    warn!("AI result rejected: {}", e);
                    self.message = Some(e.to_string());
                }
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo last move (and the AI's reply in PvE)
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            self.message = Some(GameError::AiThinking.to_string());
            return;
        }
        match self.session.undo() {
            Ok(()) => {
                self.message = None;
                self.last_comparison = None;
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }
}
