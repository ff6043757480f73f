//! Command-line configuration shared by the GUI and console binaries

use clap::{Parser, ValueEnum};

use crate::board::{Player, Variant};
use crate::engine::EngineConfig;
use crate::game::{GameMode, GameSession};

/// Symbol choice on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Tic-Tac-Toe against a minimax AI", long_about = None)]
pub struct Cli {
    /// Board size (3 or 4)
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(3..=4))]
    pub size: u8,

    /// Search depth cap (default: 9 on 3x3, 4 on 4x4)
    #[arg(short, long)]
    pub depth: Option<u8>,

    /// Play the unpruned search's move (node counts are still compared)
    #[arg(long)]
    pub no_pruning: bool,

    /// Use iterative deepening (default on 4x4)
    #[arg(long, conflicts_with = "fixed_depth")]
    pub iterative: bool,

    /// Use a single fixed-depth search (default on 3x3)
    #[arg(long)]
    pub fixed_depth: bool,

    /// Symbol the AI plays; X always moves first
    #[arg(long, value_enum, default_value_t = Side::O)]
    pub ai: Side,

    /// Two human players, no AI
    #[arg(long)]
    pub pvp: bool,
}

impl Cli {
    pub fn variant(&self) -> Variant {
        Variant::from_size(self.size as usize).unwrap_or_default()
    }

    pub fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::for_variant(self.variant());
        if let Some(depth) = self.depth {
            config.max_depth = depth;
        }
        if self.no_pruning {
            config.pruning = false;
        }
        if self.iterative {
            config.iterative = true;
        }
        if self.fixed_depth {
            config.iterative = false;
        }
        config
    }

    pub fn mode(&self) -> GameMode {
        if self.pvp {
            GameMode::PvP
        } else {
            GameMode::PvE {
                human: Player::from(self.ai).opponent(),
            }
        }
    }

    /// Fresh session for these settings
    pub fn session(&self) -> GameSession {
        GameSession::with_config(self.variant(), self.mode(), self.engine_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.variant(), Variant::Classic);
        assert_eq!(cli.engine_config(), EngineConfig::for_variant(Variant::Classic));
        assert_eq!(cli.mode(), GameMode::PvE { human: Player::X });
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "tictactoe", "--size", "4", "--depth", "2", "--no-pruning", "--fixed-depth", "--ai", "x",
        ])
        .unwrap();
        let config = cli.engine_config();
        assert_eq!(cli.variant(), Variant::Extended);
        assert_eq!(config.max_depth, 2);
        assert!(!config.pruning);
        assert!(!config.iterative);
        assert_eq!(cli.mode(), GameMode::PvE { human: Player::O });

        let session = cli.session();
        assert_eq!(session.variant(), Variant::Extended);
        assert!(session.is_ai_turn());
    }

    #[test]
    fn test_rejects_unsupported_size() {
        assert!(Cli::try_parse_from(["tictactoe", "--size", "5"]).is_err());
        assert!(Cli::try_parse_from(["tictactoe", "--iterative", "--fixed-depth"]).is_err());
    }

    #[test]
    fn test_pvp_mode() {
        let cli = Cli::try_parse_from(["tictactoe", "--pvp", "--iterative"]).unwrap();
        assert_eq!(cli.mode(), GameMode::PvP);
        assert!(cli.engine_config().iterative);
    }
}
