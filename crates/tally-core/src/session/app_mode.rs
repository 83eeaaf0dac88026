//! Scoreboard mode types.

use crate::game::GameKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which screen the scoreboard is showing.
///
/// The session record exists only while the mode is `InGame`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Mode {
    /// The game catalog is shown.
    #[default]
    MainMenu,
    /// A game was picked and the player count field is active.
    AwaitingPlayerCount {
        /// The game that will be scored once the count is confirmed.
        game: GameKind,
    },
    /// Players and scores are on screen.
    InGame,
}

impl Mode {
    pub fn is_main_menu(&self) -> bool {
        matches!(self, Mode::MainMenu)
    }

    pub fn is_in_game(&self) -> bool {
        matches!(self, Mode::InGame)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::MainMenu => write!(f, "main menu"),
            Mode::AwaitingPlayerCount { .. } => write!(f, "player count entry"),
            Mode::InGame => write!(f, "game"),
        }
    }
}
