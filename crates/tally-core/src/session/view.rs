//! Read-only snapshots for presentation layers.

use super::app_mode::Mode;
use crate::game::GameKind;
use serde::Serialize;

/// Everything a front end needs to draw the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardView {
    pub mode: Mode,
    /// The game picked on the main menu (None on the main menu itself).
    pub game: Option<GameKind>,
    /// When the current game started (None outside a game).
    pub started: Option<String>,
    pub players: Vec<PlayerView>,
    pub expanded_index: Option<usize>,
}

/// One player row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    /// 0-based seat index; pass this back into controller operations.
    pub index: usize,
    pub name: String,
    pub score: i64,
    /// Whether this player's detail panel is open.
    pub expanded: bool,
    /// Whether the undo button has anything to revert.
    pub can_undo: bool,
}

impl ScoreboardView {
    /// The player whose panel is open, if any.
    pub fn expanded_player(&self) -> Option<&PlayerView> {
        self.expanded_index.and_then(|i| self.players.get(i))
    }
}
