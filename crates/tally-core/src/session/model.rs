//! Session domain model.
//!
//! A `Session` is the in-memory record of the game being scored. It is
//! created when a player count is confirmed and dropped when the user
//! returns to the main menu; nothing in it is ever written to disk.

use super::score_stack::ScoreStack;
use crate::error::{Result, TallyError};
use crate::game::GameKind;
use serde::Serialize;
use uuid::Uuid;

/// Maximum number of players on one scoreboard.
pub const MAX_PLAYERS: usize = 7;

/// One row of the scoreboard.
///
/// Name, score and undo history live together so they cannot drift out of
/// alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSlot {
    /// Display name, freely editable.
    pub name: String,
    /// Current score.
    pub score: i64,
    /// Scores held before each mutation, oldest first.
    pub history: ScoreStack,
}

impl PlayerSlot {
    /// Creates the slot for the player at `index` (0-based) with a zero score.
    pub fn numbered(index: usize) -> Self {
        Self {
            name: default_player_name(index),
            score: 0,
            history: ScoreStack::new(0),
        }
    }
}

/// Default name for the player at `index` (0-based): "Player 1", "Player 2", ...
pub fn default_player_name(index: usize) -> String {
    format!("Player {}", index + 1)
}

/// The game currently being scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    /// Unique session identifier (UUID format), used to correlate log lines
    pub id: String,
    /// Timestamp when the session was created (RFC 3339 format)
    pub started_at: String,
    /// The game selected on the main menu
    pub game: GameKind,
    /// Players in seating order
    pub players: Vec<PlayerSlot>,
    /// The player whose detail panel is open, if any
    pub expanded_index: Option<usize>,
}

impl Session {
    /// Creates a session with `count` numbered players, all on zero.
    ///
    /// `count` must already be validated to `1..=MAX_PLAYERS`.
    pub(crate) fn new(game: GameKind, count: usize) -> Self {
        debug_assert!((1..=MAX_PLAYERS).contains(&count));
        Self {
            id: Uuid::new_v4().to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            game,
            players: (0..count).map(PlayerSlot::numbered).collect(),
            expanded_index: None,
        }
    }

    /// Start time for display, e.g. "14:05 UTC".
    pub fn started_label(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.started_at)
            .map(|t| t.format("%H:%M UTC").to_string())
            .unwrap_or_else(|_| self.started_at.clone())
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the player at `index`, or `IndexOutOfRange`.
    pub fn player(&self, index: usize) -> Result<&PlayerSlot> {
        let len = self.players.len();
        self.players
            .get(index)
            .ok_or(TallyError::IndexOutOfRange { index, len })
    }

    pub(crate) fn player_mut(&mut self, index: usize) -> Result<&mut PlayerSlot> {
        let len = self.players.len();
        self.players
            .get_mut(index)
            .ok_or(TallyError::IndexOutOfRange { index, len })
    }
}
