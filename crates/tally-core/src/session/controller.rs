//! The scoreboard state machine.

use super::app_mode::Mode;
use super::model::{MAX_PLAYERS, PlayerSlot, Session};
use super::view::{PlayerView, ScoreboardView};
use crate::config::ValidationPolicy;
use crate::error::{Result, TallyError};
use crate::game::{GameKind, PresetTable};
use tracing::{debug, info};

/// Owns the scoreboard state and is the only way to change it.
///
/// `ScoreboardController` is responsible for:
/// - Moving between the main menu, player count entry and the game screen
/// - Creating the session on a valid player count and discarding it on exit
/// - Score changes, each recorded on the player's undo stack
/// - Which player's detail panel is open
///
/// Every operation either applies its change or returns an error without
/// touching any state.
#[derive(Debug, Default)]
pub struct ScoreboardController {
    mode: Mode,
    session: Option<Session>,
    policy: ValidationPolicy,
}

impl ScoreboardController {
    /// Creates a controller on the main menu with the permissive default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller on the main menu with the given validation policy.
    pub fn with_policy(policy: ValidationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    // ============================================================================
    // Read access
    // ============================================================================

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The active session; `Some` exactly when the mode is `InGame`.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Player names in seating order (empty outside a game).
    pub fn players(&self) -> Vec<&str> {
        self.slots().iter().map(|p| p.name.as_str()).collect()
    }

    /// Scores aligned with `players()` (empty outside a game).
    pub fn scores(&self) -> Vec<i64> {
        self.slots().iter().map(|p| p.score).collect()
    }

    pub fn expanded_index(&self) -> Option<usize> {
        self.session.as_ref().and_then(|s| s.expanded_index)
    }

    /// Undo history of the player at `index`, oldest first.
    pub fn history(&self, index: usize) -> Result<&[i64]> {
        Ok(self.slot(index)?.history.as_slice())
    }

    /// Preset buttons of the game being set up or played.
    pub fn presets(&self) -> Option<PresetTable> {
        self.current_game().map(GameKind::presets)
    }

    /// The game picked from the main menu, if any.
    pub fn current_game(&self) -> Option<GameKind> {
        match self.mode {
            Mode::AwaitingPlayerCount { game } => Some(game),
            _ => self.session.as_ref().map(|s| s.game),
        }
    }

    /// A snapshot of everything a presentation layer renders.
    pub fn view(&self) -> ScoreboardView {
        let expanded = self.expanded_index();
        ScoreboardView {
            mode: self.mode,
            game: self.current_game(),
            started: self.session.as_ref().map(Session::started_label),
            players: self
                .slots()
                .iter()
                .enumerate()
                .map(|(index, slot)| PlayerView {
                    index,
                    name: slot.name.clone(),
                    score: slot.score,
                    expanded: expanded == Some(index),
                    can_undo: slot.history.can_undo(),
                })
                .collect(),
            expanded_index: expanded,
        }
    }

    // ============================================================================
    // Mode transitions
    // ============================================================================

    /// Picks a game from the main menu and opens player count entry.
    pub fn start_game(&mut self, game: GameKind) -> Result<()> {
        if !self.mode.is_main_menu() {
            debug!(mode = %self.mode, "start_game rejected");
            return Err(TallyError::invalid_transition("start a game", self.mode));
        }
        self.mode = Mode::AwaitingPlayerCount { game };
        debug!(%game, "Awaiting player count");
        Ok(())
    }

    /// Parses the player count and, if it is within `1..=7`, starts the game.
    ///
    /// The input must be the bare number: surrounding whitespace is rejected.
    ///
    /// Returns the number of players.
    pub fn confirm_player_count(&mut self, input: &str) -> Result<usize> {
        let Mode::AwaitingPlayerCount { game } = self.mode else {
            debug!(mode = %self.mode, "confirm_player_count rejected");
            return Err(TallyError::invalid_transition(
                "confirm player count",
                self.mode,
            ));
        };

        let count = match input.parse::<i64>() {
            Ok(n) if (1..=MAX_PLAYERS as i64).contains(&n) => n as usize,
            _ => {
                debug!(input, "Invalid player count");
                return Err(TallyError::invalid_player_count(input));
            }
        };

        let session = Session::new(game, count);
        info!(
            session_id = %session.id,
            started_at = %session.started_at,
            %game,
            players = count,
            "Session started"
        );
        self.session = Some(session);
        self.mode = Mode::InGame;
        Ok(count)
    }

    /// Discards the session and returns to the main menu.
    ///
    /// Accepted from every mode; on the main menu it changes nothing.
    pub fn exit_to_main_menu(&mut self) {
        if let Some(session) = self.session.take() {
            info!(session_id = %session.id, "Session discarded");
        }
        self.mode = Mode::MainMenu;
    }

    // ============================================================================
    // Player operations
    // ============================================================================

    /// Opens the detail panel of `index`, or closes it if it is already open.
    ///
    /// Opening one panel closes any other. Returns the new expanded index.
    pub fn toggle_expanded(&mut self, index: usize) -> Result<Option<usize>> {
        let session = self.session_for(index)?;
        session.expanded_index = if session.expanded_index == Some(index) {
            None
        } else {
            Some(index)
        };
        debug!(player = index, expanded = ?session.expanded_index, "Panel toggled");
        Ok(session.expanded_index)
    }

    /// Adds `points` (any sign) to a player's score. Returns the new score.
    pub fn add_score(&mut self, index: usize, points: i64) -> Result<i64> {
        let slot = self.slot_mut(index)?;
        let before = slot.score;
        slot.history.push(before);
        slot.score = before.saturating_add(points);
        debug!(player = index, points, from = before, to = slot.score, "Score added");
        Ok(slot.score)
    }

    /// Adds the preset points for a route of `trains` cars.
    pub fn add_preset(&mut self, index: usize, trains: u8) -> Result<i64> {
        self.slot(index)?;
        let points = self
            .presets()
            .and_then(|table| table.points_for(trains))
            .ok_or(TallyError::UnknownPreset { trains })?;
        self.add_score(index, points)
    }

    /// Parses a typed score and adds it to a player's score.
    pub fn add_custom_score(&mut self, index: usize, input: &str) -> Result<i64> {
        self.slot(index)?;
        let points = input
            .parse::<i64>()
            .map_err(|_| TallyError::invalid_score(input))?;
        if points < 0 && !self.policy.allow_negative_custom_scores {
            return Err(TallyError::NegativeScore { value: points });
        }
        self.add_score(index, points)
    }

    /// Reverts a player's most recent score change.
    ///
    /// Returns the restored score, or `None` when there is nothing left to
    /// undo (state is left as is).
    pub fn undo_score(&mut self, index: usize) -> Result<Option<i64>> {
        let slot = self.slot_mut(index)?;
        let Some(previous) = slot.history.pop() else {
            debug!(player = index, "Nothing to undo");
            return Ok(None);
        };
        debug!(player = index, from = slot.score, to = previous, "Score undone");
        slot.score = previous;
        Ok(Some(previous))
    }

    /// Sets a player's score to zero. Undoable.
    pub fn reset_score(&mut self, index: usize) -> Result<()> {
        let slot = self.slot_mut(index)?;
        slot.history.push(slot.score);
        debug!(player = index, from = slot.score, "Score reset");
        slot.score = 0;
        Ok(())
    }

    /// Replaces a player's display name. Score and history are unaffected.
    pub fn rename_player(&mut self, index: usize, name: &str) -> Result<()> {
        if self.policy.reject_blank_names && name.trim().is_empty() {
            self.slot(index)?;
            return Err(TallyError::BlankName);
        }
        let slot = self.slot_mut(index)?;
        debug!(player = index, from = %slot.name, to = name, "Player renamed");
        slot.name = name.to_string();
        Ok(())
    }

    // ============================================================================
    // Helpers
    // ============================================================================

    fn slots(&self) -> &[PlayerSlot] {
        self.session
            .as_ref()
            .map(|s| s.players.as_slice())
            .unwrap_or(&[])
    }

    fn slot(&self, index: usize) -> Result<&PlayerSlot> {
        match self.session.as_ref() {
            Some(session) => session.player(index),
            None => Err(TallyError::IndexOutOfRange { index, len: 0 }),
        }
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut PlayerSlot> {
        self.session_for(index)?.player_mut(index)
    }

    /// The active session, provided `index` names one of its players.
    fn session_for(&mut self, index: usize) -> Result<&mut Session> {
        match self.session.as_mut() {
            Some(session) if index < session.players.len() => Ok(session),
            Some(session) => Err(TallyError::IndexOutOfRange {
                index,
                len: session.players.len(),
            }),
            None => Err(TallyError::IndexOutOfRange { index, len: 0 }),
        }
    }
}
