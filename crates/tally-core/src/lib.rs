//! Core of the Tally scoreboard: the state machine, its session record and
//! the preset point tables.

pub mod config;
pub mod error;
pub mod game;
pub mod session;

// Re-export common types
pub use error::{Result, TallyError};
pub use session::{Mode, ScoreboardController};
