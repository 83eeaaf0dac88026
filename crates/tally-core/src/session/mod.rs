//! Session domain module.
//!
//! This module contains the scoreboard state machine and the in-memory
//! session record it owns.
//!
//! # Module Structure
//!
//! - `app_mode`: Screen state (`Mode`)
//! - `model`: The session record (`Session`, `PlayerSlot`)
//! - `score_stack`: Per-player undo stack (`ScoreStack`)
//! - `controller`: All state transitions (`ScoreboardController`)
//! - `view`: Render snapshots (`ScoreboardView`, `PlayerView`)
//!
//! # Usage
//!
//! ```
//! use tally_core::game::GameKind;
//! use tally_core::session::ScoreboardController;
//!
//! let mut board = ScoreboardController::new();
//! board.start_game(GameKind::TicketToRide)?;
//! board.confirm_player_count("3")?;
//! board.add_preset(0, 4)?;
//! assert_eq!(board.scores(), vec![7, 0, 0]);
//! # Ok::<(), tally_core::TallyError>(())
//! ```

mod app_mode;
mod controller;
mod model;
mod score_stack;
mod view;

// Re-export public API
pub use app_mode::Mode;
pub use controller::ScoreboardController;
pub use model::{MAX_PLAYERS, PlayerSlot, Session, default_player_name};
pub use score_stack::ScoreStack;
pub use view::{PlayerView, ScoreboardView};
