//! Game catalog.
//!
//! The main menu lists the games Tally knows how to score. Each game carries
//! its own preset point table for the quick-entry buttons.

mod points;

pub use points::{Preset, PresetTable, TICKET_TO_RIDE_PRESETS};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A game selectable from the main menu.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GameKind {
    /// Ticket to Ride: route claiming scored by train count.
    #[default]
    #[strum(to_string = "ticket_to_ride", serialize = "ticket", serialize = "ttr")]
    TicketToRide,
}

impl GameKind {
    /// Title shown on the main menu button.
    pub fn title(self) -> &'static str {
        match self {
            GameKind::TicketToRide => "Ticket to Ride",
        }
    }

    /// Quick-entry buttons shown in a player's expanded panel.
    pub fn presets(self) -> PresetTable {
        match self {
            GameKind::TicketToRide => PresetTable::new(TICKET_TO_RIDE_PRESETS),
        }
    }

    /// All games in main menu order.
    pub fn catalog() -> Vec<GameKind> {
        GameKind::iter().collect()
    }
}
