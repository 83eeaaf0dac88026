//! Preset point tables.

use serde::Serialize;

/// One quick-entry button: claiming a route of `trains` cars scores `points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub trains: u8,
    pub points: i64,
}

impl Preset {
    /// Button label, e.g. "1 Train" or "4 Trains".
    pub fn label(&self) -> String {
        if self.trains == 1 {
            "1 Train".to_string()
        } else {
            format!("{} Trains", self.trains)
        }
    }
}

/// Route scoring for Ticket to Ride.
///
/// There is no 5-train button: the board has no 5-car routes.
pub const TICKET_TO_RIDE_PRESETS: &[Preset] = &[
    Preset { trains: 1, points: 1 },
    Preset { trains: 2, points: 2 },
    Preset { trains: 3, points: 4 },
    Preset { trains: 4, points: 7 },
    Preset { trains: 6, points: 15 },
    Preset { trains: 7, points: 21 },
];

/// A game's fixed trains-to-points mapping, in button order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PresetTable {
    presets: &'static [Preset],
}

impl PresetTable {
    pub const fn new(presets: &'static [Preset]) -> Self {
        Self { presets }
    }

    /// Points for a route of `trains` cars, if a button exists for it.
    pub fn points_for(&self, trains: u8) -> Option<i64> {
        self.presets
            .iter()
            .find(|p| p.trains == trains)
            .map(|p| p.points)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_to_ride_table() {
        let table = PresetTable::new(TICKET_TO_RIDE_PRESETS);
        let pairs: Vec<(u8, i64)> = table.iter().map(|p| (p.trains, p.points)).collect();
        assert_eq!(
            pairs,
            vec![(1, 1), (2, 2), (3, 4), (4, 7), (6, 15), (7, 21)]
        );
    }

    #[test]
    fn test_no_five_train_preset() {
        let table = PresetTable::new(TICKET_TO_RIDE_PRESETS);
        assert_eq!(table.points_for(5), None);
        assert_eq!(table.points_for(6), Some(15));
    }

    #[test]
    fn test_labels() {
        assert_eq!(TICKET_TO_RIDE_PRESETS[0].label(), "1 Train");
        assert_eq!(TICKET_TO_RIDE_PRESETS[5].label(), "7 Trains");
    }
}
