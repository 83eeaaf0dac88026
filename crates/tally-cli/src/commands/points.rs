use anyhow::{Context, Result};
use serde::Serialize;
use tally_core::game::GameKind;

#[derive(Serialize)]
struct PointsRow {
    trains: u8,
    points: i64,
    label: String,
}

fn rows(game: GameKind) -> Vec<PointsRow> {
    game.presets()
        .iter()
        .map(|p| PointsRow {
            trains: p.trains,
            points: p.points,
            label: p.label(),
        })
        .collect()
}

/// Renders the preset table as text or pretty JSON.
pub fn render(game: GameKind, json: bool) -> Result<String> {
    let rows = rows(game);
    if json {
        return serde_json::to_string_pretty(&rows).context("Failed to serialize point table");
    }

    let mut out = format!("{}\n", game.title());
    out.push_str("Trains  Points\n");
    for row in rows {
        out.push_str(&format!("{:>6}  {:>6}\n", row.trains, row.points));
    }
    Ok(out)
}

pub fn print(game: GameKind, json: bool) -> Result<()> {
    println!("{}", render(game, json)?.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_json_rows() {
        let json = render(GameKind::TicketToRide, true).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[3]["trains"], 4);
        assert_eq!(rows[3]["points"], 7);
        assert_eq!(rows[5]["label"], "7 Trains");
    }

    #[test]
    fn test_text_table_skips_five() {
        let text = render(GameKind::TicketToRide, false).unwrap();
        assert!(text.starts_with("Ticket to Ride"));
        assert!(text.contains("     6      15"));
        assert!(!text.contains("     5  "));
    }
}
