//! Screen rendering.
//!
//! Turns a `ScoreboardView` into colored lines. Nothing here mutates state.

use colored::Colorize;
use tally_core::Mode;
use tally_core::game::{GameKind, PresetTable};
use tally_core::session::{MAX_PLAYERS, PlayerView, ScoreboardView};

/// Renders the current screen.
pub fn screen(view: &ScoreboardView) -> Vec<String> {
    match view.mode {
        Mode::MainMenu => main_menu(),
        Mode::AwaitingPlayerCount { game } => player_count_prompt(game),
        Mode::InGame => game_board(view),
    }
}

fn main_menu() -> Vec<String> {
    let mut lines = vec!["=== Main Menu ===".bright_magenta().bold().to_string()];
    for (i, game) in GameKind::catalog().into_iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, game.title().bright_blue().bold()));
    }
    lines.push("Type 'play' or a game number to start.".bright_black().to_string());
    lines
}

fn player_count_prompt(game: GameKind) -> Vec<String> {
    vec![
        format!("=== {} ===", game.title()).bright_magenta().bold().to_string(),
        format!("Enter number of players (1-{MAX_PLAYERS})")
            .bright_yellow()
            .to_string(),
    ]
}

fn game_board(view: &ScoreboardView) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(game) = view.game {
        let mut header = format!("=== {} ===", game.title())
            .bright_magenta()
            .bold()
            .to_string();
        if let Some(started) = &view.started {
            header.push_str(&format!("  {}", format!("started {started}").bright_black()));
        }
        lines.push(header);
    }

    let width = view
        .players
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0);

    for player in &view.players {
        lines.push(player_row(player, width));
        if player.expanded {
            if let Some(game) = view.game {
                lines.extend(player_panel(player, game.presets()));
            }
        }
    }
    lines.push("[x] main menu".red().to_string());
    lines
}

fn player_row(player: &PlayerView, width: usize) -> String {
    let marker = if player.expanded { "▾" } else { "▸" };
    let name = format!("{:<width$}", player.name);
    format!(
        "{} {}. {}  Score: {}",
        marker,
        player.index + 1,
        name.bright_cyan(),
        player.score.to_string().bold()
    )
}

fn player_panel(player: &PlayerView, presets: PresetTable) -> Vec<String> {
    let buttons: Vec<String> = presets
        .iter()
        .map(|p| format!("[{} +{}]", p.label(), p.points))
        .collect();

    let mut lines = Vec::new();
    for pair in buttons.chunks(2) {
        lines.push(format!("      {}", pair.join("  ")));
    }
    lines.push(
        "      trains <n> | add <score> | name <player> <new name>"
            .bright_black()
            .to_string(),
    );

    let undo = if player.can_undo {
        "undo".yellow().to_string()
    } else {
        "undo".bright_black().to_string()
    };
    lines.push(format!("      {} | {}", undo, "reset".red()));
    lines
}

/// Help text for the current mode.
pub fn help(mode: &Mode) -> Vec<String> {
    let entries: &[(&str, &str)] = match mode {
        Mode::MainMenu => &[
            ("play [game]", "start scoring a game"),
            ("<n>", "start game number n"),
        ],
        Mode::AwaitingPlayerCount { .. } => &[
            ("<n>", "set the number of players (1-7)"),
            ("x | menu | exit", "back to the main menu"),
        ],
        Mode::InGame => &[
            ("<p> | open <p>", "open or close player p's panel"),
            ("trains <n> [p]", "score a route of n trains"),
            ("add <score> [p]", "add a custom score (may be negative)"),
            ("undo [p]", "revert the last score change"),
            ("reset [p]", "set the score to 0 (undoable)"),
            ("name <p> [name]", "rename player p"),
            ("show", "redraw the board"),
            ("x | menu | exit", "end the game and return to the main menu"),
        ],
    };

    let mut lines: Vec<String> = entries
        .iter()
        .map(|(usage, what)| format!("  {:<18} {}", usage.bright_cyan(), what))
        .collect();
    lines.push(format!("  {:<18} {}", "quit".bright_cyan(), "leave Tally"));
    if mode.is_in_game() {
        lines.push("  [p] defaults to the open panel.".bright_black().to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::ScoreboardController;

    fn board(count: &str) -> ScoreboardController {
        let mut board = ScoreboardController::new();
        board.start_game(GameKind::TicketToRide).unwrap();
        board.confirm_player_count(count).unwrap();
        board
    }

    #[test]
    fn test_main_menu_lists_games() {
        let view = ScoreboardController::new().view();
        let text = screen(&view).join("\n");
        assert!(text.contains("Ticket to Ride"));
    }

    #[test]
    fn test_collapsed_board_has_no_buttons() {
        let view = board("3").view();
        let text = screen(&view).join("\n");
        assert!(text.contains("Player 3"));
        assert!(text.contains("started "));
        assert!(!text.contains("Train +1"));
    }

    #[test]
    fn test_expanded_player_shows_preset_buttons() {
        let mut board = board("2");
        board.toggle_expanded(1).unwrap();
        let text = screen(&board.view()).join("\n");
        for label in ["1 Train +1", "3 Trains +4", "6 Trains +15", "7 Trains +21"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(!text.contains("5 Trains"));
    }

    #[test]
    fn test_help_differs_per_mode() {
        let menu = help(&Mode::MainMenu).join("\n");
        let game = help(&Mode::InGame).join("\n");
        assert!(menu.contains("play"));
        assert!(game.contains("undo"));
        assert!(!menu.contains("undo"));
    }
}
