//! REPL state: forwards parsed commands to the scoreboard controller.

use colored::Colorize;
use tally_core::config::ValidationPolicy;
use tally_core::{ScoreboardController, TallyError};
use thiserror::Error;

use crate::command::{self, Command, Target};
use crate::render;

/// Whether the REPL keeps reading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Result of handling one input line.
#[derive(Debug)]
pub struct Reply {
    pub flow: Flow,
    /// Lines to print, already colored.
    pub lines: Vec<String>,
}

impl Reply {
    fn lines(lines: Vec<String>) -> Self {
        Self {
            flow: Flow::Continue,
            lines,
        }
    }

    fn error(message: impl std::fmt::Display) -> Self {
        Self::lines(vec![message.to_string().red().to_string()])
    }
}

/// Why a command could not be applied.
#[derive(Error, Debug)]
enum AppError {
    /// The command targets the open panel, but none is open.
    #[error("No player selected. Open a panel with its number first.")]
    NoPanelOpen,
    #[error(transparent)]
    Board(#[from] TallyError),
}

/// The interactive front end around a `ScoreboardController`.
pub struct App {
    board: ScoreboardController,
}

impl App {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            board: ScoreboardController::with_policy(policy),
        }
    }

    pub fn board(&self) -> &ScoreboardController {
        &self.board
    }

    /// The current screen.
    pub fn screen(&self) -> Vec<String> {
        render::screen(&self.board.view())
    }

    /// Handles one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let mode = self.board.mode();
        match command::parse(line, &mode) {
            Ok(command) => self.execute(command),
            Err(err) => Reply::error(err),
        }
    }

    fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Quit => Reply {
                flow: Flow::Quit,
                lines: vec!["Goodbye!".bright_green().to_string()],
            },
            Command::Help => Reply::lines(render::help(&self.board.mode())),
            command => match self.apply(command) {
                Ok(message) => {
                    let mut lines = Vec::new();
                    if let Some(message) = message {
                        lines.push(message.green().to_string());
                    }
                    lines.extend(self.screen());
                    Reply::lines(lines)
                }
                Err(err) => Reply::lines(describe(&err)),
            },
        }
    }

    /// Runs a state-changing command, returning an optional status message.
    fn apply(&mut self, command: Command) -> Result<Option<String>, AppError> {
        let message = match command {
            Command::Play(game) => {
                self.board.start_game(game)?;
                None
            }
            Command::PlayerCount(input) => {
                let n = self.board.confirm_player_count(&input)?;
                Some(format!("{n} players. Good luck!"))
            }
            Command::Toggle(index) => {
                self.board.toggle_expanded(index)?;
                None
            }
            Command::Trains { trains, target } => {
                let index = self.resolve(target)?;
                let score = self.board.add_preset(index, trains)?;
                Some(self.scored(index, score))
            }
            Command::Add { input, target } => {
                let index = self.resolve(target)?;
                let score = self.board.add_custom_score(index, &input)?;
                Some(self.scored(index, score))
            }
            Command::Undo(target) => {
                let index = self.resolve(target)?;
                match self.board.undo_score(index)? {
                    Some(score) => Some(self.scored(index, score)),
                    None => Some("Nothing to undo".to_string()),
                }
            }
            Command::Reset(target) => {
                let index = self.resolve(target)?;
                self.board.reset_score(index)?;
                Some(self.scored(index, 0))
            }
            Command::Rename { index, name } => {
                self.board.rename_player(index, &name)?;
                None
            }
            Command::Exit => {
                self.board.exit_to_main_menu();
                None
            }
            Command::Show | Command::Help | Command::Quit => None,
        };
        Ok(message)
    }

    /// Maps a command target to a player index.
    fn resolve(&self, target: Target) -> Result<usize, AppError> {
        match target {
            Target::Player(index) => Ok(index),
            Target::Expanded => self.board.expanded_index().ok_or(AppError::NoPanelOpen),
        }
    }

    fn scored(&self, index: usize, score: i64) -> String {
        let name = self.board.players().get(index).copied().unwrap_or_default();
        format!("{name}: {score}")
    }
}

/// User-facing wording for a failed command.
///
/// Input mistakes get a retry hint; the screen stays as it was.
fn describe(err: &AppError) -> Vec<String> {
    let board_err = match err {
        AppError::NoPanelOpen => return vec![err.to_string().yellow().to_string()],
        AppError::Board(board_err) => board_err,
    };

    match board_err {
        TallyError::IndexOutOfRange { index, len } => vec![
            format!("There is no player {} (players 1-{len})", index + 1)
                .red()
                .to_string(),
        ],
        other if other.is_retryable_input() => vec![
            other.to_string().yellow().to_string(),
            "Try again.".bright_black().to_string(),
        ],
        other => vec![other.to_string().red().to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::Mode;

    fn run(app: &mut App, lines: &[&str]) {
        for line in lines {
            let reply = app.handle_line(line);
            assert_eq!(reply.flow, Flow::Continue, "line {line:?}");
        }
    }

    #[test]
    fn test_full_round() {
        let mut app = App::new(ValidationPolicy::default());
        run(&mut app, &["play", "3", "1", "trains 4", "add 10", "trains 2 3"]);

        assert_eq!(app.board().mode(), Mode::InGame);
        assert_eq!(app.board().scores(), vec![17, 0, 2]);

        run(&mut app, &["undo", "undo 3"]);
        assert_eq!(app.board().scores(), vec![7, 0, 0]);
    }

    #[test]
    fn test_invalid_player_count_stays_on_prompt() {
        let mut app = App::new(ValidationPolicy::default());
        run(&mut app, &["play"]);
        let reply = app.handle_line("9");
        assert!(reply.lines[0].contains("Invalid player count"));
        assert!(reply.lines[1].contains("Try again"));
        assert!(matches!(app.board().mode(), Mode::AwaitingPlayerCount { .. }));
    }

    #[test]
    fn test_target_defaults_to_open_panel() {
        let mut app = App::new(ValidationPolicy::default());
        run(&mut app, &["play", "2"]);

        let reply = app.handle_line("trains 1");
        assert!(reply.lines[0].contains("No player selected"));
        assert_eq!(app.board().scores(), vec![0, 0]);

        run(&mut app, &["2", "trains 1"]);
        assert_eq!(app.board().scores(), vec![0, 1]);
    }

    #[test]
    fn test_out_of_range_player_message() {
        let mut app = App::new(ValidationPolicy::default());
        run(&mut app, &["play", "2"]);
        let reply = app.handle_line("reset 5");
        assert!(reply.lines[0].contains("There is no player 5"));
        assert_eq!(reply.lines.len(), 1, "Contract errors carry no retry hint");
    }

    #[test]
    fn test_no_open_panel_is_its_own_error() {
        let mut app = App::new(ValidationPolicy::default());
        run(&mut app, &["play", "3"]);

        for line in ["undo", "reset", "add 4", "trains 2"] {
            let reply = app.handle_line(line);
            assert!(reply.lines[0].contains("No player selected"), "line {line:?}");
        }

        // Explicit out-of-range players are reported as such, not as "no selection"
        let reply = app.handle_line("undo 7");
        assert!(reply.lines[0].contains("There is no player 7"));
        assert_eq!(app.board().scores(), vec![0, 0, 0]);
    }

    #[test]
    fn test_exit_in_game_returns_to_menu() {
        let mut app = App::new(ValidationPolicy::default());
        run(&mut app, &["play", "2", "exit"]);
        assert_eq!(app.board().mode(), Mode::MainMenu);

        assert_eq!(app.handle_line("exit").flow, Flow::Quit);
    }

    #[test]
    fn test_rename_and_exit() {
        let mut app = App::new(ValidationPolicy::default());
        run(&mut app, &["play", "2", "name 1 Alice Smith"]);
        assert_eq!(app.board().players(), vec!["Alice Smith", "Player 2"]);

        run(&mut app, &["x"]);
        assert_eq!(app.board().mode(), Mode::MainMenu);
        assert!(app.board().players().is_empty());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(ValidationPolicy::default());
        assert_eq!(app.handle_line("quit").flow, Flow::Quit);
    }
}
