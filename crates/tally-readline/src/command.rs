//! REPL command parsing.
//!
//! What a line means depends on the screen: on the player count screen any
//! number is a count, in a game a bare number opens that player's panel.

use std::str::FromStr;

use tally_core::Mode;
use tally_core::game::GameKind;
use thiserror::Error;

/// Which player a command applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// 0-based index given explicitly.
    Player(usize),
    /// Whoever's panel is open.
    Expanded,
}

/// A parsed REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick a game from the main menu.
    Play(GameKind),
    /// Raw player count input, validated by the controller.
    PlayerCount(String),
    /// Open or close a player's panel.
    Toggle(usize),
    /// Preset button for a route of `trains` cars.
    Trains { trains: u8, target: Target },
    /// Custom score entry, validated by the controller.
    Add { input: String, target: Target },
    Undo(Target),
    Reset(Target),
    Rename { index: usize, name: String },
    /// Back to the main menu, discarding the game.
    Exit,
    Show,
    Help,
    Quit,
}

/// Errors for lines that do not form a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for commands.")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("'{0}' is not a player number")]
    BadPlayer(String),
    #[error("Unknown game '{0}'")]
    UnknownGame(String),
}

/// Command words offered for completion, per mode.
pub fn command_words(mode: &Mode) -> &'static [&'static str] {
    match mode {
        Mode::MainMenu => &["play", "ticket", "help", "quit"],
        Mode::AwaitingPlayerCount { .. } => &["players", "menu", "help", "quit"],
        Mode::InGame => &[
            "open", "trains", "add", "undo", "reset", "name", "show", "menu", "help", "quit",
        ],
    }
}

/// Parses one trimmed, non-empty input line.
pub fn parse(line: &str, mode: &Mode) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let word_lower = word.to_ascii_lowercase();

    // Available everywhere
    match word_lower.as_str() {
        "quit" => return Ok(Command::Quit),
        "help" | "?" => return Ok(Command::Help),
        // "exit" only leaves the app from the main menu; elsewhere it leaves the game
        "exit" if mode.is_main_menu() => return Ok(Command::Quit),
        "x" | "menu" | "exit" if !mode.is_main_menu() => return Ok(Command::Exit),
        _ => {}
    }

    match mode {
        Mode::MainMenu => parse_main_menu(&word_lower, rest),
        Mode::AwaitingPlayerCount { .. } => Ok(match word_lower.as_str() {
            "players" => Command::PlayerCount(rest.to_string()),
            _ => Command::PlayerCount(line.to_string()),
        }),
        Mode::InGame => parse_in_game(&word_lower, rest),
    }
}

fn parse_main_menu(word: &str, rest: &str) -> Result<Command, CommandError> {
    match word {
        "play" if rest.is_empty() => Ok(Command::Play(GameKind::default())),
        "play" => GameKind::from_str(rest)
            .map(Command::Play)
            .map_err(|_| CommandError::UnknownGame(rest.to_string())),
        _ => {
            // A game alias, or its 1-based position in the catalog
            if let Ok(game) = GameKind::from_str(word) {
                return Ok(Command::Play(game));
            }
            word.parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| GameKind::catalog().get(i).copied())
                .map(Command::Play)
                .ok_or_else(|| CommandError::Unknown(word.to_string()))
        }
    }
}

fn parse_in_game(word: &str, rest: &str) -> Result<Command, CommandError> {
    let mut args = rest.split_whitespace();
    match word {
        "open" => {
            let player = args.next().ok_or(CommandError::Usage("open <player>"))?;
            Ok(Command::Toggle(player_index(player)?))
        }
        "trains" | "t" => {
            let count = args
                .next()
                .ok_or(CommandError::Usage("trains <count> [player]"))?;
            let trains = count
                .parse::<u8>()
                .map_err(|_| CommandError::Usage("trains <count> [player]"))?;
            Ok(Command::Trains {
                trains,
                target: target(args.next())?,
            })
        }
        "add" | "+" => {
            let input = args.next().ok_or(CommandError::Usage("add <score> [player]"))?;
            Ok(Command::Add {
                input: input.to_string(),
                target: target(args.next())?,
            })
        }
        "undo" | "u" => Ok(Command::Undo(target(args.next())?)),
        "reset" => Ok(Command::Reset(target(args.next())?)),
        "name" | "rename" => {
            let (player, name) = match rest.split_once(char::is_whitespace) {
                Some((player, name)) => (player, name.trim()),
                None if !rest.is_empty() => (rest, ""),
                None => return Err(CommandError::Usage("name <player> [new name]")),
            };
            Ok(Command::Rename {
                index: player_index(player)?,
                name: name.to_string(),
            })
        }
        "show" | "ls" => Ok(Command::Show),
        _ => match word.parse::<usize>() {
            Ok(_) => Ok(Command::Toggle(player_index(word)?)),
            Err(_) => Err(CommandError::Unknown(word.to_string())),
        },
    }
}

/// Converts an on-screen player number (1-based) to an index.
fn player_index(token: &str) -> Result<usize, CommandError> {
    token
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| CommandError::BadPlayer(token.to_string()))
}

fn target(token: Option<&str>) -> Result<Target, CommandError> {
    match token {
        Some(token) => player_index(token).map(Target::Player),
        None => Ok(Target::Expanded),
    }
}
