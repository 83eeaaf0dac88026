use anyhow::{Context, Result};
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use tracing_subscriber::EnvFilter;

use tally_core::config::load_config;

mod app;
mod command;
mod helper;
mod render;

use app::{App, Flow};
use helper::ReplHelper;

/// Installs a stderr log subscriber; `RUST_LOG` overrides the quiet default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

/// The main entry point for the Tally scoreboard REPL.
///
/// 1. Loads `~/.config/tally/config.toml` (defaults if absent)
/// 2. Sets up a rustyline editor with mode-aware completion
/// 3. Feeds each line to the scoreboard and redraws the screen
fn main() -> Result<()> {
    init_tracing();

    let config = load_config().context("Failed to load Tally configuration")?;
    tracing::debug!(?config, "Configuration loaded");
    if !config.ui.color {
        colored::control::set_override(false);
    }

    let mut app = App::new(config.validation);

    // ===== REPL Setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(ReplHelper::new(&app.board().mode())));

    println!("{}", "=== Tally ===".bright_magenta().bold());
    println!("{}", "Type 'help' for commands, or 'quit' to exit.".bright_black());
    println!();
    print_lines(&app.screen());

    // ===== Main REPL Loop =====
    loop {
        match rl.readline(&config.ui.prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let reply = app.handle_line(trimmed);
                print_lines(&reply.lines);
                if reply.flow == Flow::Quit {
                    break;
                }

                if let Some(helper) = rl.helper_mut() {
                    helper.set_mode(&app.board().mode());
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
