use anyhow::Result;
use clap::{Parser, Subcommand};
use tally_core::game::GameKind;

mod commands;

#[derive(Parser)]
#[command(name = "tally-cli")]
#[command(about = "Tally CLI - point tables and configuration for the Tally scoreboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a game's preset point table
    Points {
        /// Game to show (ticket_to_ride, ticket, ttr)
        #[arg(long, default_value = "ticket_to_ride")]
        game: GameKind,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Points { game, json } => commands::points::print(game, json)?,
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::path()?,
            ConfigAction::Show => commands::config::show()?,
            ConfigAction::Init { force } => commands::config::init(force)?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_points_alias() {
        let cli = Cli::try_parse_from(["tally-cli", "points", "--game", "ttr", "--json"]).unwrap();
        match cli.command {
            Commands::Points { game, json } => {
                assert_eq!(game, GameKind::TicketToRide);
                assert!(json);
            }
            _ => panic!("expected points command"),
        }
    }
}
