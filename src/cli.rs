use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "ping pong league ladder")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH or league.db)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Add a player to the roster at the starting rating
    AddPlayer { name: String },
    /// Remove a player from the roster; their matches are kept
    RemovePlayer { name: String },
    /// Report a match result
    Report {
        player1: String,
        player2: String,
        score1: u32,
        score2: u32,
    },
    /// Delete a match and rebuild all ratings from the remaining history
    DeleteMatch { id: u64 },
    /// Show the roster ranked by rating
    Rankings,
    /// List recorded matches
    Matches {
        /// Only matches involving this player
        #[arg(short, long)]
        player: Option<String>,
    },
    /// Show detailed statistics for one player
    Stats { name: String },
    /// League summary, recent matches and leaders
    Overview,
    /// Record between two players
    HeadToHead { player_a: String, player_b: String },
    /// Matches won by the lower-rated player, biggest gap first
    Upsets {
        /// How many to show (defaults to the configured number)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Random pairings for this week
    Matchups {
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Full round-robin schedule
    Schedule,
    /// Write the league to a JSON file
    Export { path: PathBuf },
    /// Replace the league with a JSON file (snapshot or legacy data.json)
    Import { path: PathBuf },
    /// Generate shell completions
    Completions { shell: Shell },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report() {
        let cli = Cli::parse_from(["pingpong-league", "report", "Ann", "Bob", "11", "7"]);
        assert_eq!(
            cli.command,
            Command::Report {
                player1: "Ann".to_string(),
                player2: "Bob".to_string(),
                score1: 11,
                score2: 7,
            }
        );
        assert!(!cli.json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["pingpong-league", "rankings", "--json", "--database", "club.db"]);
        assert_eq!(cli.command, Command::Rankings);
        assert!(cli.json);
        assert_eq!(cli.database.as_deref(), Some("club.db"));
    }

    #[test]
    fn test_negative_scores_are_rejected() {
        let parsed = Cli::try_parse_from(["pingpong-league", "report", "Ann", "Bob", "-1", "7"]);
        assert!(parsed.is_err());
    }
}
