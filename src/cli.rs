use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament tracker")]
pub struct Cli {
    /// SQLite database file (overrides DATABASE_PATH, ":memory:" for a throwaway one)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Drop and recreate the tournament tables
    Init,
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Record the result of a single match
    Report {
        /// Id of the player who won
        winner: i64,
        /// Id of the player who lost
        loser: i64,
    },
    /// Show players ordered by wins
    Standings {
        #[arg(long)]
        json: bool,
    },
    /// Show pairings for the next round
    Pairings {
        #[arg(long)]
        json: bool,
    },
    /// List reported matches
    Matches {
        /// Only matches between these two player ids
        #[arg(long, num_args = 2, value_names = ["A", "B"])]
        between: Option<Vec<i64>>,
    },
    /// Print the number of registered players
    Count,
    /// Remove all matches and reset player records
    DeleteMatches,
    /// Remove all players
    DeletePlayers,
}
