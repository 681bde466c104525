//! game-shelf CLI
//!
//! Operator tooling for the board game shelf: schema setup, demo data,
//! row counts, and shell-side search.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "game-shelf")]
#[command(about = "Manage a board game shelf database", long_about = None)]
struct Cli {
    /// Path to the shelf database
    #[arg(short, long, global = true, default_value = "game-shelf.db")]
    database: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database schema
    Init,

    /// Populate the database with demo games and tags
    Seed,

    /// Print row counts for the shelf
    Stats,

    /// Search games from the shell
    Search {
        /// Substring matched against names, descriptions, and tag names
        query: Option<String>,

        /// Required tag ids (comma separated); games must hold every one
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<i64>>,

        /// Number of players that should fit the game
        #[arg(long)]
        players: Option<i64>,

        /// Age of the youngest player
        #[arg(long)]
        age: Option<i64>,

        /// Page to display
        #[arg(long, default_value_t = 1)]
        page: i64,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init::run(&cli.database),
        Commands::Seed => commands::seed::run(&cli.database),
        Commands::Stats => commands::stats::run(&cli.database),
        Commands::Search {
            query,
            tags,
            players,
            age,
            page,
        } => commands::search::run(&cli.database, query, tags, players, age, page),
    };

    if let Err(err) = result {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
