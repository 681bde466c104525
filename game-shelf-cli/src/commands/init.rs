use std::path::Path;

use owo_colors::OwoColorize;

use crate::error::CliError;

/// Create (or verify) the schema at the given path.
pub fn run(database: &Path) -> Result<(), CliError> {
    game_shelf_db::open_database(database)?;
    println!("{} {}", "ready".green(), database.display());
    Ok(())
}
