use std::path::Path;

use owo_colors::OwoColorize;

use game_shelf_db::shelf_stats;

use crate::error::CliError;

/// Print row counts for the shelf.
pub fn run(database: &Path) -> Result<(), CliError> {
    let conn = game_shelf_db::open_database(database)?;
    let stats = shelf_stats(&conn)?;

    println!("{}", database.display().to_string().bold());
    println!("  games:        {}", stats.games);
    println!("  tags:         {}", stats.tags);
    println!("  associations: {}", stats.associations);
    Ok(())
}
