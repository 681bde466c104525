use std::path::Path;

use owo_colors::OwoColorize;

use game_shelf_catalog::{DEFAULT_PER_PAGE, GameFilters, PageRequest};
use game_shelf_db::list_games;

use crate::error::CliError;

/// Run the query engine from the shell and print one page of matches.
pub fn run(
    database: &Path,
    query: Option<String>,
    tags: Option<Vec<i64>>,
    players: Option<i64>,
    age: Option<i64>,
    page: i64,
) -> Result<(), CliError> {
    let conn = game_shelf_db::open_database(database)?;

    let filters = GameFilters {
        search: query,
        tag_ids: tags.unwrap_or_default(),
        player_count: players,
        min_age: age,
    };
    let result = list_games(&conn, &filters, &PageRequest::new(page, DEFAULT_PER_PAGE))?;

    for game in &result.data {
        let players = match game.player_max {
            Some(max) if max == game.player_min => format!("{} players", game.player_min),
            Some(max) => format!("{}-{} players", game.player_min, max),
            None => format!("{}+ players", game.player_min),
        };
        let tags = game
            .tags
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:>5}  {}  {}  {}",
            game.id,
            game.name.bold(),
            players,
            tags.dimmed()
        );
    }

    println!(
        "page {}/{} ({} games)",
        result.current_page, result.last_page, result.total
    );
    Ok(())
}
