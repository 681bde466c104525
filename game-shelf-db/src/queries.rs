//! Read queries for the game shelf.
//!
//! The game listing is the core: one filtered, ordered, paginated query
//! whose predicates are all conjunctive. Tag listings and aggregate stats
//! live here too.

use std::collections::HashMap;

use game_shelf_catalog::{Game, GameFilters, PageRequest, Paged, Tag};
use rusqlite::types::ToSql;
use rusqlite::{Connection, params, params_from_iter};
use serde::Serialize;

use crate::operations::OperationError;

const GAME_COLUMNS: &str = "g.id, g.name, g.description, g.player_min, g.player_max,
                g.estimated_time, g.min_age, g.created_at, g.updated_at";

// ── Game Listing ────────────────────────────────────────────────────────────

/// List games matching the given filters, newest first, one page at a time.
///
/// Every returned game carries its tags. The tag filter requires a game to
/// hold each requested tag id and is expressed as one EXISTS subquery per
/// id, so a game matching several requested tags still appears exactly once.
pub fn list_games(
    conn: &Connection,
    filters: &GameFilters,
    page: &PageRequest,
) -> Result<Paged<Game>, OperationError> {
    let mut clauses: Vec<String> = Vec::new();
    let mut values: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(term) = filters.search_term() {
        let pattern = format!("%{term}%");
        clauses.push(
            "(g.name LIKE ? OR g.description LIKE ? OR EXISTS (
                 SELECT 1 FROM game_tag gt JOIN tags t ON t.id = gt.tag_id
                 WHERE gt.game_id = g.id AND t.name LIKE ?))"
                .to_string(),
        );
        values.push(Box::new(pattern.clone()));
        values.push(Box::new(pattern.clone()));
        values.push(Box::new(pattern));
    }

    for tag_id in &filters.tag_ids {
        clauses.push(
            "EXISTS (SELECT 1 FROM game_tag gt WHERE gt.game_id = g.id AND gt.tag_id = ?)"
                .to_string(),
        );
        values.push(Box::new(*tag_id));
    }

    if let Some(count) = filters.player_count {
        clauses.push("g.player_min <= ?".to_string());
        values.push(Box::new(count));
        clauses.push("(g.player_max IS NULL OR g.player_max >= ?)".to_string());
        values.push(Box::new(count));
    }

    if let Some(age) = filters.min_age {
        // A game with no stated minimum age suits everyone.
        clauses.push("(g.min_age IS NULL OR g.min_age <= ?)".to_string());
        values.push(Box::new(age));
    }

    let where_sql = if clauses.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", clauses.join(" AND "))
    };

    let count_params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
    let total: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM games g{where_sql}"),
        count_params.as_slice(),
        |row| row.get(0),
    )?;

    values.push(Box::new(page.per_page));
    values.push(Box::new(page.offset()));
    let page_params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();

    let mut stmt = conn.prepare(&format!(
        "SELECT {GAME_COLUMNS}
         FROM games g{where_sql}
         ORDER BY g.created_at DESC, g.id DESC
         LIMIT ? OFFSET ?"
    ))?;
    let rows = stmt.query_map(page_params.as_slice(), row_to_game)?;
    let mut games = rows.collect::<Result<Vec<_>, _>>()?;

    load_tags(conn, &mut games)?;
    Ok(Paged::new(games, total, page))
}

/// Fetch a single game with its tags.
pub fn find_game(conn: &Connection, id: i64) -> Result<Option<Game>, OperationError> {
    let mut stmt = conn.prepare(&format!("SELECT {GAME_COLUMNS} FROM games g WHERE g.id = ?1"))?;
    let result = stmt.query_row(params![id], row_to_game);
    match result {
        Ok(game) => {
            let mut games = vec![game];
            load_tags(conn, &mut games)?;
            Ok(games.pop())
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Tag Queries ─────────────────────────────────────────────────────────────

/// List tags with their game counts, one page at a time.
pub fn list_tags(
    conn: &Connection,
    search: Option<&str>,
    page: &PageRequest,
) -> Result<Paged<Tag>, OperationError> {
    let (where_sql, mut values) = tag_filter(search);

    let count_params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
    let total: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM tags t{where_sql}"),
        count_params.as_slice(),
        |row| row.get(0),
    )?;

    values.push(Box::new(page.per_page));
    values.push(Box::new(page.offset()));
    let page_params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();

    let mut stmt = conn.prepare(&format!(
        "SELECT t.id, t.name, t.created_at, t.updated_at, COUNT(gt.game_id)
         FROM tags t
         LEFT JOIN game_tag gt ON gt.tag_id = t.id
         {where_sql}
         GROUP BY t.id
         ORDER BY t.name
         LIMIT ? OFFSET ?"
    ))?;
    let rows = stmt.query_map(page_params.as_slice(), row_to_counted_tag)?;
    let tags = rows.collect::<Result<Vec<_>, _>>()?;
    Ok(Paged::new(tags, total, page))
}

/// List every tag with its game count, unpaginated.
pub fn list_tags_all(conn: &Connection, search: Option<&str>) -> Result<Vec<Tag>, OperationError> {
    let (where_sql, values) = tag_filter(search);
    let params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();

    let mut stmt = conn.prepare(&format!(
        "SELECT t.id, t.name, t.created_at, t.updated_at, COUNT(gt.game_id)
         FROM tags t
         LEFT JOIN game_tag gt ON gt.tag_id = t.id
         {where_sql}
         GROUP BY t.id
         ORDER BY t.name"
    ))?;
    let rows = stmt.query_map(params.as_slice(), row_to_counted_tag)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// A tag with the games holding it, as returned by the detail lookup.
#[derive(Debug, Clone, Serialize)]
pub struct TagDetail {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub games: Vec<Game>,
}

/// Fetch a single tag with its games, newest game first.
pub fn find_tag(conn: &Connection, id: i64) -> Result<Option<TagDetail>, OperationError> {
    let result = conn.query_row(
        "SELECT id, name, created_at, updated_at FROM tags WHERE id = ?1",
        params![id],
        |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        },
    );
    let (id, name, created_at, updated_at) = match result {
        Ok(row) => row,
        Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut stmt = conn.prepare(&format!(
        "SELECT {GAME_COLUMNS}
         FROM games g
         JOIN game_tag gt ON gt.game_id = g.id
         WHERE gt.tag_id = ?1
         ORDER BY g.created_at DESC, g.id DESC"
    ))?;
    let rows = stmt.query_map(params![id], row_to_game)?;
    let mut games = rows.collect::<Result<Vec<_>, _>>()?;
    load_tags(conn, &mut games)?;

    Ok(Some(TagDetail {
        id,
        name,
        created_at,
        updated_at,
        games,
    }))
}

// ── Aggregates ──────────────────────────────────────────────────────────────

/// Smallest player_min across all games, None on an empty shelf.
pub fn min_players_across_games(conn: &Connection) -> Result<Option<i64>, OperationError> {
    conn.query_row("SELECT MIN(player_min) FROM games", [], |row| {
        row.get::<_, Option<i64>>(0)
    })
    .map_err(Into::into)
}

/// Largest player_max across all games, None when no game states one.
pub fn max_players_across_games(conn: &Connection) -> Result<Option<i64>, OperationError> {
    conn.query_row("SELECT MAX(player_max) FROM games", [], |row| {
        row.get::<_, Option<i64>>(0)
    })
    .map_err(Into::into)
}

/// Row counts for the whole shelf.
#[derive(Debug)]
pub struct ShelfStats {
    pub games: i64,
    pub tags: i64,
    pub associations: i64,
}

pub fn shelf_stats(conn: &Connection) -> Result<ShelfStats, OperationError> {
    let games: i64 = conn.query_row("SELECT COUNT(*) FROM games", [], |r| r.get(0))?;
    let tags: i64 = conn.query_row("SELECT COUNT(*) FROM tags", [], |r| r.get(0))?;
    let associations: i64 = conn.query_row("SELECT COUNT(*) FROM game_tag", [], |r| r.get(0))?;
    Ok(ShelfStats {
        games,
        tags,
        associations,
    })
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_game(row: &rusqlite::Row<'_>) -> rusqlite::Result<Game> {
    Ok(Game {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        player_min: row.get(3)?,
        player_max: row.get(4)?,
        estimated_time: row.get(5)?,
        min_age: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
        tags: Vec::new(),
    })
}

fn row_to_counted_tag(row: &rusqlite::Row<'_>) -> rusqlite::Result<Tag> {
    Ok(Tag {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
        games_count: Some(row.get(4)?),
    })
}

fn tag_filter(search: Option<&str>) -> (String, Vec<Box<dyn ToSql>>) {
    match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(term) => (
            " WHERE t.name LIKE ?".to_string(),
            vec![Box::new(format!("%{term}%")) as Box<dyn ToSql>],
        ),
        None => (String::new(), Vec::new()),
    }
}

/// Attach each game's tags with one batched lookup, ordered by tag name.
fn load_tags(conn: &Connection, games: &mut [Game]) -> Result<(), OperationError> {
    if games.is_empty() {
        return Ok(());
    }
    let placeholders = vec!["?"; games.len()].join(", ");
    let mut stmt = conn.prepare(&format!(
        "SELECT gt.game_id, t.id, t.name, t.created_at, t.updated_at
         FROM game_tag gt
         JOIN tags t ON t.id = gt.tag_id
         WHERE gt.game_id IN ({placeholders})
         ORDER BY t.name"
    ))?;
    let rows = stmt.query_map(params_from_iter(games.iter().map(|g| g.id)), |row| {
        Ok((
            row.get::<_, i64>(0)?,
            Tag {
                id: row.get(1)?,
                name: row.get(2)?,
                created_at: row.get(3)?,
                updated_at: row.get(4)?,
                games_count: None,
            },
        ))
    })?;

    let mut by_game: HashMap<i64, Vec<Tag>> = HashMap::new();
    for row in rows {
        let (game_id, tag) = row?;
        by_game.entry(game_id).or_default().push(tag);
    }
    for game in games.iter_mut() {
        if let Some(tags) = by_game.remove(&game.id) {
            game.tags = tags;
        }
    }
    Ok(())
}
