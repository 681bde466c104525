//! Write operations for games, tags, and their associations.

use game_shelf_catalog::{Game, GameUpdate, NewGame, NewTag, Tag, TagUpdate, ValidationError};
use rusqlite::types::ToSql;
use rusqlite::{Connection, params};
use thiserror::Error;

use crate::queries;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: i64 },
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Conflict: {detail}")]
    Conflict { entity_type: String, detail: String },
}

impl OperationError {
    fn not_found(entity_type: &str, id: i64) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id,
        }
    }
}

// ── Game Operations ─────────────────────────────────────────────────────────

/// Insert a new game. Returns the stored row (no tags yet).
pub fn create_game(conn: &Connection, game: &NewGame) -> Result<Game, OperationError> {
    game.validate()?;
    conn.execute(
        "INSERT INTO games (name, description, player_min, player_max, estimated_time, min_age)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            game.name,
            game.description,
            game.player_min,
            game.player_max,
            game.estimated_time,
            game.min_age,
        ],
    )?;
    let id = conn.last_insert_rowid();
    queries::find_game(conn, id)?.ok_or_else(|| OperationError::not_found("game", id))
}

/// Apply a partial update. Fields absent from `update` keep their value.
pub fn update_game(conn: &Connection, id: i64, update: &GameUpdate) -> Result<Game, OperationError> {
    update.validate()?;

    let mut sets: Vec<&str> = Vec::new();
    let mut values: Vec<Box<dyn ToSql>> = Vec::new();
    if let Some(name) = &update.name {
        sets.push("name = ?");
        values.push(Box::new(name.clone()));
    }
    if let Some(description) = &update.description {
        sets.push("description = ?");
        values.push(Box::new(description.clone()));
    }
    if let Some(player_min) = update.player_min {
        sets.push("player_min = ?");
        values.push(Box::new(player_min));
    }
    if let Some(player_max) = update.player_max {
        sets.push("player_max = ?");
        values.push(Box::new(player_max));
    }
    if let Some(estimated_time) = update.estimated_time {
        sets.push("estimated_time = ?");
        values.push(Box::new(estimated_time));
    }
    if let Some(min_age) = update.min_age {
        sets.push("min_age = ?");
        values.push(Box::new(min_age));
    }

    if sets.is_empty() {
        return queries::find_game(conn, id)?.ok_or_else(|| OperationError::not_found("game", id));
    }

    sets.push("updated_at = datetime('now')");
    values.push(Box::new(id));
    let sql = format!("UPDATE games SET {} WHERE id = ?", sets.join(", "));
    let params: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
    let changed = conn.execute(&sql, params.as_slice())?;
    if changed == 0 {
        return Err(OperationError::not_found("game", id));
    }
    queries::find_game(conn, id)?.ok_or_else(|| OperationError::not_found("game", id))
}

/// Delete a game. Association rows go with it (ON DELETE CASCADE).
pub fn delete_game(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM games WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(OperationError::not_found("game", id));
    }
    Ok(())
}

// ── Tag Operations ──────────────────────────────────────────────────────────

/// Insert a new tag. A name collision is a conflict, not a storage error.
pub fn create_tag(conn: &Connection, tag: &NewTag) -> Result<Tag, OperationError> {
    tag.validate()?;
    match conn.execute("INSERT INTO tags (name) VALUES (?1)", params![tag.name]) {
        Ok(_) => {}
        Err(e) if is_unique_violation(&e) => {
            return Err(OperationError::Conflict {
                entity_type: "tag".to_string(),
                detail: format!("tag name '{}' already exists", tag.name),
            });
        }
        Err(e) => return Err(e.into()),
    }
    let id = conn.last_insert_rowid();
    tag_row(conn, id)?.ok_or_else(|| OperationError::not_found("tag", id))
}

/// Rename a tag. Renaming to its current name is allowed.
pub fn update_tag(conn: &Connection, id: i64, update: &TagUpdate) -> Result<Tag, OperationError> {
    update.validate()?;
    let result = conn.execute(
        "UPDATE tags SET name = ?2, updated_at = datetime('now') WHERE id = ?1",
        params![id, update.name],
    );
    match result {
        Ok(0) => Err(OperationError::not_found("tag", id)),
        Ok(_) => tag_row(conn, id)?.ok_or_else(|| OperationError::not_found("tag", id)),
        Err(e) if is_unique_violation(&e) => Err(OperationError::Conflict {
            entity_type: "tag".to_string(),
            detail: format!("tag name '{}' already exists", update.name),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Delete a tag. Association rows go with it (ON DELETE CASCADE).
pub fn delete_tag(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM tags WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(OperationError::not_found("tag", id));
    }
    Ok(())
}

// ── Association Operations ──────────────────────────────────────────────────

/// Ensure the (game, tag) pair exists. Attaching an existing pair succeeds.
pub fn attach_tag(conn: &Connection, game_id: i64, tag_id: i64) -> Result<(), OperationError> {
    ensure_game(conn, game_id)?;
    ensure_tag(conn, tag_id)?;
    conn.execute(
        "INSERT OR IGNORE INTO game_tag (game_id, tag_id) VALUES (?1, ?2)",
        params![game_id, tag_id],
    )?;
    Ok(())
}

/// Ensure the (game, tag) pair does not exist. Detaching an absent pair
/// succeeds.
pub fn detach_tag(conn: &Connection, game_id: i64, tag_id: i64) -> Result<(), OperationError> {
    ensure_game(conn, game_id)?;
    ensure_tag(conn, tag_id)?;
    conn.execute(
        "DELETE FROM game_tag WHERE game_id = ?1 AND tag_id = ?2",
        params![game_id, tag_id],
    )?;
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn ensure_game(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM games WHERE id = ?1)",
        params![id],
        |row| row.get(0),
    )?;
    if exists {
        Ok(())
    } else {
        Err(OperationError::not_found("game", id))
    }
}

fn ensure_tag(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM tags WHERE id = ?1)",
        params![id],
        |row| row.get(0),
    )?;
    if exists {
        Ok(())
    } else {
        Err(OperationError::not_found("tag", id))
    }
}

fn tag_row(conn: &Connection, id: i64) -> Result<Option<Tag>, OperationError> {
    let result = conn.query_row(
        "SELECT id, name, created_at, updated_at FROM tags WHERE id = ?1",
        params![id],
        |row| {
            Ok(Tag {
                id: row.get(0)?,
                name: row.get(1)?,
                created_at: row.get(2)?,
                updated_at: row.get(3)?,
                games_count: None,
            })
        },
    );
    match result {
        Ok(tag) => Ok(Some(tag)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
