//! Entity types and write payloads for the game shelf.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest accepted name for games and tags.
pub const MAX_NAME_LEN: usize = 255;

/// A malformed field in a write payload or filter input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

// ── Entities ────────────────────────────────────────────────────────────────

/// A board game and its play metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub player_min: i64,
    pub player_max: Option<i64>,
    /// Typical play time in minutes.
    pub estimated_time: Option<i64>,
    pub min_age: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
    /// Associated tags, embedded in every read.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// A named label usable to categorize multiple games.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    /// Number of games holding this tag; populated only by tag listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub games_count: Option<i64>,
}

// ── Write payloads ──────────────────────────────────────────────────────────

/// Payload for creating a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGame {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub player_min: i64,
    #[serde(default)]
    pub player_max: Option<i64>,
    #[serde(default)]
    pub estimated_time: Option<i64>,
    #[serde(default)]
    pub min_age: Option<i64>,
}

impl NewGame {
    /// Check the write-time bounds. Returns the first violated field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("name", &self.name)?;
        validate_bounds(
            self.player_min,
            self.player_max,
            self.estimated_time,
            self.min_age,
        )
    }
}

/// Partial update for a game; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub player_min: Option<i64>,
    #[serde(default)]
    pub player_max: Option<i64>,
    #[serde(default)]
    pub estimated_time: Option<i64>,
    #[serde(default)]
    pub min_age: Option<i64>,
}

impl GameUpdate {
    /// Check every provided field against the same rules as [`NewGame`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name("name", name)?;
        }
        validate_bounds(
            self.player_min.unwrap_or(1),
            self.player_max,
            self.estimated_time,
            self.min_age,
        )
    }
}

/// Payload for creating a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTag {
    pub name: String,
}

impl NewTag {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("name", &self.name)
    }
}

/// Payload for renaming a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagUpdate {
    pub name: String,
}

impl TagUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("name", &self.name)
    }
}

// ── Shared checks ───────────────────────────────────────────────────────────

fn validate_name(field: &'static str, name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::new(
            field,
            format!("must be at most {MAX_NAME_LEN} characters"),
        ));
    }
    Ok(())
}

fn validate_bounds(
    player_min: i64,
    player_max: Option<i64>,
    estimated_time: Option<i64>,
    min_age: Option<i64>,
) -> Result<(), ValidationError> {
    if player_min < 1 {
        return Err(ValidationError::new("player_min", "must be at least 1"));
    }
    if matches!(player_max, Some(n) if n < 1) {
        return Err(ValidationError::new("player_max", "must be at least 1"));
    }
    if matches!(estimated_time, Some(n) if n < 1) {
        return Err(ValidationError::new("estimated_time", "must be at least 1"));
    }
    if matches!(min_age, Some(n) if n < 0) {
        return Err(ValidationError::new("min_age", "must not be negative"));
    }
    Ok(())
}
