//! SQLite persistence layer for the game shelf.
//!
//! Provides schema creation, write operations, and the game query engine,
//! all on top of rusqlite with the bundled feature.

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    OperationError, attach_tag, create_game, create_tag, delete_game, delete_tag, detach_tag,
    update_game, update_tag,
};
pub use queries::{
    ShelfStats, TagDetail, find_game, find_tag, list_games, list_tags, list_tags_all,
    max_players_across_games, min_players_across_games, shelf_stats,
};
pub use schema::{open_database, open_memory};
