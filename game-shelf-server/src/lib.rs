//! HTTP API for the game shelf.
//!
//! A thin actix-web layer over the storage engine: request parsing,
//! status-code mapping, and JSON rendering. All query and mutation
//! semantics live in `game-shelf-db`.

pub mod config;
pub mod http;
pub mod state;
