//! Core data model for the game shelf.
//!
//! Entity types, write payloads, filter/pagination requests, and the
//! paged response envelope shared by the storage and HTTP layers.

pub mod filters;
pub mod types;

pub use filters::{DEFAULT_PER_PAGE, GameFilters, PageRequest, Paged};
pub use types::{Game, GameUpdate, NewGame, NewTag, Tag, TagUpdate, ValidationError};
