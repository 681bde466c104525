//! Filter and pagination requests for the game listing, plus the paged
//! response envelope.
//!
//! Raw query-string input is normalized here: empty strings mean "filter
//! absent", never "match empty". Non-numeric input is rejected as a
//! [`ValidationError`] rather than silently dropped.

use serde::{Deserialize, Serialize};

use crate::types::ValidationError;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PER_PAGE: i64 = 12;

// ── Filters ─────────────────────────────────────────────────────────────────

/// Optional predicates for the game listing. All active predicates are
/// applied together as a conjunction.
#[derive(Debug, Clone, Default)]
pub struct GameFilters {
    /// Substring matched against name, description, and tag names.
    pub search: Option<String>,
    /// The game must hold every id listed here. Empty means no tag filter.
    pub tag_ids: Vec<i64>,
    /// "Can this many people play": player_min <= n and player_max (when
    /// set) >= n.
    pub player_count: Option<i64>,
    /// The game's stated minimum age must not exceed this value. Games
    /// without a stated minimum age always pass.
    pub min_age: Option<i64>,
}

impl GameFilters {
    /// Build filters from raw query-string values.
    pub fn from_raw(
        search: Option<&str>,
        tag_ids: Option<&str>,
        player_count: Option<&str>,
        min_age: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            search: search
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string()),
            tag_ids: parse_id_list("tag_ids", tag_ids)?,
            player_count: parse_int("player_count", player_count)?,
            min_age: parse_int("min_age", min_age)?,
        })
    }

    /// The search term with blank input treated as absent.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

// ── Pagination ──────────────────────────────────────────────────────────────

/// Which page of results to return. Both values are clamped to at least 1.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Build a page request from raw query-string values.
    pub fn from_raw(page: Option<&str>, per_page: Option<&str>) -> Result<Self, ValidationError> {
        let page = parse_int("page", page)?.unwrap_or(1);
        let per_page = parse_int("per_page", per_page)?.unwrap_or(DEFAULT_PER_PAGE);
        Ok(Self::new(page, per_page))
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }
}

/// One page of results plus pagination metadata.
///
/// Serialized field names are part of the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paged<T> {
    pub data: Vec<T>,
    pub current_page: i64,
    pub last_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub has_more: bool,
}

impl<T> Paged<T> {
    /// Shape one page of rows into the envelope.
    ///
    /// `current_page` echoes the request even when it lies past the end;
    /// an out-of-range page carries an empty `data` array, not an error.
    pub fn new(data: Vec<T>, total: i64, request: &PageRequest) -> Self {
        let last_page = ((total + request.per_page - 1) / request.per_page).max(1);
        Self {
            data,
            current_page: request.page,
            last_page,
            per_page: request.per_page,
            total,
            has_more: request.page < last_page,
        }
    }
}

// ── Raw input parsing ───────────────────────────────────────────────────────

fn parse_int(field: &'static str, raw: Option<&str>) -> Result<Option<i64>, ValidationError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<i64>().map(Some).map_err(|_| {
        ValidationError::new(field, format!("must be an integer, got '{raw}'"))
    })
}

fn parse_id_list(field: &'static str, raw: Option<&str>) -> Result<Vec<i64>, ValidationError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>().map_err(|_| {
                ValidationError::new(field, format!("must be a list of integer ids, got '{s}'"))
            })
        })
        .collect()
}
