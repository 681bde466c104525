//! Aggregate stats backing the client's filter sliders.

use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use game_shelf_db::queries;

use crate::http::error_response;
use crate::state::Db;

/// GET /api/games-player-stats
#[get("/games-player-stats")]
pub async fn player_stats(db: web::Data<Db>) -> impl Responder {
    let conn = db.get();
    let bounds = queries::min_players_across_games(&conn)
        .and_then(|min| queries::max_players_across_games(&conn).map(|max| (min, max)));
    match bounds {
        Ok((min, max)) => {
            let min_players = min.unwrap_or(1);
            let max_players = max.unwrap_or(10);
            HttpResponse::Ok().json(json!({
                "min_players": min_players,
                "max_players": max_players,
                "suggested_default": (min_players + max_players + 1) / 2,
            }))
        }
        Err(e) => error_response(e),
    }
}

/// GET /api/games-age-stats
#[get("/games-age-stats")]
pub async fn age_stats() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "min_age": 1,
        "max_age": 18,
        "suggested_default": 8,
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(player_stats).service(age_stats);
}
