//! Game resource handlers: the list/filter endpoint and CRUD.

use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;
use serde_json::json;

use game_shelf_catalog::{GameFilters, GameUpdate, NewGame, PageRequest};
use game_shelf_db::{operations, queries};

use crate::http::error_response;
use crate::state::Db;

#[derive(Deserialize)]
pub struct ListGamesQuery {
    search: Option<String>,
    /// Comma-separated tag ids; the game must hold every one.
    tag_ids: Option<String>,
    player_count: Option<String>,
    min_age: Option<String>,
    page: Option<String>,
    per_page: Option<String>,
}

/// GET /api/games
#[get("/games")]
pub async fn list(query: web::Query<ListGamesQuery>, db: web::Data<Db>) -> impl Responder {
    let filters = match GameFilters::from_raw(
        query.search.as_deref(),
        query.tag_ids.as_deref(),
        query.player_count.as_deref(),
        query.min_age.as_deref(),
    ) {
        Ok(filters) => filters,
        Err(e) => return error_response(e.into()),
    };
    let page = match PageRequest::from_raw(query.page.as_deref(), query.per_page.as_deref()) {
        Ok(page) => page,
        Err(e) => return error_response(e.into()),
    };

    let conn = db.get();
    match queries::list_games(&conn, &filters, &page) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => error_response(e),
    }
}

/// POST /api/games
#[post("/games")]
pub async fn create(payload: web::Json<NewGame>, db: web::Data<Db>) -> impl Responder {
    let conn = db.get();
    match operations::create_game(&conn, &payload) {
        Ok(game) => HttpResponse::Ok().json(game),
        Err(e) => error_response(e),
    }
}

/// GET /api/games/{id}
#[get("/games/{id}")]
pub async fn show(path: web::Path<i64>, db: web::Data<Db>) -> impl Responder {
    let id = path.into_inner();
    let conn = db.get();
    match queries::find_game(&conn, id) {
        Ok(Some(game)) => HttpResponse::Ok().json(game),
        Ok(None) => HttpResponse::NotFound().json(json!({ "error": format!("game {id} not found") })),
        Err(e) => error_response(e),
    }
}

/// PUT /api/games/{id}
#[put("/games/{id}")]
pub async fn update(
    path: web::Path<i64>,
    payload: web::Json<GameUpdate>,
    db: web::Data<Db>,
) -> impl Responder {
    let conn = db.get();
    match operations::update_game(&conn, path.into_inner(), &payload) {
        Ok(game) => HttpResponse::Ok().json(game),
        Err(e) => error_response(e),
    }
}

/// DELETE /api/games/{id}
#[delete("/games/{id}")]
pub async fn destroy(path: web::Path<i64>, db: web::Data<Db>) -> impl Responder {
    let conn = db.get();
    match operations::delete_game(&conn, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(create)
        .service(show)
        .service(update)
        .service(destroy);
}
