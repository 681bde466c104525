//! Attach/detach endpoints for the game-tag association.

use actix_web::{HttpResponse, Responder, delete, post, web};
use serde_json::json;

use game_shelf_db::operations;

use crate::http::error_response;
use crate::state::Db;

/// POST /api/games/{game_id}/tags/{tag_id}
#[post("/games/{game_id}/tags/{tag_id}")]
pub async fn attach(path: web::Path<(i64, i64)>, db: web::Data<Db>) -> impl Responder {
    let (game_id, tag_id) = path.into_inner();
    let conn = db.get();
    match operations::attach_tag(&conn, game_id, tag_id) {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Tag attached successfully." })),
        Err(e) => error_response(e),
    }
}

/// DELETE /api/games/{game_id}/tags/{tag_id}
#[delete("/games/{game_id}/tags/{tag_id}")]
pub async fn detach(path: web::Path<(i64, i64)>, db: web::Data<Db>) -> impl Responder {
    let (game_id, tag_id) = path.into_inner();
    let conn = db.get();
    match operations::detach_tag(&conn, game_id, tag_id) {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "Tag detached successfully." })),
        Err(e) => error_response(e),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(attach).service(detach);
}
