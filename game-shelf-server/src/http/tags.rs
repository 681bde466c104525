//! Tag resource handlers.

use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;
use serde_json::json;

use game_shelf_catalog::{NewTag, PageRequest, TagUpdate};
use game_shelf_db::{operations, queries};

use crate::http::error_response;
use crate::state::Db;

#[derive(Deserialize)]
pub struct ListTagsQuery {
    search: Option<String>,
    /// When truthy, return every tag as a plain array instead of a page.
    all: Option<String>,
    page: Option<String>,
    per_page: Option<String>,
}

/// GET /api/tags
#[get("/tags")]
pub async fn list(query: web::Query<ListTagsQuery>, db: web::Data<Db>) -> impl Responder {
    let conn = db.get();

    if truthy(query.all.as_deref()) {
        return match queries::list_tags_all(&conn, query.search.as_deref()) {
            Ok(tags) => HttpResponse::Ok().json(tags),
            Err(e) => error_response(e),
        };
    }

    let page = match PageRequest::from_raw(query.page.as_deref(), query.per_page.as_deref()) {
        Ok(page) => page,
        Err(e) => return error_response(e.into()),
    };
    match queries::list_tags(&conn, query.search.as_deref(), &page) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => error_response(e),
    }
}

/// POST /api/tags
#[post("/tags")]
pub async fn create(payload: web::Json<NewTag>, db: web::Data<Db>) -> impl Responder {
    let conn = db.get();
    match operations::create_tag(&conn, &payload) {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(e) => error_response(e),
    }
}

/// GET /api/tags/{id}
#[get("/tags/{id}")]
pub async fn show(path: web::Path<i64>, db: web::Data<Db>) -> impl Responder {
    let id = path.into_inner();
    let conn = db.get();
    match queries::find_tag(&conn, id) {
        Ok(Some(detail)) => HttpResponse::Ok().json(detail),
        Ok(None) => HttpResponse::NotFound().json(json!({ "error": format!("tag {id} not found") })),
        Err(e) => error_response(e),
    }
}

/// PUT /api/tags/{id}
#[put("/tags/{id}")]
pub async fn update(
    path: web::Path<i64>,
    payload: web::Json<TagUpdate>,
    db: web::Data<Db>,
) -> impl Responder {
    let conn = db.get();
    match operations::update_tag(&conn, path.into_inner(), &payload) {
        Ok(tag) => HttpResponse::Ok().json(tag),
        Err(e) => error_response(e),
    }
}

/// DELETE /api/tags/{id}
#[delete("/tags/{id}")]
pub async fn destroy(path: web::Path<i64>, db: web::Data<Db>) -> impl Responder {
    let conn = db.get();
    match operations::delete_tag(&conn, path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}

fn truthy(raw: Option<&str>) -> bool {
    matches!(raw, Some("1" | "true" | "on" | "yes"))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(create)
        .service(show)
        .service(update)
        .service(destroy);
}
