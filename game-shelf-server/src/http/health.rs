//! Simple liveness probe

use actix_web::{HttpResponse, Responder, get, web};

use crate::state::Db;

#[get("/healthz")]
pub async fn healthz(db: web::Data<Db>) -> impl Responder {
    let conn = db.get();
    if conn
        .query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
        .is_err()
    {
        return HttpResponse::ServiceUnavailable().body("db");
    }
    HttpResponse::Ok().body("ok")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(healthz);
}
