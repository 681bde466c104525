//! HTTP handlers, one module per resource.

pub mod game_tags;
pub mod games;
pub mod health;
pub mod routes;
pub mod stats;
pub mod tags;

use actix_web::HttpResponse;
use game_shelf_db::OperationError;
use serde_json::json;

/// Map an engine error onto the matching HTTP status.
pub(crate) fn error_response(err: OperationError) -> HttpResponse {
    match &err {
        OperationError::Validation(_) => {
            log::warn!("rejected input: {err}");
            HttpResponse::UnprocessableEntity().json(json!({ "error": err.to_string() }))
        }
        OperationError::NotFound { .. } => {
            HttpResponse::NotFound().json(json!({ "error": err.to_string() }))
        }
        OperationError::Conflict { .. } => {
            log::warn!("rejected write: {err}");
            HttpResponse::Conflict().json(json!({ "error": err.to_string() }))
        }
        OperationError::Sqlite(_) => {
            log::error!("storage failure: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "internal error" }))
        }
    }
}
