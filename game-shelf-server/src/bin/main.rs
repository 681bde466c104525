use actix_web::{App, HttpServer, middleware::Logger, web};
use game_shelf_server::{config, http, state::Db};
use std::path::Path;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let settings = config::settings();

    let conn = game_shelf_db::open_database(Path::new(&settings.database_path))
        .expect("Failed to open shelf database");
    let db = web::Data::new(Db::new(conn));

    log::info!(
        "serving {} on {}",
        settings.database_path,
        settings.server_addr
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(db.clone())
            .configure(http::routes::init_routes)
    })
    .bind(&settings.server_addr)?
    .run()
    .await
}
