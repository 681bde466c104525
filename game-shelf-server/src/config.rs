//! Runtime configuration for the game shelf server.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// SQLite database file.
    pub database_path: String,
    /// Listen address.
    pub server_addr: String,
}

impl Settings {
    fn from_env() -> Self {
        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "game-shelf.db".into());
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into());

        Settings {
            database_path,
            server_addr,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
