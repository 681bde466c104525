//! Shared application state.

use std::sync::{Mutex, MutexGuard, PoisonError};

use rusqlite::Connection;

/// The SQLite handle shared across actix workers.
///
/// Every engine call is a single read or a single idempotent write, so one
/// connection behind a mutex is all the coordination the API needs.
pub struct Db {
    conn: Mutex<Connection>,
}

impl Db {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    pub fn get(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
