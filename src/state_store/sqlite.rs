// src/state_store/sqlite.rs

use crate::db::{view_state, Database};
use crate::state_store::StateStore;
use chrono::Utc;

/// View-state store backed by the sessions database, scoped to one
/// visitor's session hash. Storage failures degrade to "nothing
/// persisted" rather than failing the request: a broken store only
/// costs the visitor their remembered view mode and page.
pub struct SqliteStore<'a> {
    db: &'a Database,
    session_hash: [u8; 32],
}

impl<'a> SqliteStore<'a> {
    pub fn new(db: &'a Database, session_hash: [u8; 32]) -> Self {
        Self { db, session_hash }
    }
}

impl StateStore for SqliteStore<'_> {
    fn get(&self, key: &str) -> Option<String> {
        match self
            .db
            .with_conn(|conn| view_state::get_value(conn, &self.session_hash, key))
        {
            Ok(value) => value,
            Err(e) => {
                eprintln!("view-state read failed for {key}: {e}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let now = Utc::now().timestamp();
        if let Err(e) = self.db.with_conn(|conn| {
            view_state::set_value(conn, &self.session_hash, key, value, now)
        }) {
            eprintln!("view-state write failed for {key}: {e}");
        }
    }
}
