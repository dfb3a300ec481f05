// src/state_store/mod.rs
//
// Session-scoped key/value storage behind a trait, so the view-state
// engine persists and restores without knowing whether the backing is
// SQLite or a test map. Reads and writes are soft-failing by contract:
// a store that cannot answer behaves like an empty one, and the engine
// falls back to its defaults.

pub mod sqlite;

use std::cell::RefCell;
use std::collections::HashMap;

pub use sqlite::SqliteStore;

pub trait StateStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store used by unit tests and as a stand-in when no session
/// is available.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
