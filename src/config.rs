// src/config.rs
use std::env;

/// Runtime settings, all overridable from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Base URL of the REST backend serving /api/properties and /api/projects.
    pub backend_url: String,
    /// Path of the SQLite file holding per-session view state.
    pub database_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
            backend_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "estate_portal.sqlite3".to_string()),
        }
    }
}
