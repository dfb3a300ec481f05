// src/db/view_state.rs
//
// Session-scoped key/value rows backing the listing screens' persisted
// view state (view mode, current page). Keys are scoped per screen by
// the caller ("properties-view-mode" etc.); rows are scoped per visitor
// by the session token hash.

use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

pub fn get_value(
    conn: &Connection,
    session_hash: &[u8],
    key: &str,
) -> Result<Option<String>, ServerError> {
    conn.query_row(
        r#"
        select value
        from view_state
        where session_hash = ? and key = ?
        "#,
        params![session_hash, key],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("view_state lookup failed: {e}")))
}

pub fn set_value(
    conn: &Connection,
    session_hash: &[u8],
    key: &str,
    value: &str,
    now: i64,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into view_state (session_hash, key, value, updated_at)
        values (?1, ?2, ?3, ?4)
        on conflict(session_hash, key) do update set
            value = excluded.value,
            updated_at = excluded.updated_at
        "#,
        params![session_hash, key, value, now],
    )
    .map_err(|e| ServerError::DbError(format!("view_state write failed: {e}")))?;

    Ok(())
}
