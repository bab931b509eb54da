//! Key/value storage of whole serialized lists.
//!
//! Each list lives under its own key and is overwritten wholesale on every
//! save; there are no partial writes.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const EMPLOYEES_KEY: &str = "employees";
pub const ENTRIES_KEY: &str = "entries";

/// Raw JSON stored under `key`, if any.
pub fn load_blob(pool: &DbPool, key: &str) -> AppResult<Option<String>> {
    let value = pool
        .conn
        .query_row("SELECT value FROM storage WHERE key = ?1", [key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

pub fn save_blob(pool: &DbPool, key: &str, value: &str) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO storage (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Deserialize the list stored under `key`; a missing key is an empty list.
pub fn load_list<T: DeserializeOwned>(pool: &DbPool, key: &str) -> AppResult<Vec<T>> {
    match load_blob(pool, key)? {
        Some(json) if !json.trim().is_empty() => Ok(serde_json::from_str(&json)?),
        _ => Ok(Vec::new()),
    }
}

pub fn save_list<T: Serialize>(pool: &DbPool, key: &str, items: &[T]) -> AppResult<()> {
    let json = serde_json::to_string(items)?;
    save_blob(pool, key, &json)
}
