use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Key/value table holding the serialized `employees` and `entries` lists.
fn migrate_create_storage(conn: &Connection) -> Result<()> {
    let version = "20250301_0001_create_storage";

    if migration_applied(conn, version)? && table_exists(conn, "storage")? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS storage (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    if !migration_applied(conn, version)? {
        mark_applied(conn, version, "Created key/value storage table")?;
        success(format!(
            "Migration applied: {} → created 'storage' table",
            version
        ));
    }

    Ok(())
}

/// Seed empty lists so that both keys always exist after init.
fn migrate_seed_lists(conn: &Connection) -> Result<()> {
    let version = "20250301_0002_seed_lists";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        INSERT OR IGNORE INTO storage (key, value, updated_at)
            VALUES ('employees', '[]', datetime('now'));
        INSERT OR IGNORE INTO storage (key, value, updated_at)
            VALUES ('entries', '[]', datetime('now'));
        "#,
    )?;

    mark_applied(conn, version, "Seeded empty employees/entries lists")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by `init` and before every command that
/// touches the stores, so an un-initialized file is usable right away.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    migrate_create_storage(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    migrate_seed_lists(conn).map_err(|e| AppError::Migration(e.to_string()))?;

    Ok(())
}
