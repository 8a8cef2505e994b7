//! Schema migrations for the wishlist database.
//!
//! A `schema_version` table records which migrations have been applied.
//! Each migration runs exactly once.

use rusqlite::Connection;

/// Current schema version. Bump this when adding a new migration.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Returns the current schema version from the database (0 if table doesn't exist).
pub fn get_schema_version(conn: &Connection) -> i32 {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .unwrap_or(0)
}

/// Runs all pending schema migrations against the provided connection.
///
/// Safe to call on every startup.
///
/// # Errors
/// Returns `rusqlite::Error` if any SQL statement fails.
pub fn run_all(conn: &Connection) -> Result<(), rusqlite::Error> {
    // journal_mode returns a row, so it cannot go through execute_batch
    let _mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
             version INTEGER PRIMARY KEY,
             applied_at TEXT NOT NULL,
             description TEXT NOT NULL
         );",
    )?;

    let current = get_schema_version(conn);

    if current < 1 {
        migration_v1(conn)?;
        record_version(conn, 1, "Create destinations collection and lookup indexes")?;
        tracing::info!(version = 1, "applied schema migration");
    }

    Ok(())
}

fn record_version(conn: &Connection, version: i32, description: &str) -> Result<(), rusqlite::Error> {
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at, description) VALUES (?1, ?2, ?3)",
        rusqlite::params![version, crate::types::destination::timestamp_now(), description],
    )?;
    Ok(())
}

/// V1: the destinations collection.
///
/// `date_added` orders every listing, `visited` pairs with it for the
/// visited-only listing, `name` serves exact-name lookup.
fn migration_v1(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS destinations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            notes TEXT,
            image_url TEXT,
            date_added TEXT NOT NULL,
            visited INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_destinations_date_added ON destinations(date_added);
        CREATE INDEX IF NOT EXISTS idx_destinations_name ON destinations(name);
        CREATE INDEX IF NOT EXISTS idx_destinations_visited ON destinations(visited, date_added);
        ",
    )
}
