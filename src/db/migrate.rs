use rusqlite::{Connection, Result};

/// Ordered schema steps; `PRAGMA user_version` records how many ran.
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "create_attendance_tables",
        r#"
        CREATE TABLE IF NOT EXISTS members (
            name TEXT PRIMARY KEY NOT NULL
        );
        CREATE TABLE IF NOT EXISTS active_sessions (
            name    TEXT PRIMARY KEY NOT NULL,
            sign_in TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS attendance_log (
            position INTEGER PRIMARY KEY,
            name     TEXT NOT NULL,
            sign_in  TEXT NOT NULL,
            sign_out TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS settings (
            key   TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );
        "#,
    ),
    (
        "create_log_table",
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    ),
];

pub fn schema_version(conn: &Connection) -> Result<usize> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v.max(0) as usize)
}

/// Apply every migration newer than the stored schema version.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    let current = schema_version(conn)?;

    for (idx, (name, sql)) in MIGRATIONS.iter().enumerate().skip(current) {
        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", (idx + 1) as i64)?;
        tx.commit()?;
        tracing::info!(migration = *name, version = idx + 1, "schema migration applied");
    }

    Ok(())
}
