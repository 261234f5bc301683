//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

use crate::config::StoreConfig;
use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Apply the connection settings named by `config`
pub fn configure(conn: &Connection, config: &StoreConfig) -> Result<()> {
    conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))
        .map_err(from_rusqlite)?;

    if config.wal {
        // journal_mode answers with the mode actually in effect
        let mode: String = conn
            .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
            .map_err(from_rusqlite)?;
        tracing::debug!(journal_mode = %mode, "configured journal mode");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_applies_busy_timeout() {
        let conn = open_in_memory().unwrap();
        let config = StoreConfig {
            busy_timeout_ms: 1234,
            ..StoreConfig::default()
        };
        configure(&conn, &config).unwrap();

        let timeout: i64 = conn
            .query_row("PRAGMA busy_timeout", [], |row| row.get(0))
            .unwrap();
        assert_eq!(timeout, 1234);
    }

    #[test]
    fn test_configure_file_uses_wal() {
        let dir = tempfile::tempdir().unwrap();
        let conn = open(dir.path().join("guests.db")).unwrap();
        configure(&conn, &StoreConfig::default()).unwrap();

        let mode: String = conn
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(mode.to_lowercase(), "wal");
    }

    #[test]
    fn test_configure_without_wal_keeps_delete_mode() {
        let dir = tempfile::tempdir().unwrap();
        let conn = open(dir.path().join("guests.db")).unwrap();
        configure(&conn, &StoreConfig::default().with_wal(false)).unwrap();

        let mode: String = conn
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(mode.to_lowercase(), "delete");
    }
}
