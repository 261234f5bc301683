//! Schema bootstrap
//!
//! The `guests` DDL is embedded at compile time and written with
//! `IF NOT EXISTS`, so applying it to an initialized database is a no-op.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;

/// Name of the table holding guest rows
pub const GUESTS_TABLE: &str = "guests";

const GUESTS_DDL: &str = include_str!("../../schema/guests.sql");

/// Create the guest table and its lookup index if they are absent
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(GUESTS_DDL).map_err(from_rusqlite)?;
    tracing::debug!(table = GUESTS_TABLE, "schema ensured");
    Ok(())
}
