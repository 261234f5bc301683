//! SQLite-backed guest store
//!
//! ## Logging Ownership
//!
//! `GuestStore` is the operation boundary: each public operation emits
//! `log_op_start!` at entry and `log_op_end!` / `log_op_error!` on exit.
//! The private `*_impl` helpers use only `tracing::debug!`.

use crate::config::StoreConfig;
use crate::db;
use crate::errors::{from_rusqlite, guest_not_found, Result};
use crate::schema::ensure_schema;
use guestlist_core::model::Guest;
use guestlist_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::{Connection, OptionalExtension, Row};
use std::time::Instant;

// The first match of a name pair is the row with the lowest id.
const FIRST_MATCH_ID: &str =
    "SELECT id FROM guests WHERE first_name = ?1 AND last_name = ?2 ORDER BY id LIMIT 1";

/// Guest list persisted in one SQLite table
///
/// Owns its connection. Construct once and pass by reference; every
/// constructor ensures the `guests` table exists first.
pub struct GuestStore {
    conn: Connection,
}

impl GuestStore {
    /// Open the file database named by `config`
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let conn = db::open(&config.db_path)?;
        db::configure(&conn, config)?;
        tracing::debug!(db_path = %config.db_path.display(), "opened guest store");
        Self::from_connection(conn)
    }

    /// Open a store backed by a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Wrap an already opened connection
    pub fn from_connection(conn: Connection) -> Result<Self> {
        ensure_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Direct access to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Add a guest with no RSVP recorded
    ///
    /// Duplicate name pairs are allowed; each call adds a new row.
    ///
    /// ## Returns
    ///
    /// The id assigned to the new row
    pub fn insert_guest(&self, first_name: &str, last_name: &str) -> Result<i64> {
        log_op_start!("insert_guest", first_name = first_name, last_name = last_name);
        let start = Instant::now();

        let guest_id = self.insert_guest_impl(first_name, last_name).map_err(|e| {
            log_op_error!(
                "insert_guest",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "insert_guest",
            duration_ms = start.elapsed().as_millis() as u64,
            guest_id = guest_id
        );

        Ok(guest_id)
    }

    /// Remove the first guest matching the name pair
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no guest has this name pair
    /// - `Persistence`: database error
    pub fn delete_guest(&self, first_name: &str, last_name: &str) -> Result<()> {
        log_op_start!("delete_guest", first_name = first_name, last_name = last_name);
        let start = Instant::now();

        self.delete_guest_impl(first_name, last_name).map_err(|e| {
            log_op_error!(
                "delete_guest",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "delete_guest",
            duration_ms = start.elapsed().as_millis() as u64
        );

        Ok(())
    }

    /// Fetch the first guest matching the name pair
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no guest has this name pair
    /// - `Persistence`: database error
    pub fn get_guest(&self, first_name: &str, last_name: &str) -> Result<Guest> {
        log_op_start!("get_guest", first_name = first_name, last_name = last_name);
        let start = Instant::now();

        let guest = self.get_guest_impl(first_name, last_name).map_err(|e| {
            log_op_error!(
                "get_guest",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "get_guest",
            duration_ms = start.elapsed().as_millis() as u64,
            guest_id = guest.id
        );

        Ok(guest)
    }

    /// List every guest in insertion order
    pub fn get_guest_list(&self) -> Result<Vec<Guest>> {
        log_op_start!("get_guest_list");
        let start = Instant::now();

        let guests = self.get_guest_list_impl().map_err(|e| {
            log_op_error!(
                "get_guest_list",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "get_guest_list",
            duration_ms = start.elapsed().as_millis() as u64,
            guest_count = guests.len()
        );

        Ok(guests)
    }

    /// Record an RSVP answer for the first guest matching the name pair
    ///
    /// Only `rsvp_status` changes; id and names are left as they were.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no guest has this name pair
    /// - `Persistence`: database error
    pub fn rsvp(&self, first_name: &str, last_name: &str, status: bool) -> Result<()> {
        log_op_start!(
            "rsvp",
            first_name = first_name,
            last_name = last_name,
            rsvp_status = status
        );
        let start = Instant::now();

        self.rsvp_impl(first_name, last_name, status).map_err(|e| {
            log_op_error!(
                "rsvp",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!("rsvp", duration_ms = start.elapsed().as_millis() as u64);

        Ok(())
    }

    fn insert_guest_impl(&self, first_name: &str, last_name: &str) -> Result<i64> {
        let mut stmt = self
            .conn
            .prepare("INSERT INTO guests (first_name, last_name) VALUES (?1, ?2)")
            .map_err(from_rusqlite)?;
        let guest_id = stmt
            .insert(rusqlite::params![first_name, last_name])
            .map_err(from_rusqlite)?;

        tracing::debug!(guest_id, "inserted guest row");
        Ok(guest_id)
    }

    fn delete_guest_impl(&self, first_name: &str, last_name: &str) -> Result<()> {
        let sql = format!("DELETE FROM guests WHERE id = ({})", FIRST_MATCH_ID);
        let mut stmt = self.conn.prepare(&sql).map_err(from_rusqlite)?;
        let deleted = stmt
            .execute(rusqlite::params![first_name, last_name])
            .map_err(from_rusqlite)?;

        if deleted == 0 {
            return Err(guest_not_found("delete_guest", first_name, last_name));
        }

        tracing::debug!(deleted, "deleted guest row");
        Ok(())
    }

    fn get_guest_impl(&self, first_name: &str, last_name: &str) -> Result<Guest> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, first_name, last_name, rsvp_status FROM guests
                 WHERE first_name = ?1 AND last_name = ?2
                 ORDER BY id LIMIT 1",
            )
            .map_err(from_rusqlite)?;

        stmt.query_row(rusqlite::params![first_name, last_name], guest_from_row)
            .optional()
            .map_err(from_rusqlite)?
            .ok_or_else(|| guest_not_found("get_guest", first_name, last_name))
    }

    fn get_guest_list_impl(&self) -> Result<Vec<Guest>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, first_name, last_name, rsvp_status FROM guests ORDER BY id")
            .map_err(from_rusqlite)?;

        let guests = stmt
            .query_map([], guest_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(guests)
    }

    fn rsvp_impl(&self, first_name: &str, last_name: &str, status: bool) -> Result<()> {
        let sql = format!(
            "UPDATE guests SET rsvp_status = ?3 WHERE id = ({})",
            FIRST_MATCH_ID
        );
        let mut stmt = self.conn.prepare(&sql).map_err(from_rusqlite)?;
        let updated = stmt
            .execute(rusqlite::params![first_name, last_name, status])
            .map_err(from_rusqlite)?;

        if updated == 0 {
            return Err(guest_not_found("rsvp", first_name, last_name));
        }

        tracing::debug!(updated, rsvp_status = status, "recorded rsvp");
        Ok(())
    }
}

fn guest_from_row(row: &Row<'_>) -> rusqlite::Result<Guest> {
    Ok(Guest {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        rsvp_status: row.get(3)?,
    })
}
