//! Guest List Store - SQLite persistence for the guest list
//!
//! Provides:
//! - Connection management and store configuration
//! - Idempotent schema bootstrap for the `guests` table
//! - `GuestStore`, the insert/delete/get/list/rsvp operations

pub mod config;
pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;

// Re-export key types
pub use config::StoreConfig;
pub use errors::Result;
pub use repo::GuestStore;
