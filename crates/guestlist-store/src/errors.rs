//! Error handling for guestlist-store
//!
//! Wraps guestlist-core ExError with store-specific helpers

use guestlist_core::errors::{ExError, ExErrorKind, GuestListError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create the error returned when no guest matches a name pair
pub fn guest_not_found(op: &str, first_name: &str, last_name: &str) -> ExError {
    ExError::from(GuestListError::GuestNotFound {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    })
    .with_op(op)
}

/// Create a configuration error
pub fn config_error(reason: impl Into<String>) -> ExError {
    GuestListError::InvalidConfig {
        reason: reason.into(),
    }
    .into()
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
