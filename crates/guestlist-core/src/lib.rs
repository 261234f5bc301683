//! Guest List Core - domain record, error facility and logging facility
//!
//! This crate provides the pieces every layer of the guest list shares:
//! - The `Guest` record returned by the store
//! - The structured error facility (`ExError`, `ExErrorKind`) and the
//!   domain error enum (`GuestListError`)
//! - The logging facility (`init`, `log_op_*!` macros, test capture)

pub mod errors;
pub mod logging_facility;
pub mod model;

pub use guestlist_core_types as core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, GuestListError};
pub use model::Guest;
