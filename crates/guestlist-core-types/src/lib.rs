//! Core types shared across guest list facilities
//!
//! This crate provides the canonical schema constants used by both the
//! error and logging facilities, so field keys and event names never drift
//! between crates.

pub mod schema;
