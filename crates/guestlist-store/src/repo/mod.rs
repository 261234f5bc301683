//! Repository layer for guest records

pub mod guest_store;

pub use guest_store::GuestStore;
