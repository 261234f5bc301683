pub mod guest;

pub use guest::Guest;
