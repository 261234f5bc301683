//! Guest List Demonstration
//!
//! Walks one guest list through every store operation.
//!
//! Run with `GUESTLIST_DB_PATH` set to keep the list on disk; without it the
//! demo uses an in-memory database.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use guestlist_core::logging_facility::{init, Profile};
use guestlist_store::{GuestStore, StoreConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);

    println!("=== Guest List Demo ===\n");

    let store = if std::env::var_os("GUESTLIST_DB_PATH").is_some() {
        let config = StoreConfig::from_env()?;
        println!("Using database at {}", config.db_path.display());
        GuestStore::open(&config)?
    } else {
        println!("Using in-memory database");
        GuestStore::open_in_memory()?
    };

    // ===== Part 1: Invitations =====
    println!("\n## Part 1: Invitations\n");

    for (first, last) in [("Ella", "Fitzgerald"), ("Nina", "Simone"), ("Ella", "Fitzgerald")] {
        let id = store.insert_guest(first, last)?;
        println!("✓ Invited {} {} (id {})", first, last, id);
    }

    // ===== Part 2: RSVPs =====
    println!("\n## Part 2: RSVPs\n");

    store.rsvp("Nina", "Simone", true)?;
    println!("✓ Nina Simone is coming");

    // Only the first Ella Fitzgerald row answers
    store.rsvp("Ella", "Fitzgerald", false)?;
    println!("✓ Ella Fitzgerald declined");

    // ===== Part 3: Lookups and removals =====
    println!("\n## Part 3: Lookups\n");

    let nina = store.get_guest("Nina", "Simone")?;
    println!("Found {} (attending: {})", nina.full_name(), nina.is_attending());

    match store.get_guest("Billie", "Holiday") {
        Ok(_) => println!("Unexpected: Billie Holiday is on the list"),
        Err(e) => println!("✓ Lookup failed as expected: {}", e),
    }

    store.delete_guest("Ella", "Fitzgerald")?;
    println!("✓ Removed the first Ella Fitzgerald");

    // ===== Summary =====
    println!("\n## Guest List\n");
    for guest in store.get_guest_list()? {
        let answer = match guest.rsvp_status {
            Some(true) => "attending",
            Some(false) => "declined",
            None => "no answer",
        };
        println!("{:>3}  {:<20} {}", guest.id, guest.full_name(), answer);
    }

    Ok(())
}
