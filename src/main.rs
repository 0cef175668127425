//! Address Book - demonstration entry point
//!
//! Builds a small address book and prints every contact along with the
//! names of contacts whose birthday falls within the configured window.

use address_book::{AddressBook, Config, ContactRecord};
use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize logging (stderr only, stdout carries the report)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let book = sample_book().context("Failed to build sample address book")?;
    info!(contacts = book.len(), "Address book ready");

    for record in &book {
        println!("{}", record);
    }

    let upcoming = book.upcoming_birthdays(config.birthday_window_days);
    info!(
        window_days = config.birthday_window_days,
        matches = upcoming.len(),
        "Checked upcoming birthdays"
    );

    if upcoming.is_empty() {
        println!(
            "No birthdays in the next {} days",
            config.birthday_window_days
        );
    } else {
        println!(
            "Birthdays in the next {} days: {}",
            config.birthday_window_days,
            upcoming.join(", ")
        );
    }

    Ok(())
}

fn sample_book() -> Result<AddressBook> {
    let mut book = AddressBook::new();

    let mut alice = ContactRecord::new("Alice")?;
    alice.add_phone("1234567890")?;
    alice.set_birthday("01.08.1990")?;
    book.add_record(alice);

    let mut bob = ContactRecord::new("Bob")?;
    bob.add_phone("0987654321")?;
    bob.set_birthday("05.08.1990")?;
    book.add_record(bob);

    Ok(book)
}
