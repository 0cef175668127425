//! Address Book - a personal contact directory.
//!
//! Contacts have a unique name, any number of validated phone numbers and an
//! optional birthday. The book can report which contacts have a birthday
//! coming up within a window of days.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `PhoneNumber`, `Birthday`)
//! - **models**: The `ContactRecord` aggregating one contact's fields
//! - **book**: The `AddressBook` collection and birthday window queries
//! - **config**: Configuration management from environment variables
//! - **error**: Error types
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, ContactRecord};
//! use chrono::NaiveDate;
//!
//! let mut alice = ContactRecord::new("Alice")?;
//! alice.add_phone("1234567890")?;
//! alice.set_birthday("01.08.1990")?;
//!
//! let mut book = AddressBook::new();
//! book.add_record(alice);
//!
//! let today = NaiveDate::from_ymd_opt(2026, 7, 30).unwrap();
//! assert_eq!(book.upcoming_birthdays_from(today, 7), ["Alice"]);
//! # Ok::<(), address_book::ValidationError>(())
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError, ValidationResult};
pub use error::{ConfigError, ConfigResult};
pub use models::ContactRecord;
