//! Data models for the address book.
//!
//! A [`ContactRecord`] aggregates the validated domain values of one contact.

pub mod record;

pub use record::ContactRecord;
