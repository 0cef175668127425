//! The address book: a keyed collection of contact records.
//!
//! Records are keyed by their name's text. The book owns its records; the
//! key of an entry always equals the name of the record stored under it,
//! which is why only the operations below are exposed instead of a general
//! map interface.
//!
//! Iteration follows insertion order. Overwriting an existing name keeps the
//! entry's original position.
//!
//! The book is not synchronized. A multi-threaded host should wrap it in a
//! lock (for example `std::sync::RwLock`) with writers for `add_record` and
//! `delete` and readers for lookups and birthday queries.

pub mod birthdays;

use crate::models::ContactRecord;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Default number of days looked ahead by [`AddressBook::upcoming_birthdays`].
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u64 = 7;

/// A collection of contact records with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ContactRecord>", into = "Vec<ContactRecord>")]
pub struct AddressBook {
    records: Vec<ContactRecord>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }

    /// Insert `record` under its name, silently replacing any record with the
    /// same name.
    pub fn add_record(&mut self, record: ContactRecord) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                tracing::debug!(contact = %record.name(), "Overwriting existing record");
                self.records[index] = record;
            }
            None => {
                tracing::debug!(contact = %record.name(), "Adding record");
                self.records.push(record);
            }
        }
    }

    /// The record named `name`, if present.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.position(name).map(|index| &self.records[index])
    }

    /// Mutable access to the record named `name`, if present.
    ///
    /// The record's name cannot be changed through this reference, so the
    /// entry's key stays consistent.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.position(name).map(move |index| &mut self.records[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove the record named `name`. Deleting an absent name is a no-op.
    ///
    /// Returns the removed record, if there was one.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let index = self.position(name)?;
        tracing::debug!(contact = name, "Deleting record");
        Some(self.records.remove(index))
    }

    /// Names of contacts whose birthday falls within the next `days` days,
    /// counting from today's local date.
    pub fn upcoming_birthdays(&self, days: u64) -> Vec<String> {
        self.upcoming_birthdays_from(Local::now().date_naive(), days)
    }

    /// Names of contacts with an anniversary in `[today, today + days)`,
    /// in insertion order.
    ///
    /// A 29 February birthday counts on 28 February in common years. Windows
    /// that cross New Year's Day include birthdays early in the next year.
    pub fn upcoming_birthdays_from(&self, today: NaiveDate, days: u64) -> Vec<String> {
        let upcoming: Vec<String> = self
            .records
            .iter()
            .filter(|record| {
                record
                    .birthday()
                    .is_some_and(|b| birthdays::is_upcoming(b, today, days))
            })
            .map(|record| {
                tracing::trace!(contact = %record.name(), "Birthday in window");
                record.name().to_string()
            })
            .collect();

        tracing::debug!(
            today = %today,
            days,
            matches = upcoming.len(),
            "Computed upcoming birthdays"
        );
        upcoming
    }
}

impl From<Vec<ContactRecord>> for AddressBook {
    fn from(records: Vec<ContactRecord>) -> Self {
        records.into_iter().collect()
    }
}

impl From<AddressBook> for Vec<ContactRecord> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}

impl FromIterator<ContactRecord> for AddressBook {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        book.extend(iter);
        book
    }
}

impl Extend<ContactRecord> for AddressBook {
    fn extend<I: IntoIterator<Item = ContactRecord>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a ContactRecord;
    type IntoIter = std::slice::Iter<'a, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
