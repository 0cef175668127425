//! Contact record: one named entry with phones and an optional birthday.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// The name is fixed at creation. Phones keep their insertion order and may
/// contain duplicates; every stored phone has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: Name,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create a record from an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it to the end of the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is not 10 digits.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> ValidationResult<()> {
        let phone = PhoneNumber::new(phone)?;
        tracing::debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Removing an absent phone is a no-op.
    pub fn remove_phone(&mut self, phone: &str) {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        let removed = before - self.phones.len();
        if removed > 0 {
            tracing::debug!(contact = %self.name, phone, removed, "Removed phone");
        }
    }

    /// Replace `old` with `new` by removing every `old` and appending `new`.
    ///
    /// This is not atomic: the removal happens before `new` is validated, so
    /// when `new` is invalid the old phone is already gone. The new phone
    /// always lands at the end of the list. Use
    /// [`edit_phone_in_place`](Self::edit_phone_in_place) to keep position and
    /// leave the record untouched on error.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> ValidationResult<()> {
        self.remove_phone(old);
        self.add_phone(new)
    }

    /// Replace every phone equal to `old` with `new`, keeping positions.
    ///
    /// `new` is validated before anything changes. Returns `Ok(false)` when no
    /// phone matched `old`, in which case the record is unchanged.
    pub fn edit_phone_in_place(
        &mut self,
        old: &str,
        new: impl Into<String>,
    ) -> ValidationResult<bool> {
        let new = PhoneNumber::new(new)?;
        let mut replaced = false;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = new.clone();
            replaced = true;
        }
        if replaced {
            tracing::debug!(contact = %self.name, old, new = %new, "Replaced phone");
        }
        Ok(replaced)
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Parse `birthday` as `DD.MM.YYYY` and replace any existing birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the text is not a valid date.
    /// The current birthday is kept in that case.
    pub fn set_birthday(&mut self, birthday: &str) -> ValidationResult<()> {
        let birthday = Birthday::new(birthday)?;
        tracing::debug!(contact = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Human-readable one-line summary of the record.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
