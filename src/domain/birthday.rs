//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Textual format accepted and produced by [`Birthday`].
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts unpadded fields ("1.8.1990"), so the shape is checked first.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern is a valid regex")
});

/// A calendar birth date parsed from `DD.MM.YYYY`.
///
/// Impossible dates such as `31.02.2000` or `29.02.2001` are rejected.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2000").unwrap();
/// assert_eq!(birthday.to_string(), "29.02.2000");
/// assert!(Birthday::new("29.02.2001").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a Birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the text does not have the
    /// `DD.MM.YYYY` shape or does not name a real calendar date.
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let text = text.as_ref();
        let invalid = || ValidationError::InvalidDate(text.to_string());

        if !BIRTHDAY_SHAPE.is_match(text) {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT).map_err(|_| invalid())?;
        if date.year() < 1 {
            return Err(invalid());
        }

        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's month and day placed in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    /// Returns `None` only when `year` is outside chrono's supported range.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            if month == 2 && day == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as DD.MM.YYYY
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
