//! Name value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The display name of a contact.
///
/// A name is the identity key of a record inside an
/// [`AddressBook`](crate::book::AddressBook), so it can never be empty.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("Alice").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// assert!(Name::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the provided name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::InvalidName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Name {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = Name::new("Alice").unwrap();
        assert_eq!(name.as_str(), "Alice");
        assert_eq!(name.into_inner(), "Alice");
    }

    #[test]
    fn test_name_rejects_empty() {
        assert_eq!(Name::new(""), Err(ValidationError::InvalidName));
    }

    #[test]
    fn test_name_keeps_whitespace_as_given() {
        // Only emptiness is rejected; the text is stored verbatim.
        let name = Name::new(" Bob ").unwrap();
        assert_eq!(name.as_str(), " Bob ");
    }

    #[test]
    fn test_name_from_str() {
        let name: Name = "Carol".parse().unwrap();
        assert_eq!(format!("{}", name), "Carol");
    }

    #[test]
    fn test_name_deserialization_empty_fails() {
        let result: Result<Name, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
