//! Person entity and its input validation

use crate::core::error::ValidationError;
use crate::core::id::RecordId;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static PERSON_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-zA-Z\s]*$").expect("person name pattern is valid")
});

/// A person stored in the `people` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
}

impl Person {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Input for adding a person, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewPerson {
    pub name: String,
}

impl NewPerson {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Validate the input and assign a fresh id.
    ///
    /// The name is trimmed, must be non-empty, start with a capital letter,
    /// and contain only letters and spaces after that.
    pub fn validate(self) -> Result<Person, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField("Name"));
        }
        if !PERSON_NAME.is_match(name) {
            return Err(ValidationError::InvalidPersonName);
        }
        Ok(Person::new(RecordId::generate(), name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_name() {
        let person = NewPerson::new("  Alice  ").validate().unwrap();
        assert_eq!(person.name, "Alice");
        assert!(!person.id.is_blank());
    }

    #[test]
    fn test_validate_accepts_spaces() {
        let person = NewPerson::new("Mary Ann").validate().unwrap();
        assert_eq!(person.name, "Mary Ann");
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert_eq!(
            NewPerson::new("   ").validate(),
            Err(ValidationError::EmptyField("Name"))
        );
    }

    #[test]
    fn test_validate_rejects_lowercase_start() {
        assert_eq!(
            NewPerson::new("alice").validate(),
            Err(ValidationError::InvalidPersonName)
        );
    }

    #[test]
    fn test_validate_rejects_digits() {
        assert_eq!(
            NewPerson::new("Alice2").validate(),
            Err(ValidationError::InvalidPersonName)
        );
    }

    #[test]
    fn test_deserialize_without_id() {
        let person: Person = serde_json::from_str(r#"{"name":"Bob"}"#).unwrap();
        assert!(person.id.is_blank());
        assert_eq!(person.name, "Bob");
    }
}
