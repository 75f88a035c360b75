use serde::{Deserialize, Serialize};

/// A person record as persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Store-assigned identifier, immutable once assigned.
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl Person {
    /// Creates a person with an already-assigned identifier.
    pub fn new(id: i64, name: impl Into<String>, age: i64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }
}

/// A person candidate without an identifier.
///
/// This is the shape of create and update payloads; the store assigns the
/// identifier on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub age: i64,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_serializes_with_id() {
        let person = Person::new(7, "Ada", 36);
        let json = serde_json::to_value(&person).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["age"], 36);
    }

    #[test]
    fn test_new_person_deserializes_without_id() {
        let payload: NewPerson = serde_json::from_str(r#"{"name":"Ada","age":36}"#).unwrap();

        assert_eq!(payload, NewPerson::new("Ada", 36));
    }

    #[test]
    fn test_new_person_rejects_non_integer_age() {
        let result = serde_json::from_str::<NewPerson>(r#"{"name":"Ada","age":"old"}"#);

        assert!(result.is_err());
    }
}
