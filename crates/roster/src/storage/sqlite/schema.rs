//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create the persons table.
///
/// The name-length constraint is enforced by the validation layer, not the
/// store, so the column carries no CHECK.
pub const CREATE_TABLES: &str = r#"
-- Persons table
CREATE TABLE IF NOT EXISTS persons (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    age INTEGER
);
"#;

pub const INSERT_PERSON: &str = r#"
INSERT INTO persons (name, age)
VALUES (?1, ?2)
"#;

pub const SELECT_ALL_PERSONS: &str = r#"
SELECT id, name, age
FROM persons
"#;

pub const SELECT_PERSON_BY_ID: &str = r#"
SELECT id, name, age
FROM persons
WHERE id = ?1
"#;

pub const SELECT_PERSONS_BY_NAME: &str = r#"
SELECT id, name, age
FROM persons
WHERE name = ?1
"#;

pub const UPDATE_PERSON: &str = r#"
UPDATE persons
SET name = ?2, age = ?3
WHERE id = ?1
"#;

pub const DELETE_PERSON: &str = r#"
DELETE FROM persons
WHERE id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS persons"));
        assert!(CREATE_TABLES.contains("INTEGER PRIMARY KEY AUTOINCREMENT"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_PERSON.contains("INSERT"));
        assert!(SELECT_ALL_PERSONS.contains("SELECT"));
        assert!(SELECT_PERSON_BY_ID.contains("id = ?1"));
        assert!(SELECT_PERSONS_BY_NAME.contains("name = ?1"));
        assert!(UPDATE_PERSON.contains("UPDATE"));
        assert!(DELETE_PERSON.contains("DELETE"));
    }

    #[test]
    fn test_insert_leaves_id_to_the_store() {
        // The id column must never appear in the insert statement; the
        // store assigns it.
        assert!(!INSERT_PERSON.contains("id"));
    }
}
