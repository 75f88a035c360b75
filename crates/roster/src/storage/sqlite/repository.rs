//! SQLite repository implementation.
//!
//! Implements the repository trait from `roster_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use roster_core::person::{NewPerson, Person};
use roster_core::storage::{PersonRepository, PersonSelector, RepositoryError, Result};

use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_key};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Maps a result row to a Person.
fn row_to_person(row: &rusqlite::Row<'_>) -> rusqlite::Result<Person> {
    Ok(Person {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
    })
}

/// SQLite-based person repository.
///
/// Provides async access to SQLite storage. All statements funnel through
/// the connection's single owner thread, so statement execution is
/// serialized across concurrent callers and each write commits atomically.
pub struct SqlitePersonRepository {
    conn: Connection,
}

impl SqlitePersonRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// The schema is applied idempotently.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl PersonRepository for SqlitePersonRepository {
    async fn list_persons(&self) -> Result<Vec<Person>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_PERSONS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_person).map_err(wrap_err)?;

                let mut persons = Vec::new();
                for row_result in rows {
                    persons.push(row_result.map_err(wrap_err)?);
                }
                Ok(persons)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Person"))
    }

    async fn create_person(&self, person: &NewPerson) -> Result<()> {
        let name = person.name.clone();
        let age = person.age;

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_PERSON, rusqlite::params![name, age])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Person"))
    }

    async fn find_persons(&self, selector: &PersonSelector) -> Result<Vec<Person>> {
        let selector = selector.clone();
        let key = selector.to_string();

        self.conn
            .call(move |conn| {
                let mut persons = Vec::new();

                match &selector {
                    PersonSelector::Id(id) => {
                        let mut stmt =
                            conn.prepare(schema::SELECT_PERSON_BY_ID).map_err(wrap_err)?;
                        let rows = stmt.query_map([id], row_to_person).map_err(wrap_err)?;
                        for row_result in rows {
                            persons.push(row_result.map_err(wrap_err)?);
                        }
                    }
                    PersonSelector::Name(name) => {
                        let mut stmt = conn
                            .prepare(schema::SELECT_PERSONS_BY_NAME)
                            .map_err(wrap_err)?;
                        let rows = stmt.query_map([name], row_to_person).map_err(wrap_err)?;
                        for row_result in rows {
                            persons.push(row_result.map_err(wrap_err)?);
                        }
                    }
                }

                Ok(persons)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_key(e, "Person", key))
    }

    async fn update_person(&self, id: i64, person: &NewPerson) -> Result<()> {
        let name = person.name.clone();
        let age = person.age;
        let key = PersonSelector::Id(id).to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_PERSON, rusqlite::params![id, name, age])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_key(e, "Person", key))
    }

    async fn delete_person(&self, id: i64) -> Result<()> {
        let key = PersonSelector::Id(id).to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_PERSON, [id])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_key(e, "Person", key))
    }
}
