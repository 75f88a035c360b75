use async_trait::async_trait;

use crate::person::{NewPerson, Person};

use super::{PersonSelector, Result};

/// Repository for person records.
///
/// Each operation is a single logical transaction against the store; writes
/// commit atomically per statement.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Returns every persisted person in natural row order.
    async fn list_persons(&self) -> Result<Vec<Person>>;

    /// Inserts a new person; the store assigns the identifier.
    async fn create_person(&self, person: &NewPerson) -> Result<()>;

    /// Returns all persons matching the selector.
    ///
    /// Name lookups may match several rows; id lookups at most one. The
    /// result is a sequence either way, and an empty result is an empty
    /// vector, not an error.
    async fn find_persons(&self, selector: &PersonSelector) -> Result<Vec<Person>>;

    /// Overwrites name and age of the person with the given id, leaving the
    /// id unchanged.
    async fn update_person(&self, id: i64, person: &NewPerson) -> Result<()>;

    /// Deletes the person with the given id.
    async fn delete_person(&self, id: i64) -> Result<()>;
}
