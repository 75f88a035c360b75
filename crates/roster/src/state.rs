//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses a repository trait object for storage
//! abstraction.

use std::sync::Arc;

use roster_core::storage::PersonRepository;

use crate::config::Config;
use crate::storage::SqlitePersonRepository;

/// Shared application state.
///
/// This is cloned for each request handler and contains the repository
/// trait object for store access.
#[derive(Clone)]
pub struct AppState {
    /// Person repository backed by the configured store.
    pub person_repo: Arc<dyn PersonRepository>,
}

impl AppState {
    /// Creates AppState backed by the configured SQLite database.
    ///
    /// The database file is created if it doesn't exist and the schema is
    /// applied idempotently.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let repo = SqlitePersonRepository::new(&config.sqlite_path).await?;

        Ok(Self {
            person_repo: Arc::new(repo),
        })
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

#[cfg(test)]
mod test_support {
    use super::*;

    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use roster_core::person::{NewPerson, Person};
    use roster_core::storage::{PersonSelector, RepositoryError, Result};

    /// Minimal in-memory repository for tests.
    ///
    /// Mirrors the store's counter semantics: identifiers count upward and
    /// are not reused after deletion.
    #[derive(Debug)]
    struct TestRepository {
        persons: RwLock<BTreeMap<i64, Person>>,
        next_id: AtomicI64,
    }

    impl Default for TestRepository {
        fn default() -> Self {
            Self {
                persons: RwLock::new(BTreeMap::new()),
                next_id: AtomicI64::new(1),
            }
        }
    }

    #[async_trait]
    impl PersonRepository for TestRepository {
        async fn list_persons(&self) -> Result<Vec<Person>> {
            let persons = self.persons.read().await;
            Ok(persons.values().cloned().collect())
        }

        async fn create_person(&self, person: &NewPerson) -> Result<()> {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            let mut persons = self.persons.write().await;
            persons.insert(id, Person::new(id, person.name.clone(), person.age));
            Ok(())
        }

        async fn find_persons(&self, selector: &PersonSelector) -> Result<Vec<Person>> {
            let persons = self.persons.read().await;
            let matches = match selector {
                PersonSelector::Id(id) => persons.get(id).cloned().into_iter().collect(),
                PersonSelector::Name(name) => persons
                    .values()
                    .filter(|person| person.name == *name)
                    .cloned()
                    .collect(),
            };
            Ok(matches)
        }

        async fn update_person(&self, id: i64, person: &NewPerson) -> Result<()> {
            let mut persons = self.persons.write().await;
            match persons.get_mut(&id) {
                Some(existing) => {
                    existing.name = person.name.clone();
                    existing.age = person.age;
                    Ok(())
                }
                None => Err(RepositoryError::NotFound {
                    entity_type: "Person",
                    key: PersonSelector::Id(id).to_string(),
                }),
            }
        }

        async fn delete_person(&self, id: i64) -> Result<()> {
            let mut persons = self.persons.write().await;
            match persons.remove(&id) {
                Some(_) => Ok(()),
                None => Err(RepositoryError::NotFound {
                    entity_type: "Person",
                    key: PersonSelector::Id(id).to_string(),
                }),
            }
        }
    }

    impl Default for AppState {
        /// Creates an AppState with in-memory storage for testing.
        fn default() -> Self {
            Self {
                person_repo: Arc::new(TestRepository::default()),
            }
        }
    }
}
