//! Storage backend implementation.
//!
//! This module provides the concrete implementation of the repository trait
//! defined in `roster_core::storage`, backed by SQLite via `rusqlite` and
//! `tokio-rusqlite`.

mod sqlite;

pub use sqlite::SqlitePersonRepository;
