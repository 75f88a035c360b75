//! SQLite storage backend implementation.
//!
//! Uses `rusqlite` for synchronous operations and `tokio-rusqlite` for
//! async wrapping. The async connection owns the SQLite handle on a
//! dedicated thread, which serializes all statement execution; concurrent
//! request handlers cannot interleave statements.

mod error;
mod repository;
mod schema;

pub use repository::SqlitePersonRepository;
