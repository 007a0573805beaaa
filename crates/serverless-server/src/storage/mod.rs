//! Storage layer
//!
//! A durable backend (PostgreSQL, or embedded SQLite) when one could be
//! reached at startup, otherwise a volatile in-memory sequence.

pub mod facade;
pub mod memory;
pub mod postgres;
pub mod schema;
pub mod sqlite;

pub use facade::{SavedRecord, StorageFacade};
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use sqlite::SqliteStore;

use crate::error::StorageError;
use async_trait::async_trait;
use serverless_types::{Message, StorageMode};

pub type Result<T> = std::result::Result<T, StorageError>;

/// Number of rows returned by the messages listing.
pub const DEFAULT_LIST_LIMIT: i64 = 10;

/// A durable message table behind a single live connection.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Backend this store talks to.
    fn mode(&self) -> StorageMode;

    /// Idempotently create the `messages` table.
    async fn ensure_schema(&self) -> Result<()>;

    /// Insert one row and commit. Returns the assigned id.
    async fn insert(&self, content: &str) -> Result<i64>;

    /// Most recent `limit` rows, newest first.
    async fn recent(&self, limit: i64) -> Result<Vec<Message>>;
}
