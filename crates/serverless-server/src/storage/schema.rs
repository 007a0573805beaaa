//! Schema initializer

use super::MessageStore;
use tracing::{error, info};

pub(crate) const POSTGRES_MESSAGES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS messages (
        id SERIAL PRIMARY KEY,
        content TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT NOW()
    )
"#;

pub(crate) const SQLITE_MESSAGES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS messages (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        content TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Best-effort table creation. Failures are logged and swallowed; the store
/// stays bound either way.
pub async fn initialize(store: Option<&dyn MessageStore>) {
    let Some(store) = store else {
        return;
    };

    match store.ensure_schema().await {
        Ok(()) => info!("Table created successfully ({})", store.mode()),
        Err(e) => error!("Table creation error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteStore;

    #[tokio::test]
    async fn test_no_store_is_a_no_op() {
        initialize(None).await;
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let store = SqliteStore::connect("sqlite::memory:").await.unwrap();

        tokio_test::assert_ok!(store.ensure_schema().await);
        tokio_test::assert_ok!(store.ensure_schema().await);
    }

    #[tokio::test]
    async fn test_initialize_creates_usable_table() {
        let store = SqliteStore::connect("sqlite::memory:").await.unwrap();

        let bound: &dyn MessageStore = &store;
        initialize(Some(bound)).await;
        initialize(Some(bound)).await;

        store.insert("still works").await.unwrap();
        assert_eq!(store.recent(10).await.unwrap().len(), 1);
    }
}
