//! Embedded SQLite message store

use super::{schema, MessageStore, Result};
use async_trait::async_trait;
use serverless_types::{Message, StorageMode};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use std::str::FromStr;
use tokio::sync::Mutex;

pub struct SqliteStore {
    conn: Mutex<SqliteConnection>,
}

impl SqliteStore {
    /// Open `sqlite:path/to/file.db` (created if missing) or `sqlite::memory:`.
    pub async fn connect(url: &str) -> std::result::Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let conn = SqliteConnection::connect_with(&options).await?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

#[async_trait]
impl MessageStore for SqliteStore {
    fn mode(&self) -> StorageMode {
        StorageMode::Sqlite
    }

    async fn ensure_schema(&self) -> Result<()> {
        let mut conn = self.conn.lock().await;
        sqlx::query(schema::SQLITE_MESSAGES_TABLE)
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    async fn insert(&self, content: &str) -> Result<i64> {
        let mut conn = self.conn.lock().await;
        let mut tx = conn.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO messages (content) VALUES (?1) RETURNING id
            "#,
        )
        .bind(content)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(id)
    }

    async fn recent(&self, limit: i64) -> Result<Vec<Message>> {
        let mut conn = self.conn.lock().await;
        // SQLite keeps CURRENT_TIMESTAMP as text already
        let rows: Vec<MessageRow> = sqlx::query_as(
            r#"
            SELECT id, content, CAST(created_at AS TEXT) AS created_at
            FROM messages
            ORDER BY id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}

#[derive(sqlx::FromRow)]
struct MessageRow {
    id: i64,
    content: String,
    created_at: Option<String>,
}

impl From<MessageRow> for Message {
    fn from(r: MessageRow) -> Self {
        Message {
            id: r.id,
            text: r.content,
            time: r.created_at.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> SqliteStore {
        let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
        store.ensure_schema().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let store = memory_store().await;

        let first = store.insert("one").await.unwrap();
        let second = store.insert("two").await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_recent_is_newest_first_and_limited() {
        let store = memory_store().await;
        for i in 1..=11 {
            store.insert(&format!("message {}", i)).await.unwrap();
        }

        let recent = store.recent(10).await.unwrap();
        let texts: Vec<&str> = recent.iter().map(|m| m.text.as_str()).collect();

        assert_eq!(recent.len(), 10);
        assert_eq!(texts.first(), Some(&"message 11"));
        assert_eq!(texts.last(), Some(&"message 2"));
        assert!(recent.iter().all(|m| !m.time.is_empty()));
    }

    #[tokio::test]
    async fn test_insert_without_table_is_a_storage_error() {
        let store = SqliteStore::connect("sqlite::memory:").await.unwrap();
        tokio_test::assert_err!(store.insert("no table yet").await);
    }
}
