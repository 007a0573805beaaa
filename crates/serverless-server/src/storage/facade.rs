//! Storage facade
//!
//! Binds either a durable [`MessageStore`] or a [`MemoryStore`] once, at
//! construction. Every later call goes to that backend; there is no
//! re-probing and no fallback between them at request time.

use super::{MemoryStore, MessageStore, Result};
use crate::error::StorageError;
use serverless_types::{MessageList, StorageMode};
use tracing::debug;

enum Backend {
    Durable(Box<dyn MessageStore>),
    Volatile(MemoryStore),
}

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedRecord {
    pub content: String,
    /// Row id; `None` in volatile mode.
    pub id: Option<i64>,
    pub mode: StorageMode,
}

pub struct StorageFacade {
    backend: Backend,
}

impl StorageFacade {
    pub fn durable(store: Box<dyn MessageStore>) -> Self {
        Self {
            backend: Backend::Durable(store),
        }
    }

    pub fn volatile() -> Self {
        Self {
            backend: Backend::Volatile(MemoryStore::new()),
        }
    }

    /// Durable when the bootstrapper produced a connection, volatile otherwise.
    pub fn from_connection(store: Option<Box<dyn MessageStore>>) -> Self {
        match store {
            Some(store) => Self::durable(store),
            None => Self::volatile(),
        }
    }

    pub fn mode(&self) -> StorageMode {
        match &self.backend {
            Backend::Durable(store) => store.mode(),
            Backend::Volatile(_) => StorageMode::Memory,
        }
    }

    pub fn is_durable(&self) -> bool {
        matches!(self.backend, Backend::Durable(_))
    }

    pub async fn save(&self, content: &str) -> Result<SavedRecord> {
        if content.is_empty() {
            return Err(StorageError::Validation);
        }

        match &self.backend {
            Backend::Durable(store) => {
                let id = store.insert(content).await?;
                debug!("Saved message {} to {}", id, store.mode());
                Ok(SavedRecord {
                    content: content.to_string(),
                    id: Some(id),
                    mode: store.mode(),
                })
            }
            Backend::Volatile(memory) => {
                memory.push(content.to_string()).await;
                debug!("Saved message to memory");
                Ok(SavedRecord {
                    content: content.to_string(),
                    id: None,
                    mode: StorageMode::Memory,
                })
            }
        }
    }

    /// Durable mode returns the newest `limit` rows, newest first. Volatile
    /// mode ignores `limit` and returns everything, oldest first.
    pub async fn list(&self, limit: i64) -> Result<MessageList> {
        match &self.backend {
            Backend::Durable(store) => Ok(MessageList::Records(store.recent(limit).await?)),
            Backend::Volatile(memory) => Ok(MessageList::Texts(memory.all().await)),
        }
    }
}
