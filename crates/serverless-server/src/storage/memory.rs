//! In-memory message list used when no database is available

use tokio::sync::RwLock;

/// Append-only sequence of message contents, lost on restart.
pub struct MemoryStore {
    data: RwLock<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(Vec::new()),
        }
    }

    /// Append a message. Insertion order is preserved.
    pub async fn push(&self, content: String) {
        self.data.write().await.push(content);
    }

    /// Every stored message, oldest first.
    pub async fn all(&self) -> Vec<String> {
        self.data.read().await.clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
