//! Serverless Types - wire and domain types for the message service
//!
//! Pure data definitions shared between the server and its tests. No async
//! runtime or database dependencies live here.

pub mod api;
pub mod message;

pub use api::*;
pub use message::*;

/// Which backend the process bound to at startup.
///
/// Selected exactly once; never changes for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Postgres,
    Sqlite,
    Memory,
}

impl StorageMode {
    /// Durable modes are backed by a database handle.
    pub fn is_durable(&self) -> bool {
        !matches!(self, StorageMode::Memory)
    }

    /// Status shown on the health endpoint.
    pub fn connection_status(&self) -> &'static str {
        if self.is_durable() {
            "connected"
        } else {
            "disconnected"
        }
    }

    /// Label reported in the `storage` field of save responses.
    pub fn label(&self) -> &'static str {
        match self {
            StorageMode::Postgres => "postgresql",
            StorageMode::Sqlite => "sqlite",
            StorageMode::Memory => "temporary memory",
        }
    }
}

impl std::fmt::Display for StorageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
