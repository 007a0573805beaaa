//! Connection bootstrapper
//!
//! Runs once at startup. Makes a single connection attempt against the
//! configured database and hands back the live store, or nothing. Failures
//! here are never fatal: the caller falls back to volatile storage.

use crate::error::BootstrapError;
use crate::storage::{MessageStore, PostgresStore, SqliteStore};
use tracing::{info, warn};

/// Driver selected from the URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    Postgres,
    Sqlite,
}

impl Driver {
    pub fn from_url(url: &str) -> Result<Self, BootstrapError> {
        if url.starts_with("sqlite:") {
            return Ok(Driver::Sqlite);
        }

        let scheme = url.split_once("://").map(|(scheme, _)| scheme).unwrap_or(url);
        match scheme {
            "postgres" | "postgresql" => Ok(Driver::Postgres),
            other => Err(BootstrapError::UnsupportedScheme(other.to_string())),
        }
    }
}

/// Attempt one connection. Never retries.
pub async fn try_connect(
    database_url: Option<&str>,
) -> Result<Box<dyn MessageStore>, BootstrapError> {
    let url = database_url.ok_or(BootstrapError::ConfigMissing)?;

    let store: Box<dyn MessageStore> = match Driver::from_url(url)? {
        Driver::Postgres => Box::new(PostgresStore::connect(url).await?),
        Driver::Sqlite => Box::new(SqliteStore::connect(url).await?),
    };

    Ok(store)
}

/// [`try_connect`], with the outcome logged and the error discarded.
pub async fn connect(database_url: Option<&str>) -> Option<Box<dyn MessageStore>> {
    match try_connect(database_url).await {
        Ok(store) => {
            info!("Database connected successfully! ({})", store.mode());
            Some(store)
        }
        Err(BootstrapError::ConfigMissing) => {
            warn!("DATABASE_URL not found, database disabled");
            None
        }
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serverless_types::StorageMode;

    #[test]
    fn test_driver_from_url() {
        assert_eq!(
            Driver::from_url("postgres://u:p@localhost:5432/db").unwrap(),
            Driver::Postgres
        );
        assert_eq!(
            Driver::from_url("postgresql://u:p@localhost/db").unwrap(),
            Driver::Postgres
        );
        assert_eq!(Driver::from_url("sqlite::memory:").unwrap(), Driver::Sqlite);
        assert_eq!(Driver::from_url("sqlite://data/app.db").unwrap(), Driver::Sqlite);
        assert!(matches!(
            Driver::from_url("mysql://u:p@localhost/db"),
            Err(BootstrapError::UnsupportedScheme(s)) if s == "mysql"
        ));
    }

    #[tokio::test]
    async fn test_missing_url_is_config_missing() {
        assert!(matches!(
            try_connect(None).await,
            Err(BootstrapError::ConfigMissing)
        ));
        assert!(connect(None).await.is_none());
    }

    #[tokio::test]
    async fn test_unsupported_driver_yields_no_connection() {
        assert!(connect(Some("mysql://u:p@localhost/db")).await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_database_yields_no_connection() {
        assert!(connect(Some("postgres://u:p@127.0.0.1:1/db")).await.is_none());
    }

    #[tokio::test]
    async fn test_malformed_url_yields_no_connection() {
        assert!(connect(Some("postgres://u:p@host:notaport/db")).await.is_none());
    }

    #[tokio::test]
    async fn test_sqlite_connects() {
        let store = connect(Some("sqlite::memory:")).await.unwrap();
        assert_eq!(store.mode(), StorageMode::Sqlite);
    }
}
