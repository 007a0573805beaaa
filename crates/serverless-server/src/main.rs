//! Serverless message server
//!
//! Picks a storage mode once at startup, then serves the HTTP API.

use anyhow::{Context, Result};
use serverless_server::config::ServerConfig;
use serverless_server::storage::{schema, StorageFacade};
use serverless_server::{bootstrap, build_router, AppState};
use std::net::SocketAddr;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting serverless-server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = ServerConfig::load().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, database_url={}",
        config.bind_address,
        if config.database_url.is_some() { "set" } else { "unset" }
    );

    let store = bootstrap::connect(config.database_url.as_deref()).await;
    schema::initialize(store.as_deref()).await;

    let storage = StorageFacade::from_connection(store);
    if storage.is_durable() {
        info!("Storage mode: {}", storage.mode());
    } else {
        warn!("Database features disabled, storing messages in temporary memory");
    }

    let app = build_router(AppState::new(storage));

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
