//! # devregd — devreg daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Initialize tracing and the `SQLite` connection pool, run migrations
//! - Construct the keyed store and the per-collection repositories
//! - Construct application services, injecting repositories explicitly
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use devreg_adapter_http_axum::state::AppState;
use devreg_adapter_storage_sqlite_sqlx::SqliteKeyedStore;
use devreg_app::repository::Repository;
use devreg_app::services::device_service::DeviceService;
use devreg_app::services::room_service::RoomService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = devreg_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let store = SqliteKeyedStore::new(db.pool().clone());

    // Services over per-collection repositories sharing the store
    let device_service = DeviceService::new(
        Repository::new(store.clone(), "device"),
        Repository::new(store.clone(), "room"),
    );
    let room_service = RoomService::new(
        Repository::new(store.clone(), "room"),
        Repository::new(store, "device"),
    );

    // HTTP
    let state = AppState::new(device_service, room_service);
    let app = devreg_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "devregd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
