use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use domain::stores::InMemoryStore;
use persistence::repositories::{EmployeeRepository, PingRepository, SettingsRepository};

mod app;
mod config;
mod error;
mod middleware;
mod routes;

use app::Stores;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging
    middleware::logging::init_logging(&config.logging);

    info!("Starting attendance API v{}", env!("CARGO_PKG_VERSION"));

    // Select the storage backend once, at process start.
    let stores = match config.storage.backend {
        config::StorageBackend::Memory => {
            info!("Using in-memory storage backend");
            let store = Arc::new(InMemoryStore::new());
            Stores {
                pings: store.clone(),
                settings: store.clone(),
                employees: store,
            }
        }
        config::StorageBackend::Postgres => {
            let pool = config.database_config().connect().await?;

            info!("Running database migrations...");
            sqlx::migrate!("../persistence/src/migrations")
                .run(&pool)
                .await?;
            info!("Migrations completed");

            Stores {
                pings: Arc::new(PingRepository::new(pool.clone())),
                settings: Arc::new(SettingsRepository::new(pool.clone())),
                employees: Arc::new(EmployeeRepository::new(pool)),
            }
        }
    };

    // Build application
    let app = app::create_app(config.clone(), stores);

    // Start server
    let addr = config.socket_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
