#![recursion_limit = "256"]

mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::device::DeviceRepository;
use services::memory::InMemoryDeviceRepository;
use services::postgres::PgDeviceRepository;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let devices: Arc<dyn DeviceRepository> = match config.backend {
        config::StoreBackend::Postgres => {
            let database_url = config.database_url.as_deref().expect("DATABASE_URL required");
            let pool = db::init_pool(database_url, config.db_max_connections)
                .await
                .expect("database init failed");
            tracing::info!(max_connections = config.db_max_connections, "postgres device store ready");
            Arc::new(PgDeviceRepository::new(pool))
        }
        config::StoreBackend::Memory if config.seed_devices => {
            tracing::info!("in-memory device store (seeded)");
            Arc::new(InMemoryDeviceRepository::seeded())
        }
        config::StoreBackend::Memory => {
            tracing::info!("in-memory device store");
            Arc::new(InMemoryDeviceRepository::new())
        }
    };

    let state = state::AppState::new(devices);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "device inventory listening");
    axum::serve(listener, app).await.expect("server failed");
}
