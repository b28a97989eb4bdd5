use std::net::SocketAddr;
use std::sync::Arc;

use residence_finder_backend::config::AppConfig;
use residence_finder_backend::handlers::{self, AppState};
use residence_finder_backend::storage;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = AppConfig::load()?;
    log::info!("Loaded config: {:?}", config);

    // A backend that cannot reach its store aborts startup here; the
    // listener never binds in a partially-initialized state.
    let storage = storage::connect(&config).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    log::info!("Starting server on {}", addr);

    let state = AppState {
        storage: Arc::clone(&storage),
    };
    let app = handlers::router(state);

    axum::serve(
        tokio::net::TcpListener::bind(addr).await?,
        app.into_make_service(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    log::info!("Server stopped, closing storage");
    storage.close().await?;

    Ok(())
}
