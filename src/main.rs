use std::sync::Arc;

use fleet_console::adapters::{app_router, AccessAppState, InMemorySessionStore};
use fleet_console::config::AppConfig;
use fleet_console::telemetry;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    if config.features.enable_tracing {
        telemetry::init(&config.server);
    }
    config.validate()?;

    let policy = config.access.policy()?;
    let state = AccessAppState::new(Arc::new(InMemorySessionStore::new()), policy)
        .with_verbose_errors(config.features.verbose_errors);
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "fleet console listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("fleet console stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler the server runs until killed.
        std::future::pending::<()>().await;
    }
}
