use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use events_api::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use events_api::shell::config::Config;
use events_api::shell::http::router;
use events_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("events_api=info,tower_http=info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    // Volatile store: every restart begins again from the seed events.
    let store = Arc::new(InMemoryEventStore::seeded());
    let app = router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Events app listening at http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
