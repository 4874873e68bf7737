use std::sync::Arc;

use anyhow::Context;
use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use dashboard::{
    application::services::{LocalDashboardConfig, LocalDashboardService},
    config::Config,
    infrastructure::repositories::InMemoryUserStore,
    presentation::http::build_app,
};

#[main]
async fn main() -> anyhow::Result<()> {
    let config = Config::try_parse().map_err(anyhow::Error::msg)?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dashboard=info,poem=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let server_url = config.server_url();
    tracing::info!(%server_url, latency = ?config.simulated_latency, "starting dashboard api");

    let store = Arc::new(InMemoryUserStore::seeded());
    let service = Arc::new(LocalDashboardService::new(
        store,
        LocalDashboardConfig {
            simulated_latency: config.simulated_latency,
        },
    ));
    let app = build_app(service, &server_url);

    Server::new(TcpListener::bind(format!("localhost:{}", config.port)))
        .run(app)
        .await
        .context("dashboard api server stopped")
}
