use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use event_management::shared::core::clock::SystemClock;
use event_management::shell::config::Config;
use event_management::shell::state::AppState;
use event_management::shell::{graphql, http, workers};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    fmt().with_env_filter(filter).init();

    // In-memory deps for now
    let state = AppState::in_memory(&config.collection, Arc::new(SystemClock));

    let runner =
        workers::spawn_feed_runner(&*state.store, &config.collection, state.feed.clone()).await?;

    let app = http::router(state.clone()).merge(graphql::router(graphql::schema(state)));

    tracing::info!(addr = %config.bind_addr, collection = %config.collection, "listening");
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    runner.abort();
    Ok(())
}
