use std::sync::Arc;

use anyhow::Context;
use store::{FeedStore, MemStore};
use tracing::{Level, info};

use server::config::AppConfig;
use server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let store: Arc<dyn FeedStore> = Arc::new(MemStore::new());
    if config.feed.seed_fixtures {
        store::seed::seed_fixtures(store.as_ref())
            .await
            .context("Failed to seed fixtures")?;
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { store, config };
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
