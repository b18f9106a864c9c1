use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use tripmate::{AppState, Catalog, PlaceGateway, TripMateConfig, WikipediaClient, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = TripMateConfig::load().context("Failed to load configuration")?;
    logging::init(&config.logging)?;

    let catalog = match &config.catalog.seed_path {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("Failed to load seed file {path}"))?,
        None => Catalog::seeded(),
    };
    info!(regions = catalog.len(), "Catalog ready");

    let provider = WikipediaClient::new(&config.summary)?;
    let gateway = PlaceGateway::new(Arc::new(provider));

    let state = Arc::new(AppState::new(
        catalog,
        gateway,
        config.app.clone(),
        config.catalog.search_limit,
    ));

    info!(
        commit = %config.app.commit,
        summary_api = %config.summary.base_url,
        "Starting {}",
        config.app.name
    );
    web::run(&config.server, state).await?;
    Ok(())
}
