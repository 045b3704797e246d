use std::sync::Arc;

use catalog::CatalogService;
use catalog_backend::{
    server,
    types::{Environment, StoreConfig},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env()?;

    // JSON logs for staging/production, human readable for development
    environment.init_tracing();

    let store_config = StoreConfig::from_env()?;
    let item_store = Arc::new(store_config.connect().await);
    let catalog = Arc::new(CatalogService::new(item_store));

    tracing::info!("✅ Initialized catalog for {environment}");

    server::start(environment, catalog).await
}
