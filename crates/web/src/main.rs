use std::sync::Arc;

use anyhow::Context;

use shopfront_products::{InMemoryCatalog, ProductCatalog};
use shopfront_web::config::WebConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopfront_observability::init();

    let config = WebConfig::from_env().context("invalid configuration")?;
    let catalog = InMemoryCatalog::reference().context("invalid reference catalog")?;
    if catalog.is_empty() {
        tracing::warn!("catalog is empty; only fixed pages will be served");
    }
    tracing::info!(
        base_url = %config.base_url,
        products = catalog.len(),
        "starting storefront"
    );
    let catalog: Arc<dyn ProductCatalog> = Arc::new(catalog);

    let app = shopfront_web::app::build_app(config.base_url.clone(), catalog);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
