//! HTTP application wiring (Axum router + shared site state).
//!
//! - `routes/`: HTTP routes + handlers (pages, sitemap, system)
//! - `render.rs`: `<head>`/JSON-LD/body rendering
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use shopfront_core::BaseUrl;
use shopfront_products::ProductCatalog;
use shopfront_seo::SiteLayout;
use shopfront_seo::metadata;

pub mod errors;
pub mod render;
pub mod routes;

/// Immutable state shared by every handler.
pub struct SiteState {
    pub base_url: BaseUrl,
    pub catalog: Arc<dyn ProductCatalog>,
    pub layout: SiteLayout,
}

impl SiteState {
    pub fn new(base_url: BaseUrl, catalog: Arc<dyn ProductCatalog>) -> Self {
        let layout = metadata::layout(&base_url);
        Self {
            base_url,
            catalog,
            layout,
        }
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(base_url: BaseUrl, catalog: Arc<dyn ProductCatalog>) -> Router {
    let state = Arc::new(SiteState::new(base_url, catalog));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/sitemap.xml", get(routes::sitemap::sitemap_xml))
        .merge(routes::router())
        .fallback(routes::system::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(state)),
        )
}
