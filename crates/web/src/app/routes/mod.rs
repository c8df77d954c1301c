use axum::{Router, routing::get};

pub mod pages;
pub mod sitemap;
pub mod system;

/// Router for the rendered pages.
pub fn router() -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/products", get(pages::listing))
        .route("/products/:id", get(pages::product_detail))
}
