use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use shopfront_seo::{metadata, structured_data};

use crate::app::{SiteState, errors::AppError, render};

pub async fn home(Extension(site): Extension<Arc<SiteState>>) -> Result<Html<String>, AppError> {
    let meta = metadata::home(&site.base_url).resolve(&site.layout);
    let ld = [structured_data::organization(&site.base_url)];
    Ok(Html(render::document(&meta, &ld, &render::home_body())?))
}

pub async fn listing(Extension(site): Extension<Arc<SiteState>>) -> Result<Html<String>, AppError> {
    let catalog = site.catalog.as_ref();
    let meta = metadata::listing(&site.base_url).resolve(&site.layout);
    let ld = [structured_data::collection_page(&site.base_url, catalog)];
    let body = render::listing_body(catalog.list_all());
    Ok(Html(render::document(&meta, &ld, &body)?))
}

/// Known ids render the product (200); unknown ids render the reduced
/// not-found view (404) with the canonical still set to the requested id.
pub async fn product_detail(
    Extension(site): Extension<Arc<SiteState>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match site.catalog.find_by_id(&id) {
        Some(product) => {
            let meta = metadata::found_product(&site.base_url, product).resolve(&site.layout);
            let ld = [
                structured_data::product(&site.base_url, product),
                structured_data::breadcrumbs(&site.base_url, product),
            ];
            let html = render::document(&meta, &ld, &render::product_body(product))?;
            Ok(Html(html).into_response())
        }
        None => {
            tracing::info!(product_id = %id, "product not found");
            let meta = metadata::missing_product(&site.base_url, &id).resolve(&site.layout);
            let html = render::document(&meta, &[], &render::product_not_found_body(&id))?;
            Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
        }
    }
}
