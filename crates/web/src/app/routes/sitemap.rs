use std::sync::Arc;

use axum::{
    extract::Extension,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use shopfront_seo::sitemap;

use crate::app::SiteState;

/// `GET /sitemap.xml`, stamped with the request time.
pub async fn sitemap_xml(Extension(site): Extension<Arc<SiteState>>) -> Response {
    let entries = sitemap::generate(&site.base_url, site.catalog.as_ref(), Utc::now());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap::render_xml(&entries),
    )
        .into_response()
}
