use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use shopfront_seo::metadata;

use crate::app::{SiteState, errors::AppError, render};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Fallback for unknown routes: full layout, `noindex`, 404.
pub async fn not_found(
    Extension(site): Extension<Arc<SiteState>>,
    uri: Uri,
) -> Result<Response, AppError> {
    tracing::debug!(path = %uri.path(), "no route");
    let meta = metadata::not_found().resolve(&site.layout);
    let html = render::document(&meta, &[], &render::not_found_body())?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}
