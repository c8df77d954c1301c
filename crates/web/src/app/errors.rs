use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Failures while producing a response.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to serialize structured data: {0}")]
    StructuredData(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        html_error(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
    }
}

/// Bare HTML error page for failures that cannot render the full layout.
pub fn html_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Html(format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{0}</title>\
             <meta name=\"robots\" content=\"noindex, nofollow\"></head>\n<body><h1>{0}</h1></body>\n</html>\n",
            html_escape::encode_text(message)
        )),
    )
        .into_response()
}
