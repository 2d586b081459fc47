//! Consistent JSON error responses.
//!
//! Every [`CatalogError`] maps to a status and a `{"error", "message"}`
//! body: missing documents and variants are 404s, upstream fetch trouble
//! is a 502, malformed or unclassifiable data is a 500.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalog_core::errors::CatalogError;

pub fn error_response(err: &CatalogError) -> axum::response::Response {
    let status = match err {
        CatalogError::VariantNotFound { .. } | CatalogError::FileError { .. } => {
            StatusCode::NOT_FOUND
        }
        CatalogError::FetchFailure { .. } => StatusCode::BAD_GATEWAY,
        CatalogError::ParseFailure { .. } | CatalogError::UnrecognizedShape { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    json_error(status, err.error_code(), err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
