//! Router assembly and shared state.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use crate::routes;

/// Read-only service configuration shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Directory holding one `<family>.json` document per product family.
    pub data_dir: PathBuf,
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and
/// the black-box tests).
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/healthz", get(routes::healthz))
        .route("/catalog/:family", get(routes::family_page))
        .route("/assets/*path", get(routes::asset))
        .layer(Extension(Arc::new(state)))
}
