//! HTTP handlers: the family index, rendered catalog pages, embedded
//! assets and the health probe.

use std::fs;
use std::sync::Arc;

use axum::extract::{Extension, Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use catalog_core::errors::{CatalogError, CatalogResult};
use catalog_core::html::{escape, escape_attribute, render_page};
use catalog_core::store::load_path;
use catalog_core::view::PageView;

use crate::app::AppState;
use crate::assets::{content_type, Assets};
use crate::errors::{error_response, json_error};

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    product: Option<String>,
}

pub async fn family_page(
    Extension(state): Extension<Arc<AppState>>,
    Path(family): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    match render_family(&state, &family, query.product.as_deref()) {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            tracing::warn!(%family, error = %err, code = err.error_code(), "page render failed");
            error_response(&err)
        }
    }
}

fn render_family(state: &AppState, family: &str, product: Option<&str>) -> CatalogResult<String> {
    // the family name must stay a single path component
    if family.contains(['/', '\\']) || family.contains("..") {
        return Err(CatalogError::file_error(
            "read",
            family,
            "invalid family name",
        ));
    }

    let path = state.data_dir.join(format!("{family}.json"));
    let loaded = load_path(&path)?;

    // mapping documents key their default variant by the family code,
    // usually uppercased
    let variant = match loaded.document.select(product, Some(family)) {
        Ok(variant) => variant,
        Err(_) => loaded
            .document
            .select(product, Some(&family.to_uppercase()))?,
    };

    let view = PageView::from_variant(variant)?;
    tracing::info!(
        %family,
        products = view.table.as_ref().map(|t| t.records.len()).unwrap_or(0),
        "page rendered"
    );
    Ok(render_page(&view))
}

pub async fn index(Extension(state): Extension<Arc<AppState>>) -> Response {
    match list_families(&state) {
        Ok(families) => Html(render_index(&families)).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "family listing failed");
            error_response(&err)
        }
    }
}

fn list_families(state: &AppState) -> CatalogResult<Vec<String>> {
    let dir = state.data_dir.display().to_string();
    let entries = fs::read_dir(&state.data_dir)
        .map_err(|e| CatalogError::file_error("read dir", &dir, e.to_string()))?;

    let mut families = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CatalogError::file_error("read dir", &dir, e.to_string()))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                families.push(stem.to_string());
            }
        }
    }
    families.sort();
    Ok(families)
}

fn render_index(families: &[String]) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"utf-8\">\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n    <title>Product Catalog</title>\n    <link rel=\"stylesheet\" href=\"/assets/catalog.css\">\n</head>\n<body>\n<header class=\"page-header\">\n    <h1>Product Catalog</h1>\n</header>\n<main class=\"catalog-page\">\n<ul class=\"family-list\">\n",
    );
    for family in families {
        out.push_str(&format!(
            "    <li><a href=\"/catalog/{}\">{}</a></li>\n",
            escape_attribute(family),
            escape(family)
        ));
    }
    out.push_str("</ul>\n</main>\n</body>\n</html>\n");
    out
}

pub async fn asset(Path(path): Path<String>) -> Response {
    match Assets::get(&path) {
        Some(file) => (
            [(header::CONTENT_TYPE, content_type(&path))],
            file.data.into_owned(),
        )
            .into_response(),
        None => json_error(StatusCode::NOT_FOUND, "NOT_FOUND", format!("no asset {path}")),
    }
}
