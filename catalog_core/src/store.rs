//! # Document Store
//!
//! Family documents are plain JSON files, loaded from disk or fetched
//! over HTTP. Every load is tagged with a [`SourceInfo`] naming where
//! the bytes came from and when, and every failure maps to a typed
//! [`CatalogError`]: I/O problems keep the path and operation, transport
//! problems keep the URL, malformed JSON keeps the origin and the
//! parser's message.
//!
//! ## Example
//!
//! ```rust,no_run
//! use catalog_core::store::load_source;
//!
//! // paths and URLs go through the same entry point
//! let local = load_source("data/ggip.json")?;
//! let remote = load_source("https://catalog.example.com/data/ggip.json")?;
//! println!("{} variants", local.document.variant_keys().len());
//! # Ok::<(), catalog_core::errors::CatalogError>(())
//! ```

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::document::CatalogDocument;
use crate::errors::{CatalogError, CatalogResult};

/// Where a document came from and when it was read.
#[derive(Debug, Clone, Serialize)]
pub struct SourceInfo {
    pub origin: String,
    pub retrieved: DateTime<Utc>,
}

/// A parsed document together with its provenance.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: CatalogDocument,
    pub source: SourceInfo,
}

/// Load a document from a file on disk.
pub fn load_path(path: &Path) -> CatalogResult<LoadedDocument> {
    let origin = path.display().to_string();
    let text = fs::read_to_string(path)
        .map_err(|e| CatalogError::file_error("read", &origin, e.to_string()))?;
    let document = CatalogDocument::from_str(&text, &origin)?;
    Ok(LoadedDocument {
        document,
        source: SourceInfo {
            origin,
            retrieved: Utc::now(),
        },
    })
}

/// Fetch a document over HTTP. Non-success statuses are fetch failures,
/// not empty documents.
pub fn fetch_url(url: &str) -> CatalogResult<LoadedDocument> {
    let response = reqwest::blocking::get(url)
        .map_err(|e| CatalogError::fetch_failure(url, e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::fetch_failure(
            url,
            format!("HTTP status {status}"),
        ));
    }
    let text = response
        .text()
        .map_err(|e| CatalogError::fetch_failure(url, e.to_string()))?;
    let document = CatalogDocument::from_str(&text, url)?;
    Ok(LoadedDocument {
        document,
        source: SourceInfo {
            origin: url.to_string(),
            retrieved: Utc::now(),
        },
    })
}

/// Dispatch on the source spelling: URLs are fetched, everything else is
/// treated as a path.
pub fn load_source(source: &str) -> CatalogResult<LoadedDocument> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_url(source)
    } else {
        load_path(Path::new(source))
    }
}
