//! # Error Types
//!
//! Structured error types for catalog_core. These errors carry enough
//! context for a frontend to show a useful message for every failure
//! class: bad fetches, unreadable documents, unknown variants, and
//! product records whose shape the classifier does not recognize.
//!
//! ## Example
//!
//! ```rust
//! use catalog_core::errors::{CatalogError, CatalogResult};
//!
//! fn lookup(keys: &[String], requested: &str) -> CatalogResult<usize> {
//!     keys.iter().position(|k| k == requested).ok_or_else(|| {
//!         CatalogError::variant_not_found(Some(requested.to_string()), keys.to_vec())
//!     })
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for catalog_core operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Structured error type for catalog loading and rendering.
///
/// Each variant provides specific context about what went wrong,
/// enabling the view layer to show a distinct message per failure
/// kind instead of rendering an empty page.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CatalogError {
    /// Retrieving a catalog document over HTTP(S) failed
    #[error("Fetch failed for '{url}': {reason}")]
    FetchFailure { url: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// A retrieved document is not a usable catalog (bad JSON, wrong root)
    #[error("Parse failure in '{origin}': {reason}")]
    ParseFailure { origin: String, reason: String },

    /// The requested variant key matched nothing and no fallback exists
    #[error(
        "Variant not found: requested '{key}' (available: {keys})",
        key = .requested.as_deref().unwrap_or("<default>"),
        keys = .available.join(", ")
    )]
    VariantNotFound {
        requested: Option<String>,
        available: Vec<String>,
    },

    /// A sample record matched none of the known shape classes
    #[error(
        "Unrecognized shape for product '{product_code}' (fields: {fields})",
        fields = .present_fields.join(", ")
    )]
    UnrecognizedShape {
        product_code: String,
        present_fields: Vec<String>,
    },
}

impl CatalogError {
    /// Create a FetchFailure error
    pub fn fetch_failure(url: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::FetchFailure {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CatalogError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a ParseFailure error
    pub fn parse_failure(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::ParseFailure {
            origin: origin.into(),
            reason: reason.into(),
        }
    }

    /// Create a VariantNotFound error
    pub fn variant_not_found(requested: Option<String>, available: Vec<String>) -> Self {
        CatalogError::VariantNotFound {
            requested,
            available,
        }
    }

    /// Create an UnrecognizedShape error
    pub fn unrecognized_shape(
        product_code: impl Into<String>,
        present_fields: Vec<String>,
    ) -> Self {
        CatalogError::UnrecognizedShape {
            product_code: product_code.into(),
            present_fields,
        }
    }

    /// True when the failure came from retrieving the document rather
    /// than from its content
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            CatalogError::FetchFailure { .. } | CatalogError::FileError { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::FetchFailure { .. } => "FETCH_FAILURE",
            CatalogError::FileError { .. } => "FILE_ERROR",
            CatalogError::ParseFailure { .. } => "PARSE_FAILURE",
            CatalogError::VariantNotFound { .. } => "VARIANT_NOT_FOUND",
            CatalogError::UnrecognizedShape { .. } => "UNRECOGNIZED_SHAPE",
        }
    }
}
