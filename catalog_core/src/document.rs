//! # Catalog Documents
//!
//! One JSON document per product family. Shipped documents come in three
//! forms, all accepted here:
//!
//! ```text
//! flat     { productName, products, specification, ... }
//! mapping  { "GGSH": { ... }, "GGQC": { ... } }
//! hybrid   { productName, products, ..., "ggtcTriLock": { ... } }
//! ```
//!
//! A top-level value counts as a named variant when it is an object
//! carrying a `products` array or a `productName`. Whatever the form,
//! [`CatalogDocument::select`] picks the variant to render: the requested
//! key when it exists, else the root variant, else a configured default
//! key. Nothing matching is a typed [`VariantNotFound`] error, never an
//! empty render.
//!
//! ## Example
//!
//! ```rust
//! use catalog_core::document::CatalogDocument;
//! use serde_json::json;
//!
//! let doc = CatalogDocument::from_value(
//!     json!({
//!         "productName": "Pipe Clamp",
//!         "products": [{ "productCode": "GGIP0150" }],
//!         "ggtcTriLock": {
//!             "productName": "Tri-Lock Clamp",
//!             "products": [{ "productCode": "GGTC0100" }]
//!         }
//!     }),
//!     "ggip.json",
//! )
//! .unwrap();
//!
//! let variant = doc.select(Some("ggtcTriLock"), None).unwrap();
//! assert_eq!(variant.product_name.as_deref(), Some("Tri-Lock Clamp"));
//!
//! // unknown keys fall back to the root variant
//! let fallback = doc.select(Some("nope"), None).unwrap();
//! assert_eq!(fallback.product_name.as_deref(), Some("Pipe Clamp"));
//! ```
//!
//! [`VariantNotFound`]: crate::errors::CatalogError::VariantNotFound

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{CatalogError, CatalogResult};
use crate::record::{leaf_text, ProductRecord};

// ============================================================================
// Variant Content
// ============================================================================

/// The named image slots a variant may carry alongside (or instead of)
/// the single `image` field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSet {
    pub main_image: Option<String>,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
}

/// One row of a variant's load-rating table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadingEntry {
    pub size: Value,
    pub max_recommended_load: Value,
}

impl LoadingEntry {
    pub fn size_text(&self) -> String {
        leaf_text(&self.size).unwrap_or_default()
    }

    pub fn load_text(&self) -> String {
        leaf_text(&self.max_recommended_load).unwrap_or_default()
    }
}

/// One renderable catalog entry: page fields plus the product rows.
///
/// Every field is optional in shipped data; rendering treats absence as
/// "leave that part of the page out".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductVariant {
    pub product_name: Option<String>,
    pub product_definition: Option<String>,
    /// Catalog page reference, a string or a bare number in shipped data
    pub page_number: Option<Value>,
    pub website: Option<String>,
    /// Single-image form
    pub image: Option<String>,
    /// Multi-image form
    pub images: Option<ImageSet>,
    pub specification: Option<Map<String, Value>>,
    pub loading_data: Vec<LoadingEntry>,
    pub products: Vec<ProductRecord>,
}

impl ProductVariant {
    /// Image sources in display order, whichever form the data used.
    pub fn image_sources(&self) -> Vec<&str> {
        let mut sources = Vec::new();
        if let Some(single) = self.image.as_deref() {
            sources.push(single);
        }
        if let Some(set) = &self.images {
            for slot in [&set.main_image, &set.image1, &set.image2, &set.image3] {
                if let Some(src) = slot.as_deref() {
                    if !sources.contains(&src) {
                        sources.push(src);
                    }
                }
            }
        }
        sources
    }

    pub fn page_number_text(&self) -> Option<String> {
        self.page_number.as_ref().and_then(leaf_text)
    }
}

// ============================================================================
// Document
// ============================================================================

/// A parsed family document: named variants plus the optional root-level
/// variant of flat and hybrid documents.
#[derive(Debug, Clone, Default)]
pub struct CatalogDocument {
    variants: BTreeMap<String, ProductVariant>,
    root: Option<ProductVariant>,
}

/// True when a top-level value is a variant object rather than a plain
/// field of the root variant.
fn looks_like_variant(value: &Value) -> bool {
    match value.as_object() {
        Some(map) => map.contains_key("products") || map.contains_key("productName"),
        None => false,
    }
}

impl CatalogDocument {
    /// Parse a document from raw JSON text. `origin` names the source
    /// (path or URL) in parse errors.
    pub fn from_str(text: &str, origin: &str) -> CatalogResult<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|err| CatalogError::parse_failure(origin, err.to_string()))?;
        Self::from_value(value, origin)
    }

    /// Parse an already-decoded JSON value.
    pub fn from_value(value: Value, origin: &str) -> CatalogResult<Self> {
        let root_map = match value {
            Value::Object(map) => map,
            other => {
                return Err(CatalogError::parse_failure(
                    origin,
                    format!("expected a JSON object at the root, found {}", json_kind(&other)),
                ))
            }
        };

        let mut variants = BTreeMap::new();
        for (key, value) in &root_map {
            if looks_like_variant(value) {
                let variant: ProductVariant =
                    serde_json::from_value(value.clone()).map_err(|err| {
                        CatalogError::parse_failure(origin, format!("variant '{key}': {err}"))
                    })?;
                variants.insert(key.clone(), variant);
            }
        }

        // flat and hybrid documents are themselves the default variant
        let root = if root_map.contains_key("products") || root_map.contains_key("productName") {
            let variant: ProductVariant = serde_json::from_value(Value::Object(root_map))
                .map_err(|err| {
                    CatalogError::parse_failure(origin, format!("root variant: {err}"))
                })?;
            Some(variant)
        } else {
            None
        };

        Ok(CatalogDocument { variants, root })
    }

    /// Keys of the named variants, sorted.
    pub fn variant_keys(&self) -> Vec<String> {
        self.variants.keys().cloned().collect()
    }

    /// Whether the document carries a root-level variant.
    pub fn has_root_variant(&self) -> bool {
        self.root.is_some()
    }

    /// Named variant lookup.
    pub fn get(&self, key: &str) -> Option<&ProductVariant> {
        self.variants.get(key)
    }

    /// Pick the variant to render.
    ///
    /// Resolution order: the requested key when present, then the root
    /// variant, then `default_key`. Unknown requested keys fall back
    /// rather than erroring; only a document with no fallback at all
    /// yields [`VariantNotFound`](CatalogError::VariantNotFound).
    pub fn select(
        &self,
        requested: Option<&str>,
        default_key: Option<&str>,
    ) -> CatalogResult<&ProductVariant> {
        if let Some(key) = requested {
            if let Some(variant) = self.variants.get(key) {
                return Ok(variant);
            }
        }
        if let Some(root) = &self.root {
            return Ok(root);
        }
        if let Some(key) = default_key {
            if let Some(variant) = self.variants.get(key) {
                return Ok(variant);
            }
        }
        Err(CatalogError::variant_not_found(
            requested.map(str::to_string),
            self.variant_keys(),
        ))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping_doc() -> CatalogDocument {
        CatalogDocument::from_value(
            json!({
                "GGSH": {
                    "productName": "Sprinkler Hanger",
                    "products": [{ "productCode": "GGSH0025" }],
                    "loadingData": [{ "size": "25", "maxRecommendedLoad": 200 }]
                },
                "GGQC": {
                    "productName": "Quick Clamp",
                    "products": [{ "productCode": "GGQC0025" }]
                }
            }),
            "ggsh.json",
        )
        .unwrap()
    }

    #[test]
    fn test_mapping_document_selection() {
        let doc = mapping_doc();
        assert_eq!(doc.variant_keys(), vec!["GGQC", "GGSH"]);
        assert!(!doc.has_root_variant());

        let qc = doc.select(Some("GGQC"), Some("GGSH")).unwrap();
        assert_eq!(qc.product_name.as_deref(), Some("Quick Clamp"));

        // unknown key falls back to the documented default
        let fallback = doc.select(Some("ggcp"), Some("GGSH")).unwrap();
        assert_eq!(fallback.product_name.as_deref(), Some("Sprinkler Hanger"));

        // no request at all also lands on the default
        let default = doc.select(None, Some("GGSH")).unwrap();
        assert_eq!(default.product_name.as_deref(), Some("Sprinkler Hanger"));
    }

    #[test]
    fn test_hybrid_document_prefers_named_then_root() {
        let doc = CatalogDocument::from_value(
            json!({
                "productName": "Pipe Clamp",
                "pageNumber": 14,
                "products": [{ "productCode": "GGIP0150" }],
                "ggtcTriLock": {
                    "productName": "Tri-Lock Clamp",
                    "products": [{ "productCode": "GGTC0100" }]
                },
                "specification": { "zincPlating": "5 µm" }
            }),
            "ggip.json",
        )
        .unwrap();

        assert!(doc.has_root_variant());
        assert_eq!(doc.variant_keys(), vec!["ggtcTriLock"]);

        let named = doc.select(Some("ggtcTriLock"), None).unwrap();
        assert_eq!(named.product_name.as_deref(), Some("Tri-Lock Clamp"));

        let root = doc.select(Some("unknown"), None).unwrap();
        assert_eq!(root.product_name.as_deref(), Some("Pipe Clamp"));
        assert_eq!(root.page_number_text().as_deref(), Some("14"));
        assert_eq!(root.products.len(), 1);
        // the sub-variant key is not mistaken for a field of the root
        assert!(root.specification.is_some());
    }

    #[test]
    fn test_selection_without_fallback_is_not_found() {
        let doc = CatalogDocument::from_value(json!({ "comment": "nothing here" }), "empty.json")
            .unwrap();
        let err = doc.select(Some("GGIP"), None).unwrap_err();
        assert_eq!(err.error_code(), "VARIANT_NOT_FOUND");
        match err {
            CatalogError::VariantNotFound { requested, .. } => {
                assert_eq!(requested.as_deref(), Some("GGIP"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_documents_fail_typed() {
        let err = CatalogDocument::from_str("[1, 2, 3]", "list.json").unwrap_err();
        assert_eq!(err.error_code(), "PARSE_FAILURE");
        assert!(err.to_string().contains("an array"));

        let err = CatalogDocument::from_str("{ not json", "broken.json").unwrap_err();
        assert_eq!(err.error_code(), "PARSE_FAILURE");

        // a variant whose products is not an array is malformed, not empty
        let err = CatalogDocument::from_value(
            json!({ "productName": "Clamp", "products": "GGIP0150" }),
            "bad.json",
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "PARSE_FAILURE");
        assert!(err.to_string().contains("root variant"));
    }

    #[test]
    fn test_image_sources_for_both_forms() {
        let single: ProductVariant = serde_json::from_value(json!({
            "productName": "Clamp",
            "image": "images/ggip.webp"
        }))
        .unwrap();
        assert_eq!(single.image_sources(), vec!["images/ggip.webp"]);

        let multi: ProductVariant = serde_json::from_value(json!({
            "productName": "Hanger",
            "images": {
                "mainImage": "images/ggsh-main.webp",
                "image1": "images/ggsh-1.webp",
                "image3": "images/ggsh-3.webp"
            }
        }))
        .unwrap();
        assert_eq!(
            multi.image_sources(),
            vec![
                "images/ggsh-main.webp",
                "images/ggsh-1.webp",
                "images/ggsh-3.webp"
            ]
        );
    }

    #[test]
    fn test_loading_entries_accept_numbers_and_strings() {
        let entry: LoadingEntry =
            serde_json::from_value(json!({ "size": 25, "maxRecommendedLoad": "200" })).unwrap();
        assert_eq!(entry.size_text(), "25");
        assert_eq!(entry.load_text(), "200");

        let sparse: LoadingEntry = serde_json::from_value(json!({ "size": "32" })).unwrap();
        assert_eq!(sparse.load_text(), "");
    }
}
