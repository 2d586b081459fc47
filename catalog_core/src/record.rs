//! # Product Records
//!
//! One catalog row. Families ship no schema: every family has its own
//! dialect of optional fields (`clampingRange`, `forTube`, `dimensions`
//! sub-keys, and so on), including non-ASCII spellings like `Ø[mm]` and
//! `D(mm)` that appear verbatim in shipped data. A record therefore wraps
//! the raw JSON object and exposes typed probes instead of a rigid struct.
//!
//! Values behind a probe are trimmed text: a cell value exists when the
//! path leads to a non-blank string or a number. Fallback chains skip
//! blank values, so `first_text(&["S", "MStud"])` picks `MStud` when `S`
//! is present but empty.
//!
//! ## Example
//!
//! ```rust
//! use catalog_core::record::ProductRecord;
//! use serde_json::json;
//!
//! let record = ProductRecord::from_value(json!({
//!     "productCode": "GGIP0150",
//!     "clampingRange": { "mm": "150-160" },
//!     "dimensions": { "W": "200" }
//! }))
//! .unwrap();
//!
//! assert_eq!(record.product_code(), "GGIP0150");
//! assert_eq!(record.text_at("clampingRange.mm").as_deref(), Some("150-160"));
//! assert_eq!(record.cell_text(&["dimensions.H", "dimensions.W"]), "200");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Value Probing
// ============================================================================

/// Walk a dotted path (`clampingRange.mm`) through nested JSON objects.
pub(crate) fn path_value<'a>(map: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = map.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Trimmed text form of a scalar leaf. Objects, arrays, booleans and
/// blank strings yield nothing.
pub(crate) fn leaf_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Text items of a leaf: an array yields one item per scalar element,
/// a scalar yields a single item.
pub(crate) fn leaf_texts(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(leaf_text).collect(),
        other => leaf_text(other).into_iter().collect(),
    }
}

/// Presence in the truthy sense of the source data: null and blank
/// strings are absent, everything else (including objects) is present.
pub(crate) fn value_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

// ============================================================================
// ProductRecord
// ============================================================================

/// One product row as shipped: the raw JSON object behind a probe API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductRecord(Map<String, Value>);

impl ProductRecord {
    /// Wrap a JSON value; anything but an object is rejected.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(ProductRecord(map)),
            _ => None,
        }
    }

    /// The record's product code, empty when the data is missing one.
    pub fn product_code(&self) -> &str {
        self.0
            .get("productCode")
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or("")
    }

    /// Raw value at a dotted path.
    pub fn value_at(&self, path: &str) -> Option<&Value> {
        path_value(&self.0, path)
    }

    /// Trimmed text at a dotted path, when the path leads to a scalar.
    pub fn text_at(&self, path: &str) -> Option<String> {
        self.value_at(path).and_then(leaf_text)
    }

    /// First path in the chain that yields text.
    pub fn first_text(&self, paths: &[&str]) -> Option<String> {
        paths.iter().find_map(|path| self.text_at(path))
    }

    /// Total form of [`first_text`](Self::first_text): empty string when
    /// nothing matches. Row cells always render something.
    pub fn cell_text(&self, paths: &[&str]) -> String {
        self.first_text(paths).unwrap_or_default()
    }

    /// True when the path leads to a present value (objects count,
    /// blanks and nulls do not).
    pub fn is_present(&self, path: &str) -> bool {
        self.value_at(path).map(value_present).unwrap_or(false)
    }

    /// True when any path in the chain is present.
    pub fn any_present(&self, paths: &[&str]) -> bool {
        paths.iter().any(|path| self.is_present(path))
    }

    /// True when the top-level field exists and is an object. The
    /// classifier distinguishes object-valued `material`/`thread` from
    /// their scalar spellings.
    pub fn has_object(&self, field: &str) -> bool {
        self.0.get(field).map(Value::is_object).unwrap_or(false)
    }

    /// Names of the record's present top-level fields, for diagnostics.
    pub fn field_names(&self) -> Vec<String> {
        self.0
            .iter()
            .filter(|(_, value)| value_present(value))
            .map(|(name, _)| name.clone())
            .collect()
    }
}
