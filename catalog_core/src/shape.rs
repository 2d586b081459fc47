//! # Shape Classification
//!
//! Families never declare their table layout; it is derived from which
//! optional fields their records carry. This module holds the closed set
//! of shape classes and the classifier that assigns one to a family.
//!
//! Classification runs once per family against the first record (records
//! within a family share a shape) and the result routes every row. Match
//! order decides ties: a record can satisfy several predicates, and the
//! first match in [`ALL_SHAPE_CLASSES`] wins.
//!
//! ## Example
//!
//! ```rust
//! use catalog_core::record::ProductRecord;
//! use catalog_core::shape::{classify, ShapeClass};
//! use serde_json::json;
//!
//! let record = ProductRecord::from_value(json!({
//!     "productCode": "GGRR01",
//!     "forTube": { "mm": "20", "inch": "0.5" }
//! }))
//! .unwrap();
//!
//! assert_eq!(classify(&record).unwrap(), ShapeClass::ForTube);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CatalogError, CatalogResult};
use crate::record::ProductRecord;

// ============================================================================
// Shape Classes
// ============================================================================

/// All product-record shapes the renderer knows how to lay out.
///
/// Each variant maps to one static table layout (see
/// [`layout`](crate::layout)). The set is closed: a record matching no
/// variant is an error, never a guessed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeClass {
    /// `type` + object `material` + `length` rows (strut inserts)
    TypeMaterialLength,
    /// `type` + object `material` rows (washers, plain fittings)
    TypeMaterial,
    /// `size` + `connecting` rows whose dimensions carry an `L`
    SizeConnectingWithLength,
    /// `size` rows whose dimensions carry `Ø` and `PxS`
    SizeWithDiameter,
    /// `pipeOuterDia` + object `thread` + `locking` rows (grip couplings)
    PipeDiaThreadLocking,
    /// `pipeOuterDia` rows without a thread object (rings, insulation)
    PipeDiaSimple,
    /// `size` + `thread` + `height` rows (U-bolts)
    SizeThreadHeight,
    /// `generalized` + `size` rows (muffler clamps)
    GeneralizedSize,
    /// bare `size` rows
    SizeOnly,
    /// `forTube` rows (tube retainers)
    ForTube,
    /// `clampingRange` rows, the most common clamp shape
    ClampingRange,
}

/// Every shape class in classification order. First match wins, so the
/// order here is part of the contract, not a presentation choice.
pub static ALL_SHAPE_CLASSES: &[ShapeClass] = &[
    ShapeClass::TypeMaterialLength,
    ShapeClass::TypeMaterial,
    ShapeClass::SizeConnectingWithLength,
    ShapeClass::SizeWithDiameter,
    ShapeClass::PipeDiaThreadLocking,
    ShapeClass::PipeDiaSimple,
    ShapeClass::SizeThreadHeight,
    ShapeClass::GeneralizedSize,
    ShapeClass::SizeOnly,
    ShapeClass::ForTube,
    ShapeClass::ClampingRange,
];

impl ShapeClass {
    /// Human-readable name for diagnostics and the inspect command
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeClass::TypeMaterialLength => "Type / Material / Length",
            ShapeClass::TypeMaterial => "Type / Material",
            ShapeClass::SizeConnectingWithLength => "Size + Connecting Thread + Length",
            ShapeClass::SizeWithDiameter => "Size + Diameter",
            ShapeClass::PipeDiaThreadLocking => "Pipe Dia. + Thread + Locking",
            ShapeClass::PipeDiaSimple => "Pipe Dia.",
            ShapeClass::SizeThreadHeight => "Size + Thread + Height",
            ShapeClass::GeneralizedSize => "Generalized Size",
            ShapeClass::SizeOnly => "Size Only",
            ShapeClass::ForTube => "For Tube",
            ShapeClass::ClampingRange => "Clamping Range",
        }
    }

    /// Whether a record satisfies this class's defining predicate.
    ///
    /// Predicates are not mutually exclusive; call sites must test in
    /// [`ALL_SHAPE_CLASSES`] order.
    fn matches(self, record: &ProductRecord) -> bool {
        match self {
            ShapeClass::TypeMaterialLength => {
                record.is_present("type")
                    && record.has_object("material")
                    && record.is_present("length")
                    && !record.is_present("size")
                    && !record.is_present("clampingRange")
                    && !record.is_present("forTube")
            }
            ShapeClass::TypeMaterial => {
                record.is_present("type")
                    && record.has_object("material")
                    && !record.is_present("size")
                    && !record.is_present("clampingRange")
                    && !record.is_present("forTube")
            }
            ShapeClass::SizeConnectingWithLength => {
                record.is_present("size")
                    && record.is_present("connecting")
                    && record.is_present("dimensions.L")
            }
            ShapeClass::SizeWithDiameter => {
                record.is_present("size")
                    && !record.is_present("connecting")
                    && record.is_present("dimensions.Ø")
                    && record.is_present("dimensions.PxS")
            }
            ShapeClass::PipeDiaThreadLocking => {
                record.is_present("pipeOuterDia")
                    && record.has_object("thread")
                    && record.is_present("locking")
            }
            ShapeClass::PipeDiaSimple => {
                record.is_present("pipeOuterDia") && !record.has_object("thread")
            }
            ShapeClass::SizeThreadHeight => {
                record.is_present("size")
                    && record.is_present("thread")
                    && record.is_present("height")
            }
            ShapeClass::GeneralizedSize => {
                record.is_present("generalized") && record.is_present("size")
            }
            ShapeClass::SizeOnly => record.is_present("size"),
            ShapeClass::ForTube => record.is_present("forTube"),
            ShapeClass::ClampingRange => record.is_present("clampingRange"),
        }
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Classify one sample record into exactly one shape class.
pub fn classify(sample: &ProductRecord) -> CatalogResult<ShapeClass> {
    ALL_SHAPE_CLASSES
        .iter()
        .copied()
        .find(|class| class.matches(sample))
        .ok_or_else(|| {
            CatalogError::unrecognized_shape(sample.product_code(), sample.field_names())
        })
}

/// Classify a family by its first record. An empty family has no shape
/// (and renders no table), which is not an error.
pub fn classify_family(records: &[ProductRecord]) -> CatalogResult<Option<ShapeClass>> {
    match records.first() {
        Some(sample) => classify(sample).map(Some),
        None => Ok(None),
    }
}
