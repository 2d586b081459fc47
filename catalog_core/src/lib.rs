//! # catalog_core - Product Catalog Data Model and Renderer
//!
//! `catalog_core` turns Gripline's JSON catalog documents into finished
//! HTML pages: pipe clamps, strut accessories and their mixed-dialect
//! field spellings, rendered through one table engine instead of one
//! hand-written page per family.
//!
//! ## Design Philosophy
//!
//! - **Data-Driven**: table shapes are static lookup tables, not inline
//!   conditionals scattered through the renderers
//! - **Classify Once**: a family's records are classified and the layout
//!   resolved a single time; header and rows share the result
//! - **Verbatim Values**: cell text is shipped untouched, absent fields
//!   render as empty cells
//! - **Rich Errors**: every failure is a typed [`CatalogError`], never a
//!   silent blank page
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog_core::document::CatalogDocument;
//! use catalog_core::html::render_page;
//! use catalog_core::view::PageView;
//! use serde_json::json;
//!
//! let doc = CatalogDocument::from_value(
//!     json!({
//!         "productName": "Industrial Pipe Clamp",
//!         "products": [{
//!             "productCode": "GGIP0150",
//!             "clampingRange": { "mm": "150-160" },
//!             "connectingThread": "M8",
//!             "dimensions": { "PxS": "M8 x 25", "W": "40", "H": "45", "C": "50", "T": "2.5" },
//!             "packSize": "25",
//!             "maxRecLoad": "1800"
//!         }]
//!     }),
//!     "ggip.json",
//! )?;
//!
//! let variant = doc.select(None, None)?;
//! let page = render_page(&PageView::from_variant(variant)?);
//! assert!(page.contains("Industrial Pipe Clamp"));
//! # Ok::<(), catalog_core::errors::CatalogError>(())
//! ```
//!
//! ## Modules
//!
//! - [`document`] - Document forms and variant selection
//! - [`record`] - Field access over raw product records
//! - [`shape`] - The closed set of table shapes and classification
//! - [`layout`] - Static column layouts and per-family resolution
//! - [`specpanel`] - The specification sidebar whitelist
//! - [`view`] - Page view models
//! - [`html`] - HTML renderers
//! - [`store`] - Loading documents from disk or HTTP
//! - [`errors`] - Structured error types

pub mod document;
pub mod errors;
pub mod html;
pub mod layout;
pub mod record;
pub mod shape;
pub mod specpanel;
pub mod store;
pub mod view;

// Re-export commonly used types at crate root for convenience
pub use document::{CatalogDocument, ProductVariant};
pub use errors::{CatalogError, CatalogResult};
pub use layout::{resolve_for, ResolvedLayout};
pub use record::ProductRecord;
pub use shape::{classify, classify_family, ShapeClass};
pub use view::PageView;
