//! # Page View Models
//!
//! A [`PageView`] is everything the renderers need to draw one catalog
//! page, assembled up front: the variant's page fields, the resolved
//! specification slots, the loading table rows as plain text, and the
//! product table with its layout already classified and resolved against
//! the family sample.
//!
//! Building the view is where classification happens, exactly once per
//! family. Renderers downstream only read; they cannot re-probe records
//! or disagree with each other about column counts.
//!
//! ## Example
//!
//! ```rust
//! use catalog_core::document::CatalogDocument;
//! use catalog_core::view::PageView;
//! use serde_json::json;
//!
//! let doc = CatalogDocument::from_value(
//!     json!({
//!         "productName": "Rubber Insert",
//!         "products": [
//!             { "productCode": "GGSM0100", "generalized": "100", "size": "M8" }
//!         ]
//!     }),
//!     "ggsm.json",
//! )
//! .unwrap();
//!
//! let view = PageView::from_variant(doc.select(None, None).unwrap()).unwrap();
//! assert_eq!(view.page_title(), "Rubber Insert - Product Catalog");
//! let table = view.table.as_ref().unwrap();
//! assert_eq!(table.records.len(), 1);
//! ```

use chrono::{DateTime, Utc};

use crate::document::ProductVariant;
use crate::errors::CatalogResult;
use crate::layout::{resolve_for, ResolvedLayout};
use crate::record::ProductRecord;
use crate::shape::classify_family;
use crate::specpanel::{resolve_slots, ResolvedSlot};

/// The product table of a page: one resolved layout shared by the header
/// and every row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub layout: ResolvedLayout,
    pub records: Vec<ProductRecord>,
}

/// One row of the load-rating table, already flattened to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingRow {
    pub size: String,
    pub load: String,
}

/// Everything one catalog page renders from.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub name: Option<String>,
    pub definition: Option<String>,
    pub page_number: Option<String>,
    pub website: Option<String>,
    pub images: Vec<String>,
    pub slots: Vec<ResolvedSlot>,
    pub loading: Vec<LoadingRow>,
    /// `None` when the variant ships no product rows.
    pub table: Option<TableView>,
    pub generated: DateTime<Utc>,
}

impl PageView {
    /// Assemble the view for a selected variant. Fails when the family's
    /// sample record matches no known table shape.
    pub fn from_variant(variant: &ProductVariant) -> CatalogResult<Self> {
        let class = classify_family(&variant.products)?;
        let table = match (class, variant.products.first()) {
            (Some(class), Some(sample)) => Some(TableView {
                layout: resolve_for(class, sample),
                records: variant.products.clone(),
            }),
            _ => None,
        };

        let slots = variant
            .specification
            .as_ref()
            .map(|spec| resolve_slots(spec))
            .unwrap_or_default();

        let loading = variant
            .loading_data
            .iter()
            .map(|entry| LoadingRow {
                size: entry.size_text(),
                load: entry.load_text(),
            })
            .collect();

        Ok(PageView {
            name: variant.product_name.clone(),
            definition: variant.product_definition.clone(),
            page_number: variant.page_number_text(),
            website: variant.website.clone(),
            images: variant
                .image_sources()
                .into_iter()
                .map(str::to_string)
                .collect(),
            slots,
            loading,
            table,
            generated: Utc::now(),
        })
    }

    /// Browser title line.
    pub fn page_title(&self) -> String {
        match self.name.as_deref() {
            Some(name) => format!("{name} - Product Catalog"),
            None => "Product Catalog".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeClass;
    use serde_json::json;

    fn variant(value: serde_json::Value) -> ProductVariant {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_variant_assembles_every_section() {
        let view = PageView::from_variant(&variant(json!({
            "productName": "Sprinkler Hanger",
            "productDefinition": "Hinged hanger for sprinkler pipework.",
            "pageNumber": 31,
            "website": "www.example.com",
            "images": { "mainImage": "images/ggsh.webp", "image1": "images/ggsh-open.webp" },
            "specification": { "material": ["Steel strip"], "zincPlating": "5 µm" },
            "loadingData": [{ "size": "25", "maxRecommendedLoad": 200 }],
            "products": [{
                "productCode": "GGSH0025",
                "clampingRange": { "DN": "25", "inch": "1" },
                "dimensions": { "PxS": "M8", "W": "30" }
            }]
        })))
        .unwrap();

        assert_eq!(view.page_title(), "Sprinkler Hanger - Product Catalog");
        assert_eq!(view.page_number.as_deref(), Some("31"));
        assert_eq!(view.images, vec!["images/ggsh.webp", "images/ggsh-open.webp"]);
        assert_eq!(view.slots.len(), 2);
        assert_eq!(
            view.loading,
            vec![LoadingRow {
                size: "25".to_string(),
                load: "200".to_string(),
            }]
        );

        let table = view.table.as_ref().unwrap();
        assert_eq!(table.layout.class, ShapeClass::ClampingRange);
        assert_eq!(
            table.layout.row_cells(&table.records[0]).len(),
            table.layout.column_count()
        );
    }

    #[test]
    fn test_variant_without_products_has_no_table() {
        let view = PageView::from_variant(&variant(json!({
            "productName": "Accessories",
            "specification": { "material": "Steel" }
        })))
        .unwrap();

        assert!(view.table.is_none());
        assert_eq!(view.slots.len(), 1);
    }

    #[test]
    fn test_unrecognized_family_fails_view_assembly() {
        let err = PageView::from_variant(&variant(json!({
            "productName": "Mystery",
            "products": [{ "productCode": "X1", "oddField": "?" }]
        })))
        .unwrap_err();
        assert_eq!(err.error_code(), "UNRECOGNIZED_SHAPE");
    }

    #[test]
    fn test_untitled_variant_falls_back_to_generic_title() {
        let view = PageView::from_variant(&variant(json!({}))).unwrap();
        assert_eq!(view.page_title(), "Product Catalog");
        assert!(view.loading.is_empty());
    }
}
