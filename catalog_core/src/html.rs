//! # HTML Rendering
//!
//! String renderers for the catalog page and its fragments. The table
//! renderers take a [`TableView`] whose layout was already resolved, so
//! the two-row header and the body rows are driven by the same column
//! list and cannot drift apart. Every dynamic value passes through
//! [`escape`]; column labels double as `data-label` attributes for the
//! responsive stylesheet.
//!
//! ## Example
//!
//! ```rust
//! use catalog_core::document::ProductVariant;
//! use catalog_core::html::render_table;
//! use catalog_core::view::PageView;
//! use serde_json::json;
//!
//! let variant: ProductVariant = serde_json::from_value(json!({
//!     "products": [{
//!         "productCode": "GGIP0150",
//!         "clampingRange": { "mm": "150-160" },
//!         "connectingThread": "M8",
//!         "dimensions": { "PxS": "M8 x 25", "W": "40", "H": "45", "C": "50", "T": "2.5" },
//!         "packSize": "25",
//!         "maxRecLoad": "1800"
//!     }]
//! }))
//! .unwrap();
//!
//! let view = PageView::from_variant(&variant).unwrap();
//! let table = render_table(view.table.as_ref().unwrap());
//! assert!(table.contains("<th colspan=\"5\">Dimensions [mm]</th>"));
//! assert!(table.contains("<td data-label=\"Clamping Range D[mm]\">150-160</td>"));
//! ```

use crate::layout::{ResolvedColumn, ResolvedGroup, ResolvedLayout};
use crate::record::ProductRecord;
use crate::specpanel::{ResolvedSlot, SlotValue};
use crate::view::{LoadingRow, PageView, TableView};

/// Escape text content.
pub fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Escape a double-quoted attribute value.
pub fn escape_attribute(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

/// The `data-label` a cell carries: group title plus sub-label, whichever
/// parts exist.
pub fn data_label(group: &ResolvedGroup, column: &ResolvedColumn) -> String {
    match (group.title.is_empty(), column.label.is_empty()) {
        (false, false) => format!("{} {}", group.title, column.label),
        (false, true) => group.title.to_string(),
        (true, _) => column.label.to_string(),
    }
}

// ============================================================================
// Product Table
// ============================================================================

/// The two-row `<thead>`: group titles above, sub-labels below. Groups
/// without sub-labels span both rows.
pub fn render_table_head(layout: &ResolvedLayout) -> String {
    let mut top = String::new();
    let mut sub = String::new();
    for group in &layout.groups {
        if group.spans_both_rows() {
            top.push_str(&format!(
                "            <th rowspan=\"2\">{}</th>\n",
                escape(group.title)
            ));
            continue;
        }
        if group.columns.len() > 1 {
            top.push_str(&format!(
                "            <th colspan=\"{}\">{}</th>\n",
                group.columns.len(),
                escape(group.title)
            ));
        } else {
            top.push_str(&format!("            <th>{}</th>\n", escape(group.title)));
        }
        for column in &group.columns {
            sub.push_str(&format!("            <th>{}</th>\n", escape(column.label)));
        }
    }

    if sub.is_empty() {
        // single-row header, nothing to span
        let top = top.replace(" rowspan=\"2\"", "");
        return format!("    <thead>\n        <tr>\n{top}        </tr>\n    </thead>\n");
    }
    format!(
        "    <thead>\n        <tr>\n{top}        </tr>\n        <tr class=\"sub-header\">\n{sub}        </tr>\n    </thead>\n"
    )
}

/// The `<tbody>`: one row per record, one cell per resolved column,
/// values verbatim (escaped), absent fields as empty cells.
pub fn render_table_body(layout: &ResolvedLayout, records: &[ProductRecord]) -> String {
    let mut out = String::from("    <tbody>\n");
    for record in records {
        out.push_str("        <tr>\n");
        for group in &layout.groups {
            for column in &group.columns {
                out.push_str(&format!(
                    "            <td data-label=\"{}\">{}</td>\n",
                    escape_attribute(&data_label(group, column)),
                    escape(&record.cell_text(column.sources))
                ));
            }
        }
        out.push_str("        </tr>\n");
    }
    out.push_str("    </tbody>\n");
    out
}

/// The complete product table.
pub fn render_table(table: &TableView) -> String {
    format!(
        "<div class=\"technical-table-container\">\n<table class=\"technical-table\">\n{}{}</table>\n</div>\n",
        render_table_head(&table.layout),
        render_table_body(&table.layout, &table.records)
    )
}

// ============================================================================
// Loading Table
// ============================================================================

pub fn render_loading_table(rows: &[LoadingRow]) -> String {
    let mut out = String::from(
        "<table class=\"loading-table\">\n    <thead>\n        <tr>\n            <th>Size</th>\n            <th>Max. Recommended Load [N]</th>\n        </tr>\n    </thead>\n    <tbody>\n",
    );
    for row in rows {
        out.push_str(&format!(
            "        <tr>\n            <td>{}</td>\n            <td>{}</td>\n        </tr>\n",
            escape(&row.size),
            escape(&row.load)
        ));
    }
    out.push_str("    </tbody>\n</table>\n");
    out
}

// ============================================================================
// Specification Panel
// ============================================================================

/// The specification sidebar. Slots arrive pre-filtered, so an empty
/// slice renders nothing at all.
pub fn render_spec_panel(slots: &[ResolvedSlot]) -> String {
    if slots.is_empty() {
        return String::new();
    }
    let mut out = String::from("<div class=\"specification\">\n    <h3>Specification</h3>\n");
    for slot in slots {
        out.push_str("    <div class=\"spec-item\">\n");
        out.push_str(&format!(
            "        <strong>\u{2022} {}:</strong>\n",
            escape(slot.label)
        ));
        match &slot.value {
            SlotValue::Text { value, detail } => {
                out.push_str(&format!("        <br><span>{}</span>\n", escape(value)));
                if let Some(detail) = detail {
                    out.push_str(&format!(
                        "        <br><span class=\"spec-detail\">{}</span>\n",
                        escape(detail)
                    ));
                }
            }
            SlotValue::List(items) => {
                out.push_str("        <ul>\n");
                for item in items {
                    out.push_str(&format!("            <li>{}</li>\n", escape(item)));
                }
                out.push_str("        </ul>\n");
            }
            SlotValue::Lines(lines) => {
                for line in lines {
                    out.push_str(&format!(
                        "        <br><span class=\"spec-line\">{}</span>\n",
                        escape(line)
                    ));
                }
            }
        }
        out.push_str("    </div>\n");
    }
    out.push_str("</div>\n");
    out
}

// ============================================================================
// Full Page
// ============================================================================

/// Render the standalone catalog page for one assembled view.
pub fn render_page(view: &PageView) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("    <meta charset=\"utf-8\">\n");
    out.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("    <title>{}</title>\n", escape(&view.page_title())));
    out.push_str("    <link rel=\"stylesheet\" href=\"/assets/catalog.css\">\n");
    out.push_str("</head>\n<body>\n");

    let name = view.name.as_deref().unwrap_or("Product Catalog");
    out.push_str("<header class=\"page-header\">\n");
    out.push_str(&format!("    <h1>{}</h1>\n", escape(name)));
    if let Some(definition) = &view.definition {
        out.push_str(&format!(
            "    <p class=\"product-definition\">{}</p>\n",
            escape(definition)
        ));
    }
    if view.page_number.is_some() || view.website.is_some() {
        out.push_str("    <div class=\"page-meta\">\n");
        if let Some(page) = &view.page_number {
            out.push_str(&format!(
                "        <span class=\"page-number\">Page {}</span>\n",
                escape(page)
            ));
        }
        if let Some(website) = &view.website {
            out.push_str(&format!(
                "        <span class=\"website\">{}</span>\n",
                escape(website)
            ));
        }
        out.push_str("    </div>\n");
    }
    out.push_str("</header>\n");

    out.push_str("<main class=\"catalog-page\">\n");
    if !view.images.is_empty() {
        out.push_str("<div class=\"product-images\">\n");
        for src in &view.images {
            out.push_str(&format!(
                "    <img src=\"{}\" alt=\"{}\">\n",
                escape_attribute(src),
                escape_attribute(name)
            ));
        }
        out.push_str("</div>\n");
    }
    out.push_str(&render_spec_panel(&view.slots));
    if !view.loading.is_empty() {
        out.push_str("<section class=\"loading-data\">\n    <h3>Loading Data</h3>\n");
        out.push_str(&render_loading_table(&view.loading));
        out.push_str("</section>\n");
    }
    if let Some(table) = &view.table {
        out.push_str("<section class=\"technical-data\">\n");
        out.push_str(&render_table(table));
        out.push_str("</section>\n");
    }
    out.push_str("</main>\n");

    out.push_str(&format!(
        "<footer class=\"page-footer\">Generated {}</footer>\n",
        view.generated.format("%Y-%m-%d")
    ));
    out.push_str("</body>\n</html>\n");
    out
}
