//! # Gripline Catalog CLI
//!
//! Renders product family documents from the terminal: the full page or
//! a single fragment, from a local file or straight off the catalog
//! site. Failures print the structured error as JSON on stderr, the same
//! body the preview server returns.

use std::fs;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;

use catalog_core::document::ProductVariant;
use catalog_core::errors::{CatalogError, CatalogResult};
use catalog_core::html;
use catalog_core::layout::resolve_for;
use catalog_core::shape::classify_family;
use catalog_core::store::load_source;
use catalog_core::view::PageView;

#[derive(Parser, Debug)]
#[command(
    name = "gripline",
    version,
    about = "Render Gripline product catalog pages from JSON documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a family document to HTML
    Render {
        /// Document path or http(s) URL
        #[arg(value_name = "SOURCE")]
        source: String,

        /// Variant key to select inside the document
        #[arg(long, value_name = "KEY")]
        product: Option<String>,

        /// Variant to fall back to when the document has no root variant
        #[arg(long = "default-key", value_name = "KEY")]
        default_key: Option<String>,

        /// Which piece of the page to emit
        #[arg(long, value_enum, default_value_t = Fragment::Page)]
        fragment: Fragment,

        /// Write to a file instead of stdout
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<String>,
    },

    /// Summarize a document: variants, shapes, resolved columns, row counts
    Inspect {
        /// Document path or http(s) URL
        #[arg(value_name = "SOURCE")]
        source: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Fragment {
    Page,
    Table,
    Specification,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Render {
            source,
            product,
            default_key,
            fragment,
            output,
        } => render(
            &source,
            product.as_deref(),
            default_key.as_deref(),
            fragment,
            output.as_deref(),
        ),
        Command::Inspect { source } => inspect(&source),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if let Ok(body) = serde_json::to_string_pretty(&err) {
                eprintln!("{body}");
            }
            ExitCode::FAILURE
        }
    }
}

fn render(
    source: &str,
    product: Option<&str>,
    default_key: Option<&str>,
    fragment: Fragment,
    output: Option<&str>,
) -> CatalogResult<()> {
    let loaded = load_source(source)?;
    let variant = loaded.document.select(product, default_key)?;
    let view = PageView::from_variant(variant)?;

    let markup = match fragment {
        Fragment::Page => html::render_page(&view),
        Fragment::Table => view
            .table
            .as_ref()
            .map(html::render_table)
            .unwrap_or_default(),
        Fragment::Specification => html::render_spec_panel(&view.slots),
    };

    match output {
        Some(path) => fs::write(path, markup)
            .map_err(|e| CatalogError::file_error("write", path, e.to_string()))?,
        None => print!("{markup}"),
    }
    Ok(())
}

fn inspect(source: &str) -> CatalogResult<()> {
    let loaded = load_source(source)?;
    let doc = &loaded.document;

    let mut variants = serde_json::Map::new();
    for key in doc.variant_keys() {
        if let Some(variant) = doc.get(&key) {
            variants.insert(key, summarize(variant));
        }
    }

    let root = if doc.has_root_variant() {
        doc.select(None, None).ok()
    } else {
        None
    };
    let summary = json!({
        "source": loaded.source,
        "rootVariant": root.map(summarize),
        "variants": variants,
    });

    let text = serde_json::to_string_pretty(&summary)
        .map_err(|e| CatalogError::parse_failure(source, e.to_string()))?;
    println!("{text}");
    Ok(())
}

fn summarize(variant: &ProductVariant) -> serde_json::Value {
    let classified = classify_family(&variant.products);
    let (shape, columns) = match (classified, variant.products.first()) {
        (Ok(Some(class)), Some(sample)) => {
            let layout = resolve_for(class, sample);
            let labels: Vec<String> = layout
                .groups
                .iter()
                .flat_map(|group| {
                    group
                        .columns
                        .iter()
                        .map(|column| html::data_label(group, column))
                })
                .collect();
            (json!(class.display_name()), json!(labels))
        }
        (Err(_), _) => (json!("unrecognized"), json!([])),
        _ => (serde_json::Value::Null, json!([])),
    };
    json!({
        "productName": variant.product_name,
        "products": variant.products.len(),
        "shape": shape,
        "columns": columns,
        "loadingRows": variant.loading_data.len(),
        "hasSpecification": variant.specification.is_some(),
    })
}
