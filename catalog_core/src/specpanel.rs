//! # Specification Panel
//!
//! The "Specification" sidebar of a catalog page is a fixed set of named
//! slots (Material, Zinc Plating, Temperature Resistance, ...). Documents
//! fill an arbitrary subset; a slot with no data is left out of the panel
//! entirely rather than rendered blank.
//!
//! [`SPEC_SLOTS`] is the closed whitelist, in display order. Each slot
//! names the specification fields it reads (first present field wins),
//! so dialect spellings like `sound` / `soundAbsorption` land in one
//! place, and [`resolve_slots`] reduces a document's `specification`
//! object to the list of slots to draw.
//!
//! ## Example
//!
//! ```rust
//! use catalog_core::specpanel::{resolve_slots, SlotValue};
//! use serde_json::json;
//!
//! let spec = json!({
//!     "material": { "surface": "Zinc plated, Powder coated", "insert": "EPDM" },
//!     "temperatureResistance": "-40 °C to +120 °C"
//! });
//! let slots = resolve_slots(spec.as_object().unwrap());
//!
//! assert_eq!(slots.len(), 3);
//! assert_eq!(slots[0].label, "Material");
//! match &slots[0].value {
//!     SlotValue::List(items) => assert_eq!(items, &["Zinc plated", "Powder coated"]),
//!     other => panic!("unexpected value: {other:?}"),
//! }
//! ```

use serde_json::{Map, Value};

use crate::record::{leaf_text, path_value};

// ============================================================================
// Slot Definitions
// ============================================================================

/// How a slot presents its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// A single line of text.
    Text,
    /// A bullet list; string values are split on commas.
    List,
    /// Prefixed sub-lines read from nested fields, e.g. `Hardness: 60 ShA`.
    Labelled(&'static [(&'static str, &'static str)]),
}

/// One entry of the panel whitelist.
#[derive(Debug, Clone, Copy)]
pub struct SpecSlot {
    pub label: &'static str,
    pub kind: SlotKind,
    /// Field paths checked in order; the first present one supplies the value.
    pub sources: &'static [&'static str],
    /// Optional companion field rendered as a smaller note under the value.
    pub detail: Option<&'static str>,
}

const fn text(label: &'static str, sources: &'static [&'static str]) -> SpecSlot {
    SpecSlot {
        label,
        kind: SlotKind::Text,
        sources,
        detail: None,
    }
}

/// Every slot the panel can show, in display order.
pub static SPEC_SLOTS: &[SpecSlot] = &[
    SpecSlot {
        label: "Material",
        kind: SlotKind::List,
        sources: &["material.surface", "material"],
        detail: None,
    },
    SpecSlot {
        label: "Surface",
        kind: SlotKind::List,
        sources: &["surface"],
        detail: None,
    },
    text("Material Insert", &["material.insert"]),
    text("Material Connection", &["materialConnection"]),
    text("Zinc Plating", &["zincPlating"]),
    text("Effective Density", &["effectiveDensity"]),
    text("Thermal Conductivity", &["thermalConductivity"]),
    text("Fire Resistance", &["fireResistance"]),
    text("Face Side", &["faceSide"]),
    text("Water Vapour Permeability", &["waterVapourPermeability"]),
    SpecSlot {
        label: "Sound Absorption",
        kind: SlotKind::Text,
        sources: &["sound", "soundAbsorption"],
        detail: Some("soundDetails"),
    },
    text("Sound Absorption Lining", &["soundAbsorptionLining"]),
    text("Noise Reduction", &["noiseReduction"]),
    text("Temperature Resistance", &["temperatureResistance"]),
    text("Compression Strength", &["comStrength"]),
    text("EPDM Hardness", &["epdmHardness"]),
    text("Fire Behaviour", &["fireBehaviour"]),
    SpecSlot {
        label: "Center Rib",
        kind: SlotKind::Labelled(&[
            ("centerRib.hardness", "Hardness"),
            ("centerRib.fireBehaviour", "Fire Behaviour"),
        ]),
        sources: &[],
        detail: None,
    },
];

// ============================================================================
// Resolution
// ============================================================================

/// The data a present slot renders with.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotValue {
    Text {
        value: String,
        detail: Option<String>,
    },
    List(Vec<String>),
    Lines(Vec<String>),
}

/// A slot that has data in the current document.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSlot {
    pub label: &'static str,
    pub value: SlotValue,
}

fn first_source<'a>(spec: &'a Map<String, Value>, sources: &[&str]) -> Option<&'a Value> {
    sources.iter().find_map(|path| path_value(spec, path))
}

fn list_items(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(leaf_text).collect(),
        other => match leaf_text(other) {
            Some(text) => text
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        },
    }
}

impl SpecSlot {
    fn resolve(&self, spec: &Map<String, Value>) -> Option<SlotValue> {
        match self.kind {
            SlotKind::Text => {
                let value = first_source(spec, self.sources).and_then(leaf_text)?;
                let detail = self
                    .detail
                    .and_then(|path| path_value(spec, path))
                    .and_then(leaf_text);
                Some(SlotValue::Text { value, detail })
            }
            SlotKind::List => {
                let items = list_items(first_source(spec, self.sources)?);
                if items.is_empty() {
                    None
                } else {
                    Some(SlotValue::List(items))
                }
            }
            SlotKind::Labelled(lines) => {
                let resolved: Vec<String> = lines
                    .iter()
                    .filter_map(|(path, prefix)| {
                        path_value(spec, path)
                            .and_then(leaf_text)
                            .map(|value| format!("{prefix}: {value}"))
                    })
                    .collect();
                if resolved.is_empty() {
                    None
                } else {
                    Some(SlotValue::Lines(resolved))
                }
            }
        }
    }
}

/// Reduce a document's `specification` object to the slots it fills,
/// in panel order. Absent and blank slots are dropped.
pub fn resolve_slots(spec: &Map<String, Value>) -> Vec<ResolvedSlot> {
    SPEC_SLOTS
        .iter()
        .filter_map(|slot| {
            slot.resolve(spec).map(|value| ResolvedSlot {
                label: slot.label,
                value,
            })
        })
        .collect()
}
