//! # Table Layouts
//!
//! The column tables behind every shape class. Each class maps to one
//! static [`TableLayout`]: ordered column groups whose columns carry the
//! header sub-label and the field paths a row cell reads. Header and row
//! rendering both consume the same layout, so their column counts can
//! never drift apart.
//!
//! A few columns vary with the family's data dialect (clamping ranges
//! spelled `DN`/`mm`/`Ømm`/`inch`, thread pairs named `P1/P2` or `D1/D2`,
//! flange heads replacing connecting threads). That variation lives here
//! as data too: presence rules drop columns the sample record cannot
//! fill, and overrides swap a label or source chain when a marker path
//! is present. [`TableLayout::resolve`] applies both against the family's
//! sample record, once, and the result is immutable routing for all rows.
//!
//! ## Example
//!
//! ```rust
//! use catalog_core::layout::resolve_for;
//! use catalog_core::record::ProductRecord;
//! use catalog_core::shape::ShapeClass;
//! use serde_json::json;
//!
//! let sample = ProductRecord::from_value(json!({
//!     "productCode": "GGIP0150",
//!     "clampingRange": { "mm": "150-160" },
//!     "connectingThread": "M8",
//!     "dimensions": { "W": "200" },
//!     "packSize": "25",
//!     "maxRecLoad": "1800"
//! }))
//! .unwrap();
//!
//! let layout = resolve_for(ShapeClass::ClampingRange, &sample);
//! let cells = layout.row_cells(&sample);
//! assert_eq!(cells[0], "GGIP0150");
//! assert_eq!(cells[1], "150-160");
//! assert_eq!(cells.len(), layout.column_count());
//! ```

use crate::record::ProductRecord;
use crate::shape::ShapeClass;

// ============================================================================
// Layout Data Model
// ============================================================================

/// How a column decides whether it appears for a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Always part of the class's table; missing values render as empty
    /// cells.
    Always,
    /// Included only when the family's sample record yields a value for
    /// one of the column's source paths.
    Probed,
}

/// Swap a column's sub-label (and optionally its source chain) when the
/// sample record carries the marker path.
#[derive(Debug, Clone, Copy)]
pub struct ColumnOverride {
    /// Path probed on the sample record
    pub when: &'static str,
    /// Replacement sub-label
    pub label: &'static str,
    /// Replacement source chain; empty keeps the column's default chain
    pub sources: &'static [&'static str],
}

/// One table column: header sub-label plus the ordered field paths a row
/// cell reads (first non-empty wins).
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    /// Sub-header text; empty means the group header spans both rows
    pub label: &'static str,
    pub sources: &'static [&'static str],
    pub presence: Presence,
    pub overrides: &'static [ColumnOverride],
}

/// Swap a group's title when the sample record carries the marker path.
#[derive(Debug, Clone, Copy)]
pub struct TitleOverride {
    pub when: &'static str,
    pub title: &'static str,
}

/// A titled run of columns: one first-header-row cell.
#[derive(Debug, Clone, Copy)]
pub struct ColumnGroup {
    pub title: &'static str,
    pub title_overrides: &'static [TitleOverride],
    pub columns: &'static [ColumnSpec],
}

/// A shape class's full column table.
#[derive(Debug, Clone, Copy)]
pub struct TableLayout {
    pub groups: &'static [ColumnGroup],
}

/// Always-present column
const fn col(label: &'static str, sources: &'static [&'static str]) -> ColumnSpec {
    ColumnSpec {
        label,
        sources,
        presence: Presence::Always,
        overrides: &[],
    }
}

/// Sample-probed column
const fn probed(label: &'static str, sources: &'static [&'static str]) -> ColumnSpec {
    ColumnSpec {
        label,
        sources,
        presence: Presence::Probed,
        overrides: &[],
    }
}

/// Single-column group without a sub-label (spans both header rows).
/// A macro rather than a `const fn`: the inner `&[ColumnSpec { .. }]`
/// borrow only promotes to `'static` when built from literals at the
/// const call site, not from a function parameter.
macro_rules! plain_group {
    ($title:expr, $sources:expr) => {
        ColumnGroup {
            title: $title,
            title_overrides: &[],
            columns: &[ColumnSpec {
                label: "",
                sources: $sources,
                presence: Presence::Always,
                overrides: &[],
            }],
        }
    };
}

const fn group(title: &'static str, columns: &'static [ColumnSpec]) -> ColumnGroup {
    ColumnGroup {
        title,
        title_overrides: &[],
        columns,
    }
}

const PRODUCT_CODE: ColumnGroup = plain_group!("Product Code", &["productCode"]);
const PACK_SIZE: ColumnGroup = plain_group!("Pack Size [pcs]", &["packSize"]);

// ============================================================================
// Static Layouts
// ============================================================================

// GGID strut inserts: type / material / length rows
static TYPE_MATERIAL_LENGTH: TableLayout = TableLayout {
    groups: &[
        PRODUCT_CODE,
        group("Type", &[col("Type L", &["type"])]),
        group("Material", &[col("P x S", &["material.PxS"])]),
        group("Length", &[col("L[mm]", &["length.Lmm"])]),
        PACK_SIZE,
        plain_group!("Max. Rec. Load [N]", &["maxRec.loadN"]),
    ],
};

// GGWM washers: type / material rows
static TYPE_MATERIAL: TableLayout = TableLayout {
    groups: &[
        PRODUCT_CODE,
        group("Type", &[col("Type A", &["type"])]),
        group("Material", &[col("P x S", &["material.PxS"])]),
        PACK_SIZE,
        plain_group!("Max. Rec. Load [N]", &["maxRec.loadN"]),
    ],
};

// GGDL slotted brackets: the fifth dimension column is labelled T but the
// data spells the value L
static SIZE_CONNECTING_WITH_LENGTH: TableLayout = TableLayout {
    groups: &[
        PRODUCT_CODE,
        group("Size", &[col("[mm]", &["size.mm"])]),
        plain_group!("Connecting Thread", &["connecting.thread"]),
        group(
            "Dimensions [mm]",
            &[
                col("P x S", &["dimensions.PxS"]),
                col("W", &["dimensions.W"]),
                col("H'", &["dimensions.H"]),
                col("C", &["dimensions.C"]),
                col("T", &["dimensions.L"]),
            ],
        ),
        plain_group!("S", &["dimensions.S"]),
        PACK_SIZE,
        plain_group!("Max. Rec. Load [N]", &["maxRec.loadN"]),
    ],
};

// GGDM saddles: size rows whose dimensions carry a bore
static SIZE_WITH_DIAMETER: TableLayout = TableLayout {
    groups: &[
        PRODUCT_CODE,
        group("Size", &[col("[mm]", &["size.mm"])]),
        group(
            "Dimensions [mm]",
            &[
                col("P x S", &["dimensions.PxS"]),
                col("W", &["dimensions.W"]),
                col("H'", &["dimensions.H"]),
                col("C", &["dimensions.C"]),
                col("Ø", &["dimensions.Ø"]),
            ],
        ),
        PACK_SIZE,
        plain_group!("Max. Rec. Load [N]", &["maxRec.loadN"]),
    ],
};

// GGCGL/GGCGS grip couplings: thread pairs are spelled D1/D2 or P1/P2
// depending on the family; pack size trails max load in this class
static PIPE_DIA_THREAD_LOCKING: TableLayout = TableLayout {
    groups: &[
        PRODUCT_CODE,
        group(
            "Pipe Outer Dia. D",
            &[
                col("DN", &["pipeOuterDia.DN"]),
                col("D[mm]", &["pipeOuterDia.Dmm"]),
                col("[\"]", &["pipeOuterDia.inch"]),
            ],
        ),
        group(
            "Thread",
            &[
                ColumnSpec {
                    label: "D1",
                    sources: &["thread.P1", "thread.D1"],
                    presence: Presence::Always,
                    overrides: &[ColumnOverride {
                        when: "thread.P1",
                        label: "P1",
                        sources: &[],
                    }],
                },
                ColumnSpec {
                    label: "D2",
                    sources: &["thread.P2", "thread.D2"],
                    presence: Presence::Always,
                    overrides: &[ColumnOverride {
                        when: "thread.P1",
                        label: "P2",
                        sources: &[],
                    }],
                },
            ],
        ),
        group(
            "Dimensions [mm]",
            &[
                col("W", &["dimensions.W"]),
                col("H'", &["dimensions.H"]),
                col("P", &["dimensions.P"]),
                col("S", &["dimensions.S"]),
            ],
        ),
        plain_group!("Locking Screw", &["locking.screw"]),
        plain_group!("Max. Rec. Load [N]", &["maxRec.loadN"]),
        PACK_SIZE,
    ],
};

// GGRI rings and GGPUI insulation: two dimension columns, P/T when the
// family has a P dimension, otherwise T/L
static PIPE_DIA_SIMPLE: TableLayout = TableLayout {
    groups: &[
        PRODUCT_CODE,
        group(
            "Pipe Outer Dia. D",
            &[
                col("DN", &["pipeOuterDia.DN"]),
                col("D[mm]", &["pipeOuterDia.Dmm"]),
                col("[\"]", &["pipeOuterDia.inch"]),
            ],
        ),
        group(
            "Dimensions [mm]",
            &[
                ColumnSpec {
                    label: "T",
                    sources: &["dimensions.T"],
                    presence: Presence::Always,
                    overrides: &[ColumnOverride {
                        when: "dimensions.P",
                        label: "P",
                        sources: &["dimensions.P"],
                    }],
                },
                ColumnSpec {
                    label: "L",
                    sources: &["dimensions.L"],
                    presence: Presence::Always,
                    overrides: &[ColumnOverride {
                        when: "dimensions.P",
                        label: "T",
                        sources: &["dimensions.T"],
                    }],
                },
            ],
        ),
        PACK_SIZE,
        plain_group!("Max. Rec. Load [N]", &["maxRec.loadN"]),
    ],
};

// GGUB U-bolts
static SIZE_THREAD_HEIGHT: TableLayout = TableLayout {
    groups: &[
        PRODUCT_CODE,
        group(
            "Size",
            &[
                col("mm", &["size.mm"]),
                col("[inch]", &["size.inch"]),
                col("DN", &["size.DN"]),
            ],
        ),
        plain_group!("Thread", &["thread.G"]),
        plain_group!("Height", &["height.H"]),
        PACK_SIZE,
    ],
};

// GGSMU muffler clamps: scalar size, material and load fields
static GENERALIZED_SIZE: TableLayout = TableLayout {
    groups: &[
        PRODUCT_CODE,
        group(
            "Size",
            &[col("Generalized", &["generalized"]), col("D[mm]", &["size"])],
        ),
        group("Material", &[col("wλt[mm]", &["material"])]),
        PACK_SIZE,
        plain_group!("Max. Rec. Load [N]", &["maxRec"]),
    ],
};

// GGSM slide nuts and friends: only the dimensions the family ships
static SIZE_ONLY: TableLayout = TableLayout {
    groups: &[
        PRODUCT_CODE,
        group("Size", &[col("[mm]", &["size.mm"])]),
        group(
            "Dimensions [mm]",
            &[
                probed("P x S", &["dimensions.PxS"]),
                probed("B", &["dimensions.B"]),
                probed("B1", &["dimensions.B1"]),
                probed("G", &["dimensions.Ø", "dimensions.G"]),
                probed("H", &["dimensions.H"]),
            ],
        ),
        PACK_SIZE,
    ],
};

// GGRR tube retainers: DN lives at the record root, the tube range under
// forTube; dimension columns and max load follow the family's dialect
static FOR_TUBE: TableLayout = TableLayout {
    groups: &[
        PRODUCT_CODE,
        group(
            "For Tube",
            &[
                col("DN", &["DN"]),
                col("D[mm]", &["forTube.mm"]),
                col("[inch]", &["forTube.inch"]),
            ],
        ),
        group(
            "Dimensions [mm]",
            &[
                probed("P x S", &["dimensions.PxS"]),
                probed("W", &["dimensions.W"]),
                probed("H", &["dimensions.H"]),
                ColumnSpec {
                    label: "C",
                    sources: &["dimensions.C", "dimensions.D"],
                    presence: Presence::Probed,
                    overrides: &[ColumnOverride {
                        when: "dimensions.D",
                        label: "D",
                        sources: &[],
                    }],
                },
                probed("T", &["dimensions.T"]),
            ],
        ),
        plain_group!("S", &["S", "MStud"]),
        PACK_SIZE,
        ColumnGroup {
            title: "Max. Rec. Load [N]",
            title_overrides: &[],
            columns: &[probed("", &["maxRecLoad"])],
        },
    ],
};

// GGIP/GGTC/GGQC pipe clamps, the default shape. Clamping ranges appear
// in two- and three-part spellings; the connecting column is a thread, a
// slot diameter, or a flange head depending on the family.
static CLAMPING_RANGE: TableLayout = TableLayout {
    groups: &[
        PRODUCT_CODE,
        group(
            "Clamping Range",
            &[
                probed("DN", &["clampingRange.DN"]),
                ColumnSpec {
                    label: "D[mm]",
                    sources: &["clampingRange.D(mm)", "clampingRange.mm"],
                    presence: Presence::Probed,
                    overrides: &[ColumnOverride {
                        when: "clampingRange.D(mm)",
                        label: "Ø[mm]",
                        sources: &[],
                    }],
                },
                probed("Ø[mm]", &["clampingRange.Ømm", "clampingRange.Ø[mm]"]),
                probed("[inch]", &["clampingRange.inch"]),
            ],
        ),
        ColumnGroup {
            title: "Connecting Thread",
            title_overrides: &[
                TitleOverride {
                    when: "flangeHead",
                    title: "Flange Head",
                },
                TitleOverride {
                    when: "flageHead",
                    title: "Flange Head",
                },
                TitleOverride {
                    when: "connectingSlotØ",
                    title: "Connecting Slot Ø",
                },
            ],
            columns: &[ColumnSpec {
                label: "",
                sources: &[
                    "flangeHead",
                    "flageHead",
                    "connectingSlotØ",
                    "connectingThread",
                ],
                presence: Presence::Probed,
                overrides: &[
                    ColumnOverride {
                        when: "flangeHead",
                        label: "G [inch]",
                        sources: &[],
                    },
                    ColumnOverride {
                        when: "flageHead",
                        label: "G [inch]",
                        sources: &[],
                    },
                ],
            }],
        },
        group(
            "Dimensions [mm]",
            &[
                col("P x S", &["dimensions.PxS"]),
                col("W", &["dimensions.W"]),
                col("H", &["dimensions.H"]),
                ColumnSpec {
                    label: "C",
                    sources: &["dimensions.C", "dimensions.D"],
                    presence: Presence::Always,
                    overrides: &[ColumnOverride {
                        when: "dimensions.D",
                        label: "D",
                        sources: &[],
                    }],
                },
                col("T", &["dimensions.T"]),
                probed("S", &["dimensions.S"]),
            ],
        ),
        ColumnGroup {
            title: "S",
            title_overrides: &[],
            columns: &[probed("", &["S", "MStud"])],
        },
        PACK_SIZE,
        plain_group!("Max. Rec. Load [N]", &["maxRecLoad"]),
    ],
};

impl ShapeClass {
    /// The static column table for this class.
    pub fn layout(self) -> &'static TableLayout {
        match self {
            ShapeClass::TypeMaterialLength => &TYPE_MATERIAL_LENGTH,
            ShapeClass::TypeMaterial => &TYPE_MATERIAL,
            ShapeClass::SizeConnectingWithLength => &SIZE_CONNECTING_WITH_LENGTH,
            ShapeClass::SizeWithDiameter => &SIZE_WITH_DIAMETER,
            ShapeClass::PipeDiaThreadLocking => &PIPE_DIA_THREAD_LOCKING,
            ShapeClass::PipeDiaSimple => &PIPE_DIA_SIMPLE,
            ShapeClass::SizeThreadHeight => &SIZE_THREAD_HEIGHT,
            ShapeClass::GeneralizedSize => &GENERALIZED_SIZE,
            ShapeClass::SizeOnly => &SIZE_ONLY,
            ShapeClass::ForTube => &FOR_TUBE,
            ShapeClass::ClampingRange => &CLAMPING_RANGE,
        }
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// A column after sample resolution: final sub-label and source chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub label: &'static str,
    pub sources: &'static [&'static str],
}

/// A visible group after sample resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGroup {
    pub title: &'static str,
    pub columns: Vec<ResolvedColumn>,
}

impl ResolvedGroup {
    /// A group spans both header rows when none of its columns carries a
    /// sub-label.
    pub fn spans_both_rows(&self) -> bool {
        self.columns.iter().all(|column| column.label.is_empty())
    }
}

/// One family's final table shape: shared routing for the header and
/// every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLayout {
    pub class: ShapeClass,
    pub groups: Vec<ResolvedGroup>,
}

impl TableLayout {
    /// Apply presence rules and overrides against the family's sample
    /// record. Called once per family; rows never re-probe.
    pub fn resolve(&'static self, class: ShapeClass, sample: &ProductRecord) -> ResolvedLayout {
        let groups = self
            .groups
            .iter()
            .filter_map(|group| {
                let columns: Vec<ResolvedColumn> = group
                    .columns
                    .iter()
                    .filter(|column| match column.presence {
                        Presence::Always => true,
                        Presence::Probed => sample.any_present(column.sources),
                    })
                    .map(|column| resolve_column(column, sample))
                    .collect();
                if columns.is_empty() {
                    return None;
                }
                let title = group
                    .title_overrides
                    .iter()
                    .find(|rule| sample.is_present(rule.when))
                    .map(|rule| rule.title)
                    .unwrap_or(group.title);
                Some(ResolvedGroup { title, columns })
            })
            .collect();
        ResolvedLayout { class, groups }
    }
}

fn resolve_column(column: &ColumnSpec, sample: &ProductRecord) -> ResolvedColumn {
    match column
        .overrides
        .iter()
        .find(|rule| sample.is_present(rule.when))
    {
        Some(rule) => ResolvedColumn {
            label: rule.label,
            sources: if rule.sources.is_empty() {
                column.sources
            } else {
                rule.sources
            },
        },
        None => ResolvedColumn {
            label: column.label,
            sources: column.sources,
        },
    }
}

impl ResolvedLayout {
    /// Total visible columns; header and body cell counts both equal it.
    pub fn column_count(&self) -> usize {
        self.groups.iter().map(|group| group.columns.len()).sum()
    }

    /// Visible columns in table order.
    pub fn columns(&self) -> impl Iterator<Item = &ResolvedColumn> {
        self.groups.iter().flat_map(|group| group.columns.iter())
    }

    /// Cell values for one record, in table order. Total: a missing field
    /// is an empty cell.
    pub fn row_cells(&self, record: &ProductRecord) -> Vec<String> {
        self.columns()
            .map(|column| record.cell_text(column.sources))
            .collect()
    }
}

/// Classify-and-resolve convenience for one family's records.
pub fn resolve_for(class: ShapeClass, sample: &ProductRecord) -> ResolvedLayout {
    class.layout().resolve(class, sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::classify;
    use serde_json::{json, Value};

    fn record(value: Value) -> ProductRecord {
        ProductRecord::from_value(value).unwrap()
    }

    fn resolved(value: Value) -> ResolvedLayout {
        let sample = record(value);
        let class = classify(&sample).unwrap();
        resolve_for(class, &sample)
    }

    fn labels(layout: &ResolvedLayout) -> Vec<&'static str> {
        layout.columns().map(|column| column.label).collect()
    }

    #[test]
    fn test_column_counts_per_class() {
        let cases = vec![
            (
                json!({"productCode": "GGID01", "type": "L", "material": {"PxS": "30x3"},
                       "length": {"Lmm": "2000"}, "packSize": "10", "maxRec": {"loadN": "900"}}),
                6,
            ),
            (
                json!({"productCode": "GGWM01", "type": "A", "material": {"PxS": "40x4"},
                       "packSize": "100", "maxRec": {"loadN": "500"}}),
                5,
            ),
            (
                json!({"productCode": "GGDL01", "size": {"mm": "41"},
                       "connecting": {"thread": "M10"},
                       "dimensions": {"PxS": "30x3", "W": "40", "H": "50", "C": "20", "L": "60", "S": "6"},
                       "packSize": "25", "maxRec": {"loadN": "1200"}}),
                11,
            ),
            (
                json!({"productCode": "GGDM01", "size": {"mm": "41"},
                       "dimensions": {"PxS": "30x3", "W": "40", "H": "50", "C": "20", "Ø": "12"},
                       "packSize": "25", "maxRec": {"loadN": "1100"}}),
                9,
            ),
            (
                json!({"productCode": "GGCGL1", "pipeOuterDia": {"DN": "25", "Dmm": "33.7", "inch": "1"},
                       "thread": {"D1": "M10", "D2": "M12"}, "locking": {"screw": "M6x30"},
                       "dimensions": {"W": "40", "H": "55", "P": "30", "S": "4"},
                       "packSize": "20", "maxRec": {"loadN": "2500"}}),
                13,
            ),
            (
                json!({"productCode": "GGRI01", "pipeOuterDia": {"DN": "25", "Dmm": "33.7", "inch": "1"},
                       "dimensions": {"P": "40", "T": "1.5"},
                       "packSize": "50", "maxRec": {"loadN": "800"}}),
                8,
            ),
            (
                json!({"productCode": "GGUB01", "size": {"mm": "33", "inch": "1", "DN": "25"},
                       "thread": {"G": "M8"}, "height": {"H": "71"}, "packSize": "50"}),
                7,
            ),
            (
                json!({"productCode": "GGSMU1", "generalized": "2\"", "size": "54-58",
                       "material": "25λ1.5", "packSize": "50", "maxRec": "700"}),
                6,
            ),
            (
                json!({"productCode": "GGSM01", "size": {"mm": "41"},
                       "dimensions": {"PxS": "30x3", "B": "40", "B1": "22", "G": "M8", "H": "17"},
                       "packSize": "100"}),
                8,
            ),
            (
                json!({"productCode": "GGRR01", "forTube": {"mm": "20", "inch": "0.5"}, "DN": "15",
                       "dimensions": {"PxS": "25x2", "W": "30", "H": "40", "C": "15", "T": "2"},
                       "S": "M8", "packSize": "50", "maxRecLoad": "400"}),
                12,
            ),
        ];

        for (value, expected) in cases {
            let layout = resolved(value);
            assert_eq!(
                layout.column_count(),
                expected,
                "column count for {:?}",
                layout.class
            );
        }
    }

    #[test]
    fn test_rows_and_header_share_column_count() {
        let records = vec![
            record(json!({"productCode": "GGIP0150", "clampingRange": {"mm": "150-160"},
                          "connectingThread": "M8", "dimensions": {"W": "200"},
                          "packSize": "25", "maxRecLoad": "1800"})),
            // second record misses most fields; cells must still line up
            record(json!({"productCode": "GGIP0160"})),
        ];
        let class = classify(&records[0]).unwrap();
        let layout = resolve_for(class, &records[0]);
        for rec in &records {
            assert_eq!(layout.row_cells(rec).len(), layout.column_count());
        }
    }

    #[test]
    fn test_clamping_scenario_row() {
        let sample = record(json!({"productCode": "GGIP0150", "clampingRange": {"mm": "150-160"},
                                    "connectingThread": "M8", "dimensions": {"W": "200"},
                                    "packSize": "25", "maxRecLoad": "1800"}));
        let layout = resolve_for(ShapeClass::ClampingRange, &sample);

        // one clamping column for the single-part range, labelled in mm
        let clamping = &layout.groups[1];
        assert_eq!(clamping.title, "Clamping Range");
        assert_eq!(clamping.columns.len(), 1);
        assert_eq!(clamping.columns[0].label, "D[mm]");

        let cells = layout.row_cells(&sample);
        assert_eq!(cells[0], "GGIP0150");
        assert_eq!(cells[1], "150-160");
        assert_eq!(cells[2], "M8");
        assert_eq!(cells.last().map(String::as_str), Some("1800"));
    }

    #[test]
    fn test_clamping_range_dialects() {
        // DN + Ømm two-part spelling
        let tri = resolved(json!({"productCode": "GGTC0100",
                                   "clampingRange": {"DN": "100", "Ømm": "108-114"},
                                   "connectingThread": "M10", "packSize": "10", "maxRecLoad": "2200"}));
        assert_eq!(tri.groups[1].columns.len(), 2);
        assert_eq!(tri.groups[1].columns[0].label, "DN");
        assert_eq!(tri.groups[1].columns[1].label, "Ø[mm]");

        // three-part spelling keeps all three columns
        let qc = resolved(json!({"productCode": "GGQC0025",
                                  "clampingRange": {"DN": "25", "mm": "32-36", "inch": "1"},
                                  "dimensions": {"PxS": "25x2", "W": "30", "H": "40", "C": "12", "T": "2", "S": "5"},
                                  "packSize": "50", "maxRecLoad": "900"}));
        let labels: Vec<_> = qc.groups[1].columns.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["DN", "D[mm]", "[inch]"]);
        // no connecting data, so that group is gone and dimensions carry S
        assert_eq!(qc.groups[2].title, "Dimensions [mm]");
        assert_eq!(qc.groups[2].columns.len(), 6);
    }

    #[test]
    fn test_connecting_column_variants() {
        let slot = resolved(json!({"productCode": "GGCP0040",
                                    "clampingRange": {"mm": "40-45"},
                                    "connectingSlotØ": "11", "packSize": "50", "maxRecLoad": "600"}));
        assert_eq!(slot.groups[2].title, "Connecting Slot Ø");
        assert!(slot.groups[2].spans_both_rows());

        let flange = record(json!({"productCode": "GGFH0050",
                                    "clampingRange": {"mm": "50-55"},
                                    "flangeHead": "G (inch): 1/2", "packSize": "25", "maxRecLoad": "800"}));
        let layout = resolve_for(ShapeClass::ClampingRange, &flange);
        assert_eq!(layout.groups[2].title, "Flange Head");
        assert_eq!(layout.groups[2].columns[0].label, "G [inch]");
        // value passes through verbatim; the unit lives in the sub-label
        assert_eq!(layout.row_cells(&flange)[2], "G (inch): 1/2");

        // misspelled marker key ships in real data and must keep working
        let typo = resolved(json!({"productCode": "GGFH0051",
                                    "clampingRange": {"mm": "50-55"},
                                    "flageHead": "1/2", "packSize": "25", "maxRecLoad": "800"}));
        assert_eq!(typo.groups[2].title, "Flange Head");
    }

    #[test]
    fn test_pipe_dia_dimension_pairs() {
        // family with a P dimension reads P then T
        let with_p = resolved(json!({"productCode": "GGRI01",
                                      "pipeOuterDia": {"DN": "25", "Dmm": "33.7", "inch": "1"},
                                      "dimensions": {"P": "40", "T": "1.5"},
                                      "packSize": "50", "maxRec": {"loadN": "800"}}));
        let dims = &with_p.groups[2];
        assert_eq!(dims.columns[0].label, "P");
        assert_eq!(dims.columns[1].label, "T");

        // family without P reads T then L
        let sample = record(json!({"productCode": "GGPUI1",
                                    "pipeOuterDia": {"DN": "25", "Dmm": "33.7", "inch": "1"},
                                    "dimensions": {"T": "13", "L": "50"},
                                    "packSize": "25", "maxRec": {"loadN": "300"}}));
        let layout = resolve_for(ShapeClass::PipeDiaSimple, &sample);
        let dims = &layout.groups[2];
        assert_eq!(dims.columns[0].label, "T");
        assert_eq!(dims.columns[1].label, "L");
        let cells = layout.row_cells(&sample);
        assert_eq!(cells[4], "13");
        assert_eq!(cells[5], "50");
    }

    #[test]
    fn test_thread_pair_labels_follow_dialect() {
        let p_style = resolved(json!({"productCode": "GGCGS1",
                                       "pipeOuterDia": {"DN": "20"},
                                       "thread": {"P1": "M10", "P2": "M12"},
                                       "locking": {"screw": "M6"},
                                       "packSize": "20", "maxRec": {"loadN": "2000"}}));
        let thread = &p_style.groups[2];
        assert_eq!(thread.columns[0].label, "P1");
        assert_eq!(thread.columns[1].label, "P2");

        let d_style = resolved(json!({"productCode": "GGCGL1",
                                       "pipeOuterDia": {"DN": "20"},
                                       "thread": {"D1": "M10", "D2": "M12"},
                                       "locking": {"screw": "M6"},
                                       "packSize": "20", "maxRec": {"loadN": "2000"}}));
        let thread = &d_style.groups[2];
        assert_eq!(thread.columns[0].label, "D1");
        assert_eq!(thread.columns[1].label, "D2");
    }

    #[test]
    fn test_for_tube_probes_dimensions_and_load() {
        // minimal tube retainer: only the PxS dimension, no load rating
        let sample = record(json!({"productCode": "GGRR01",
                                    "forTube": {"mm": "20", "inch": "0.5"},
                                    "DN": "15", "dimensions": {"PxS": "2x1"}}));
        let layout = resolve_for(ShapeClass::ForTube, &sample);
        let dims = &layout.groups[2];
        assert_eq!(dims.columns.len(), 1);
        assert_eq!(dims.columns[0].label, "P x S");
        assert!(labels(&layout).iter().all(|l| *l != "T"));
        // probed max load column is gone entirely
        assert!(!layout
            .groups
            .iter()
            .any(|g| g.title == "Max. Rec. Load [N]"));
        // 1 code + 3 tube + 1 dims + 1 S + 1 pack
        assert_eq!(layout.column_count(), 7);

        let d_dialect = resolved(json!({"productCode": "GGRR02",
                                          "forTube": {"mm": "25", "inch": "0.75"}, "DN": "20",
                                          "dimensions": {"PxS": "2x1", "D": "18", "T": "2"},
                                          "MStud": "M10", "packSize": "25", "maxRecLoad": "350"}));
        let dims = &d_dialect.groups[2];
        let dim_labels: Vec<_> = dims.columns.iter().map(|c| c.label).collect();
        assert_eq!(dim_labels, vec!["P x S", "D", "T"]);
    }

    #[test]
    fn test_size_only_keeps_shipped_dimensions() {
        let layout = resolved(json!({"productCode": "GGSM02", "size": {"mm": "41"},
                                      "dimensions": {"B": "40", "H": "17"},
                                      "packSize": "100"}));
        let dims = &layout.groups[2];
        let dim_labels: Vec<_> = dims.columns.iter().map(|c| c.label).collect();
        assert_eq!(dim_labels, vec!["B", "H"]);

        // the bore column answers to either spelling
        let with_bore = record(json!({"productCode": "GGSM03", "size": {"mm": "41"},
                                       "dimensions": {"Ø": "12"}, "packSize": "100"}));
        let layout = resolve_for(ShapeClass::SizeOnly, &with_bore);
        assert_eq!(layout.groups[2].columns[0].label, "G");
        assert_eq!(layout.row_cells(&with_bore)[2], "12");
    }

    #[test]
    fn test_slotted_bracket_t_column_reads_l() {
        let sample = record(json!({"productCode": "GGDL01", "size": {"mm": "41"},
                                    "connecting": {"thread": "M10"},
                                    "dimensions": {"PxS": "30x3", "W": "40", "H": "50", "C": "20", "L": "60", "S": "6"},
                                    "packSize": "25", "maxRec": {"loadN": "1200"}}));
        let layout = resolve_for(ShapeClass::SizeConnectingWithLength, &sample);
        let cells = layout.row_cells(&sample);
        let t_index = layout
            .columns()
            .position(|column| column.label == "T")
            .unwrap();
        assert_eq!(cells[t_index], "60");
    }

    #[test]
    fn test_empty_groups_disappear() {
        // bare size family: dimensions group has nothing to show
        let layout = resolved(json!({"productCode": "GGSM04", "size": {"mm": "41"}, "packSize": "10"}));
        assert!(layout.groups.iter().all(|g| g.title != "Dimensions [mm]"));
        assert_eq!(layout.column_count(), 3);
    }
}
