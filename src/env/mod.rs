//! Residue environment composition around the target residue.
//!
//! Two inputs are supported. Free text (any report listing residues as
//! `<chain> <RES> <number>`) is [scanned](scan_residues), labelled by the residue
//! found at the target position and [counted](compose) per category. Neighbor
//! tables, already reduced to one row per residue with a neighbor flag, are
//! [tabulated](summarize_neighbors) into per-state counts and ratios.
//!
//! Both paths classify through an injected [`ClassScheme`].

mod compose;
mod scan;
mod scheme;
mod state;
mod table;

pub use compose::{Composition, compose, count_categories};
pub use scan::scan_residues;
pub use scheme::{Category, ClassScheme, SchemeError};
pub use state::identify_state;
pub use table::{
    NeighborComposition, NeighborRow, StateComposition, parse_flag, summarize_neighbors,
};

/// File name of the per-input category counts written by the text scanner.
pub fn counts_file_name(target: i64) -> String {
    format!("env_{target}_composition_counts.csv")
}

/// File name of the grouped bar chart comparing scanned inputs.
pub fn comparison_chart_file_name(target: i64) -> String {
    format!("plot_env_composition_{target}.svg")
}

/// File name of the neighbor table summary.
pub fn table_summary_file_name(target: i64) -> String {
    format!("env_{target}_composition_summary.csv")
}

/// File name of the stacked neighbor ratio chart.
pub fn table_chart_file_name(target: i64) -> String {
    format!("env_{target}_composition_stacked.svg")
}

/// Column holding the neighbor flag in a neighbor table.
pub fn neighbor_column(target: i64) -> String {
    format!("Is{target}Neighbor")
}
