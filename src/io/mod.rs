//! Reading reports and writing tables and charts.
//!
//! Reports are decoded as UTF-8 with undecodable bytes dropped. Tables are
//! comma-separated with CRLF record terminators; charts are standalone SVG.

mod chart;
mod error;
mod table;
mod text;

pub use chart::{render_composition_chart, render_ratio_chart};
pub use error::Error;
pub use table::{
    read_neighbor_table, write_composition, write_detail, write_neighbor_composition,
    write_summary,
};
pub use text::{read_text_file, read_text_lossy};
