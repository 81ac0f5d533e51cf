//! Value types that flow through the `hbscan` pipelines.
//!
//! - [`record`] – Raw endpoints as captured from text, canonical bond records,
//!   deduplication keys, and per-state summary entries.
//! - [`residue`] – Standard amino acid names and residue mentions found in free text.
//!
//! Everything here is immutable once constructed; the pipelines in
//! [`crate::hbond`] and [`crate::env`] turn one kind of value into the next
//! without shared mutable state.

pub mod record;
pub mod residue;
