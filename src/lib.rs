//! Extraction and summary of hydrogen-bond records around a target residue
//! from molecular-visualization text reports, plus residue environment
//! composition around the same position.
//!
//! # Features
//!
//! - **Line grammar**: Recognizes hydrogen-bond lines of the form
//!   `#<model>/<chain> <RES> <num> <atom> ... #<model>/<chain> <RES> <num> <atom> ... <D..A>`
//!   anywhere inside noisy report text
//! - **Orientation**: Rewrites every kept record so the target residue sits on the
//!   center side
//! - **Deduplication**: Keeps the shortest donor–acceptor distance per
//!   `(state, center, partner)` pair with a deterministic output order
//! - **Summaries**: Per-state bond counts and minimum distances
//! - **Environment composition**: Category counts from free-text residue listings or
//!   neighbor tables, classified by a configurable scheme
//! - **Export**: CSV tables and SVG bar charts
//!
//! # Quick Start
//!
//! ```
//! use hbscan::{HBondConfig, StateInput, analyze};
//!
//! let report = "\
//! 4 H-bonds
//! #1/A ASN 312 ND2  #1/B TYR 308 O  #1/A ASN 312 HD21  2.950  2.011
//! #1/B GLY 305 N  #1/A ASN 312 OD1  #1/B GLY 305 H  3.100  2.200
//! #1/A ASN 312 ND2  #1/B TYR 308 O  #1/A ASN 312 HD22  3.050  2.150
//! #1/B LYS 10 NZ  #1/B GLU 20 OE1  #1/B LYS 10 HZ1  2.800  1.900
//! ";
//!
//! let result = analyze(&[StateInput::new("Mut", report)], &HBondConfig::default());
//!
//! // Two distinct partners of residue 312; the TYR308 pair keeps 2.950.
//! assert_eq!(result.rows.len(), 2);
//! assert_eq!(result.rows[0].partner_atom, "TYR308O");
//! assert_eq!(result.rows[0].distance, 2.95);
//! assert_eq!(result.rows[1].center_atom, "ASN312OD1");
//!
//! assert_eq!(result.summary[0].count, 2);
//! assert_eq!(result.summary[0].min_distance, 2.95);
//! ```
//!
//! # Module Organization
//!
//! - [`hbond`]: Line grammar, orientation, deduplication and summary stages
//! - [`env`]: Residue scanning, state identification and category schemes
//! - [`io`]: Report decoding, CSV tables and SVG charts
//!
//! # Data Types
//!
//! - [`Endpoint`]: One side of a captured hydrogen-bond line
//! - [`RawBond`]: Both endpoints and the donor–acceptor distance
//! - [`BondRecord`]: Canonical, target-centered record tagged with its state
//! - [`DedupKey`]: Identity of a record for deduplication
//! - [`SummaryEntry`]: Per-state count and minimum distance
//! - [`StandardResidue`]: The twenty standard amino acids
//! - [`ResidueMention`]: A `(chain, number, residue)` triple found in text

mod model;

pub mod env;
pub mod hbond;
pub mod io;

pub use model::record::{BondRecord, DedupKey, Endpoint, RawBond, SummaryEntry};
pub use model::residue::{ParseResidueError, ResidueMention, StandardResidue};

pub use hbond::{HBondConfig, HBondReport, StateInput, analyze};

pub use env::{ClassScheme, Composition, NeighborComposition};

pub use io::Error as IoError;
