//! # tm-diff
//!
//! A library for checking that a new generation of the TmDet transmembrane
//! annotation tool agrees with the reference generation.
//!
//! Both generations describe the same protein structures, but their records
//! differ in schema, in how biological-assembly (biomatrix) operations add and
//! delete chains, and in small region boundary shifts that are not real
//! disagreements. `tm-diff` normalizes both records, undoes the biomatrix edits,
//! and classifies what remains into a fixed taxonomy of discrepancy categories
//! and flags.
//!
//! ## Features
//!
//! - **Topology strings**: Region lists rendered as one label per residue,
//!   with kinked helices split
//! - **Interval diff**: Matched regions cancel out, leftover runs are counted
//!   as false positives and false negatives
//! - **Biomatrix reconciliation**: Chains deleted or synthesized by assembly
//!   operations are dropped before comparing chain lists
//! - **Tolerant boundaries**: Helix start and end may shift within a tolerance
//! - **Batch reports**: Results grouped by category, plus a flags overview table
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tm_diff::parsing::record::load_record;
//! use tm_diff::DifferenceClassifier;
//!
//! let old = load_record(Path::new("old/1a0s.json"), "1a0s").unwrap();
//! let new = load_record(Path::new("new/1a0s.json.gz"), "1a0s").unwrap();
//!
//! let result = DifferenceClassifier::default().compare(&old, &new);
//! for category in &result.categories {
//!     println!("{category}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Core data types for regions, chains and structure records
//! - [`topology`]: Topology string builder and interval differ
//! - [`comparison`]: Biomatrix reconciliation and difference classification
//! - [`parsing`]: Loading of normalized record files
//! - [`report`]: Batch comparison and report aggregation
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod comparison;
pub mod core;
pub mod parsing;
pub mod report;
pub mod topology;
pub mod utils;

// Re-export commonly used types for convenience
pub use comparison::{
    ComparisonConfig, ComparisonResult, DifferenceClassifier, DifferenceFlags, DifferenceKind,
};
pub use crate::core::chain::Chain;
pub use crate::core::region::{Region, RegionType};
pub use crate::core::structure::StructureRecord;
pub use crate::core::types::*;
pub use topology::{IntervalDiffer, Topology, TopologyBuilder};
