//! Structure comparison and difference classification.
//!
//! This module turns an old and a new annotation record of the same structure
//! into a verdict:
//!
//! - [`DifferenceClassifier`]: Main entry point, compares two records
//! - [`ComparisonResult`]: Categories, flags and messages found for a structure
//! - [`DifferenceKind`] / [`DifferenceFlags`]: The fixed discrepancy taxonomy
//! - [`ComparisonConfig`]: Tolerances and label rules
//!
//! ## Comparison Steps
//!
//! 1. **Summary**: Transmembrane status, then protein type; a mismatch ends the
//!    comparison
//! 2. **Biomatrix lists**: Presence and equality of deleted/added chain lists
//! 3. **Reconciliation**: Chains deleted or synthesized by biomatrix operations
//!    are dropped from the chain maps
//! 4. **Chain lists**: The remaining chain ids must be equal
//! 5. **Per chain**: TM region count, loop presence, helix boundaries within a
//!    tolerance, and the interval diff of the two topology strings
//!
//! ## Example
//!
//! ```rust
//! use tm_diff::comparison::DifferenceClassifier;
//! use tm_diff::core::chain::Chain;
//! use tm_diff::core::region::{Region, RegionType};
//! use tm_diff::core::structure::StructureRecord;
//! use tm_diff::core::types::{ChainType, ProteinType, TmStatus};
//!
//! let chain = Chain::new("A", ChainType::Alpha, "M".repeat(60))
//!     .with_num_tm(1)
//!     .with_regions(vec![Region::new(10, 30, RegionType::Helix)]);
//! let old = StructureRecord::new("1abc", TmStatus::Transmembrane, ProteinType::new("Tm_Alpha"))
//!     .with_chain(chain);
//! let new = old.clone();
//!
//! let result = DifferenceClassifier::default().compare(&old, &new);
//! assert!(result.is_clean());
//! ```

pub mod biomatrix;
pub mod classifier;
pub mod config;
pub mod flags;

pub use classifier::{equals_with_delta, ComparisonResult, DifferenceClassifier};
pub use config::ComparisonConfig;
pub use flags::{DifferenceFlags, DifferenceKind};
