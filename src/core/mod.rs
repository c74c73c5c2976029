//! Core data types for annotation comparison.
//!
//! This module provides the normalized record model both TmDet generations are
//! converted into before comparison:
//!
//! - [`Region`]: An annotated span of a chain (helix, strand, loop, ...)
//! - [`Chain`]: A chain with its sequence, TM count and regions
//! - [`StructureRecord`]: All chains of one structure plus biomatrix edits
//! - [`ChainId`], [`ChainType`], [`TmStatus`], [`ProteinType`]: Record metadata types
//!
//! ## Coordinates
//!
//! Region `start`/`end` are zero-based, end-inclusive sequence indices. Author
//! numbering (`auth_start`/`auth_end`) follows the PDB file and may be negative
//! or absent.
//!
//! [`Region`]: region::Region
//! [`Chain`]: chain::Chain
//! [`StructureRecord`]: structure::StructureRecord
//! [`ChainId`]: types::ChainId
//! [`ChainType`]: types::ChainType
//! [`TmStatus`]: types::TmStatus
//! [`ProteinType`]: types::ProteinType

pub mod chain;
pub mod region;
pub mod structure;
pub mod types;
