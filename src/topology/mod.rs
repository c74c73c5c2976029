//! Per-residue topology strings and their comparison.
//!
//! A topology string holds one label per residue of a chain, `.` marking a
//! residue outside any annotated region:
//!
//! ```text
//! ....HHHHHHHHHHHHHHHHHHHH.....LLLLLL.....HHHHHHHHHHHHHHHHHHH....
//! ```
//!
//! - [`TopologyBuilder`]: Builds a topology string from a chain's region list
//! - [`IntervalDiffer`]: Matches co-located runs of two topology strings and
//!   counts what is left unmatched on either side

use serde::{Serialize, Serializer};
use std::str::FromStr;

pub mod builder;
pub mod differ;

pub use builder::TopologyBuilder;
pub use differ::{DiffOutcome, IntervalDiffer, TopologyDiff};

/// Label of a residue outside any region
pub const EMPTY: u8 = b'.';

/// Label of a loop / re-entrant residue
pub const LOOP: u8 = b'L';

/// A per-residue label sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topology(Vec<u8>);

impl Topology {
    /// All-empty topology of `len` residues
    #[must_use]
    pub fn empty(len: usize) -> Self {
        Self(vec![EMPTY; len])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub(crate) fn set(&mut self, pos: usize, label: u8) {
        if let Some(slot) = self.0.get_mut(pos) {
            *slot = label;
        }
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl FromStr for Topology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() {
            return Err(format!("topology string must be ASCII: '{s}'"));
        }
        Ok(Self(s.as_bytes().to_vec()))
    }
}

impl Serialize for Topology {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
