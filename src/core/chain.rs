use serde::{Deserialize, Serialize};

use crate::core::region::{Region, RegionType};
use crate::core::types::{ChainId, ChainType};

/// A chain with its annotated regions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    pub id: ChainId,

    #[serde(rename = "type")]
    pub kind: ChainType,

    /// One-letter amino acid sequence
    #[serde(default)]
    pub sequence: String,

    /// Number of membrane-crossing regions reported by the tool
    #[serde(default)]
    pub num_tm: u32,

    /// Regions in ascending `start` order
    #[serde(default)]
    pub regions: Vec<Region>,
}

impl Chain {
    pub fn new(id: impl Into<ChainId>, kind: ChainType, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            sequence: sequence.into(),
            num_tm: 0,
            regions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_num_tm(mut self, num_tm: u32) -> Self {
        self.num_tm = num_tm;
        self
    }

    #[must_use]
    pub fn with_regions(mut self, regions: Vec<Region>) -> Self {
        self.regions = regions;
        self
    }

    /// Residue count, the length of the chain's topology string
    #[must_use]
    pub fn residue_count(&self) -> usize {
        self.sequence.chars().count()
    }

    /// Check if any region is a loop / re-entrant region
    #[must_use]
    pub fn has_loop(&self) -> bool {
        self.regions.iter().any(|r| r.kind == RegionType::Loop)
    }

    /// Helix regions keyed by their position in the full region list
    pub fn helices(&self) -> impl Iterator<Item = (usize, &Region)> {
        self.regions
            .iter()
            .enumerate()
            .filter(|(_, r)| r.kind == RegionType::Helix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Chain {
        Chain::new("A", ChainType::Alpha, "MKTAYIAKQRQISFVKSHFSRQ").with_regions(vec![
            Region::new(0, 2, RegionType::Other('1')),
            Region::new(3, 10, RegionType::Helix),
            Region::new(11, 13, RegionType::Loop),
            Region::new(14, 20, RegionType::Helix),
        ])
    }

    #[test]
    fn test_helices_keep_list_index() {
        let indices: Vec<usize> = chain().helices().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn test_has_loop() {
        assert!(chain().has_loop());
        assert!(!Chain::new("B", ChainType::Beta, "MK").has_loop());
        assert_eq!(chain().residue_count(), 22);
    }
}
