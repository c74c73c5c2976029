use crate::comparison::config::TopologyConfig;
use crate::core::chain::Chain;
use crate::core::region::{Region, RegionType};
use crate::topology::{Topology, EMPTY};

/// Builds topology strings from region lists
#[derive(Debug, Clone, Default)]
pub struct TopologyBuilder {
    config: TopologyConfig,
}

impl TopologyBuilder {
    #[must_use]
    pub fn new(config: TopologyConfig) -> Self {
        Self { config }
    }

    /// Topology string of a chain, one label per residue of its sequence
    #[must_use]
    pub fn build_chain(&self, chain: &Chain) -> Topology {
        self.build(&chain.regions, chain.residue_count())
    }

    /// Paint `regions` onto an all-empty string of `length` residues
    ///
    /// Each region first clears the residue just before it, so a region that
    /// overlaps its predecessor by one residue still leaves a separator. Residues
    /// past `length` are clipped.
    #[must_use]
    pub fn build(&self, regions: &[Region], length: usize) -> Topology {
        let mut top = Topology::empty(length);

        for (i, region) in regions.iter().enumerate() {
            if !self.config.labels.contains(&region.kind) {
                continue;
            }

            if region.start > 0 {
                top.set(region.start - 1, EMPTY);
            }
            let label = region.kind.as_byte();
            for pos in region.start..=region.end.min(length.saturating_sub(1)) {
                top.set(pos, label);
            }

            if self.config.split_kinked_helices && self.is_kinked_helix(regions, i) {
                top.set(region.midpoint(), EMPTY);
            }
        }

        top
    }

    /// A helix between two author-contiguous neighbors of the same type is one
    /// kinked crossing, not a separate segment
    fn is_kinked_helix(&self, regions: &[Region], i: usize) -> bool {
        if i == 0 || i + 1 >= regions.len() {
            return false;
        }
        let (prev, this, next) = (&regions[i - 1], &regions[i], &regions[i + 1]);

        this.kind == RegionType::Helix
            && prev.kind == next.kind
            && prev.kind != self.config.kink_exempt_neighbor
            && prev.is_auth_contiguous_with(this)
            && this.is_auth_contiguous_with(next)
    }
}
