use serde::{Deserialize, Serialize};

/// Every kind of discrepancy a comparison can report
///
/// Each kind owns exactly one field of [`DifferenceFlags`]. Most kinds also map
/// to a report category; kinds without one are informational flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DifferenceKind {
    TmpAttributes,
    ProteinType,
    NumberOfTmRegions,
    NewHasLoop,
    OldHasLoop,
    RegionBoundaries,
    RegionStart,
    RegionEnd,
    ChainLists,
    AddedChainLists,
    DeletedChainLists,
    OnlyNewHasAddedChains,
    OnlyOldHasAddedChains,
    OnlyNewHasDeletedChains,
    OnlyOldHasDeletedChains,
    ChainType,
    TopologyLength,
    Topology,
    FatalErrorOccurred,
}

impl DifferenceKind {
    /// All kinds, in flag column order
    pub const ALL: [Self; 19] = [
        Self::TmpAttributes,
        Self::ProteinType,
        Self::NumberOfTmRegions,
        Self::NewHasLoop,
        Self::OldHasLoop,
        Self::RegionBoundaries,
        Self::RegionStart,
        Self::RegionEnd,
        Self::ChainLists,
        Self::AddedChainLists,
        Self::DeletedChainLists,
        Self::OnlyNewHasAddedChains,
        Self::OnlyOldHasAddedChains,
        Self::OnlyNewHasDeletedChains,
        Self::OnlyOldHasDeletedChains,
        Self::ChainType,
        Self::TopologyLength,
        Self::Topology,
        Self::FatalErrorOccurred,
    ];

    /// Column name of the kind's flag in tabular output
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::TmpAttributes => "tmpAttributes",
            Self::ProteinType => "proteinType",
            Self::NumberOfTmRegions => "numberOfTmRegions",
            Self::NewHasLoop => "newHasLoop",
            Self::OldHasLoop => "oldHasLoop",
            Self::RegionBoundaries => "regionBoundaries",
            Self::RegionStart => "regionStart",
            Self::RegionEnd => "regionEnd",
            Self::ChainLists => "chainLists",
            Self::AddedChainLists => "addedChainLists",
            Self::DeletedChainLists => "deletedChainLists",
            Self::OnlyNewHasAddedChains => "onlyNewHasAddedChains",
            Self::OnlyOldHasAddedChains => "onlyOldHasAddedChains",
            Self::OnlyNewHasDeletedChains => "onlyNewHasDeletedChains",
            Self::OnlyOldHasDeletedChains => "onlyOldHasDeletedChains",
            Self::ChainType => "chainType",
            Self::TopologyLength => "topologyLength",
            Self::Topology => "topology",
            Self::FatalErrorOccurred => "fatalErrorOccurred",
        }
    }

    /// Report category the kind is grouped under, if any
    #[must_use]
    pub fn category(self) -> Option<&'static str> {
        match self {
            Self::TmpAttributes => Some("TMP attributes differ"),
            Self::ProteinType => Some("Protein type differs"),
            Self::NumberOfTmRegions => Some("Number of TM regions differs"),
            Self::RegionBoundaries => Some("Region start or end in chain differs"),
            Self::ChainLists => Some("Different chain lists"),
            Self::AddedChainLists => Some("Added chain lists differ"),
            Self::DeletedChainLists => Some("Deleted chain lists differ"),
            Self::OnlyNewHasAddedChains => Some("Only new record has added chains"),
            Self::OnlyOldHasAddedChains => Some("Only old record has added chains"),
            Self::OnlyNewHasDeletedChains => Some("Only new record has deleted chains"),
            Self::OnlyOldHasDeletedChains => Some("Only old record has deleted chains"),
            Self::ChainType => Some("Chain type differs"),
            Self::TopologyLength => Some("Topology lengths differ"),
            Self::Topology => Some("Topologies differ"),
            Self::FatalErrorOccurred => Some("Fatal error during comparison"),
            Self::NewHasLoop | Self::OldHasLoop | Self::RegionStart | Self::RegionEnd => None,
        }
    }
}

impl std::fmt::Display for DifferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// One boolean per [`DifferenceKind`], all present so tabular output has a fixed
/// column set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct DifferenceFlags {
    pub tmp_attributes: bool,
    pub protein_type: bool,
    pub number_of_tm_regions: bool,
    pub new_has_loop: bool,
    pub old_has_loop: bool,
    pub region_boundaries: bool,
    pub region_start: bool,
    pub region_end: bool,
    pub chain_lists: bool,
    pub added_chain_lists: bool,
    pub deleted_chain_lists: bool,
    pub only_new_has_added_chains: bool,
    pub only_old_has_added_chains: bool,
    pub only_new_has_deleted_chains: bool,
    pub only_old_has_deleted_chains: bool,
    pub chain_type: bool,
    pub topology_length: bool,
    pub topology: bool,
    pub fatal_error_occurred: bool,
}

impl DifferenceFlags {
    pub fn set(&mut self, kind: DifferenceKind) {
        *self.slot_mut(kind) = true;
    }

    #[must_use]
    pub fn get(&self, kind: DifferenceKind) -> bool {
        match kind {
            DifferenceKind::TmpAttributes => self.tmp_attributes,
            DifferenceKind::ProteinType => self.protein_type,
            DifferenceKind::NumberOfTmRegions => self.number_of_tm_regions,
            DifferenceKind::NewHasLoop => self.new_has_loop,
            DifferenceKind::OldHasLoop => self.old_has_loop,
            DifferenceKind::RegionBoundaries => self.region_boundaries,
            DifferenceKind::RegionStart => self.region_start,
            DifferenceKind::RegionEnd => self.region_end,
            DifferenceKind::ChainLists => self.chain_lists,
            DifferenceKind::AddedChainLists => self.added_chain_lists,
            DifferenceKind::DeletedChainLists => self.deleted_chain_lists,
            DifferenceKind::OnlyNewHasAddedChains => self.only_new_has_added_chains,
            DifferenceKind::OnlyOldHasAddedChains => self.only_old_has_added_chains,
            DifferenceKind::OnlyNewHasDeletedChains => self.only_new_has_deleted_chains,
            DifferenceKind::OnlyOldHasDeletedChains => self.only_old_has_deleted_chains,
            DifferenceKind::ChainType => self.chain_type,
            DifferenceKind::TopologyLength => self.topology_length,
            DifferenceKind::Topology => self.topology,
            DifferenceKind::FatalErrorOccurred => self.fatal_error_occurred,
        }
    }

    fn slot_mut(&mut self, kind: DifferenceKind) -> &mut bool {
        match kind {
            DifferenceKind::TmpAttributes => &mut self.tmp_attributes,
            DifferenceKind::ProteinType => &mut self.protein_type,
            DifferenceKind::NumberOfTmRegions => &mut self.number_of_tm_regions,
            DifferenceKind::NewHasLoop => &mut self.new_has_loop,
            DifferenceKind::OldHasLoop => &mut self.old_has_loop,
            DifferenceKind::RegionBoundaries => &mut self.region_boundaries,
            DifferenceKind::RegionStart => &mut self.region_start,
            DifferenceKind::RegionEnd => &mut self.region_end,
            DifferenceKind::ChainLists => &mut self.chain_lists,
            DifferenceKind::AddedChainLists => &mut self.added_chain_lists,
            DifferenceKind::DeletedChainLists => &mut self.deleted_chain_lists,
            DifferenceKind::OnlyNewHasAddedChains => &mut self.only_new_has_added_chains,
            DifferenceKind::OnlyOldHasAddedChains => &mut self.only_old_has_added_chains,
            DifferenceKind::OnlyNewHasDeletedChains => &mut self.only_new_has_deleted_chains,
            DifferenceKind::OnlyOldHasDeletedChains => &mut self.only_old_has_deleted_chains,
            DifferenceKind::ChainType => &mut self.chain_type,
            DifferenceKind::TopologyLength => &mut self.topology_length,
            DifferenceKind::Topology => &mut self.topology,
            DifferenceKind::FatalErrorOccurred => &mut self.fatal_error_occurred,
        }
    }

    /// Flags that are set, in column order
    pub fn iter_set(&self) -> impl Iterator<Item = DifferenceKind> + '_ {
        DifferenceKind::ALL.into_iter().filter(|kind| self.get(*kind))
    }

    /// Column names, in the order [`DifferenceFlags::row`] emits values
    #[must_use]
    pub fn columns() -> Vec<&'static str> {
        DifferenceKind::ALL.iter().map(|kind| kind.column()).collect()
    }

    /// Flag values as 0/1, one per column
    #[must_use]
    pub fn row(&self) -> Vec<u8> {
        DifferenceKind::ALL
            .iter()
            .map(|kind| u8::from(self.get(*kind)))
            .collect()
    }
}
