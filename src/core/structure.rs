use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::core::chain::Chain;
use crate::core::types::{ChainId, ProteinType, TmStatus};

/// Chains of a structure keyed by id
pub type ChainMap = BTreeMap<ChainId, Chain>;

/// One normalized annotation record of a structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureRecord {
    /// PDB code
    pub code: String,

    pub is_transmembrane: TmStatus,

    pub protein_type: ProteinType,

    /// Alpha and beta chains only
    pub chains: ChainMap,

    /// Chains removed by biomatrix operations
    pub deleted_chains: BTreeSet<ChainId>,

    /// Chains synthesized by biomatrix operations
    pub added_chains: BTreeSet<ChainId>,
}

impl StructureRecord {
    pub fn new(code: impl Into<String>, status: TmStatus, protein_type: ProteinType) -> Self {
        Self {
            code: code.into(),
            is_transmembrane: status,
            protein_type,
            chains: ChainMap::new(),
            deleted_chains: BTreeSet::new(),
            added_chains: BTreeSet::new(),
        }
    }

    /// The record of a structure whose annotation file could not be found
    pub fn missing(code: impl Into<String>) -> Self {
        Self::new(code, TmStatus::Missing, ProteinType::Missing)
    }

    #[must_use]
    pub fn with_chain(mut self, chain: Chain) -> Self {
        self.chains.insert(chain.id.clone(), chain);
        self
    }

    #[must_use]
    pub fn with_deleted_chains<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ChainId>,
    {
        self.deleted_chains = ids.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_added_chains<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ChainId>,
    {
        self.added_chains = ids.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.is_transmembrane == TmStatus::Missing
    }

    /// Chain-level overview for reports
    #[must_use]
    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            chains: self.chains.keys().cloned().collect(),
            added_chains: self.added_chains.iter().cloned().collect(),
            deleted_chains: self.deleted_chains.iter().cloned().collect(),
        }
    }
}

/// Chain lists of a record as they were before biomatrix reconciliation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSummary {
    pub chains: Vec<ChainId>,
    pub added_chains: Vec<ChainId>,
    pub deleted_chains: Vec<ChainId>,
}
