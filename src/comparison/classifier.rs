use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::comparison::biomatrix::{self, ReconciledChains};
use crate::comparison::config::ComparisonConfig;
use crate::comparison::flags::{DifferenceFlags, DifferenceKind};
use crate::core::chain::Chain;
use crate::core::region::Region;
use crate::core::structure::{RecordSummary, StructureRecord};
use crate::core::types::{ChainId, ProteinType, TmStatus};
use crate::topology::builder::TopologyBuilder;
use crate::topology::differ::{IntervalDiffer, TopologyDiff};
use crate::topology::Topology;

/// True when `a` and `b` are at most `delta` apart (boundary included)
#[must_use]
pub fn equals_with_delta(a: usize, b: usize, delta: usize) -> bool {
    a.abs_diff(b) <= delta
}

/// Topology verdict of one chain present in both records
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainComparison {
    pub chain: ChainId,
    pub old_topology: Topology,
    pub new_topology: Topology,
    pub diff: TopologyDiff,
}

/// Everything found when comparing the old and new record of one structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub code: String,

    /// Deduplicated categories, in the order they were first hit
    pub categories: Vec<String>,

    pub flags: DifferenceFlags,

    /// One line per occurrence, for humans
    pub messages: Vec<String>,

    pub old_summary: RecordSummary,

    pub new_summary: RecordSummary,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chains: Vec<ChainComparison>,
}

impl ComparisonResult {
    pub fn new(
        code: impl Into<String>,
        old_summary: RecordSummary,
        new_summary: RecordSummary,
    ) -> Self {
        Self {
            code: code.into(),
            categories: Vec::new(),
            flags: DifferenceFlags::default(),
            messages: Vec::new(),
            old_summary,
            new_summary,
            chains: Vec::new(),
        }
    }

    /// Result of a structure whose records could not be compared at all
    pub fn fatal(code: impl Into<String>, error: impl std::fmt::Display) -> Self {
        let mut result = Self::new(code, RecordSummary::default(), RecordSummary::default());
        result.record(DifferenceKind::FatalErrorOccurred, error.to_string());
        result
    }

    /// No discrepancy category was hit
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn has(&self, kind: DifferenceKind) -> bool {
        self.flags.get(kind)
    }

    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Set the kind's flag, add its category once, and keep the message
    pub fn record(&mut self, kind: DifferenceKind, message: impl Into<String>) {
        self.flags.set(kind);
        if let Some(category) = kind.category() {
            if !self.has_category(category) {
                self.categories.push(category.to_string());
            }
        }
        self.messages.push(message.into());
    }
}

/// Compares the old and new annotation records of a structure
#[derive(Debug, Clone, Default)]
pub struct DifferenceClassifier {
    config: ComparisonConfig,
    builder: TopologyBuilder,
    differ: IntervalDiffer,
}

impl DifferenceClassifier {
    #[must_use]
    pub fn new(config: ComparisonConfig) -> Self {
        let builder = TopologyBuilder::new(config.topology.clone());
        let differ = IntervalDiffer::new(config.differ.clone());
        Self {
            config,
            builder,
            differ,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    /// Compare two records of the same structure
    ///
    /// Summary disagreements (transmembrane status, protein type) end the
    /// comparison; every later step runs regardless of what earlier steps found.
    #[must_use]
    pub fn compare(&self, old: &StructureRecord, new: &StructureRecord) -> ComparisonResult {
        let mut result = ComparisonResult::new(&old.code, old.summary(), new.summary());

        if old.is_transmembrane != new.is_transmembrane {
            debug!(
                "{}: TMP status differs ({} vs {})",
                old.code, old.is_transmembrane, new.is_transmembrane
            );
            result.record(
                DifferenceKind::TmpAttributes,
                format!(
                    "TMP attributes differ: old {}, new {}",
                    old.is_transmembrane, new.is_transmembrane
                ),
            );
            return result;
        }

        // Records agreeing on a non-membrane or missing status have nothing more to compare
        if old.is_transmembrane != TmStatus::Transmembrane {
            return result;
        }

        let (old_type, new_type) =
            self.normalized_protein_types(&old.protein_type, &new.protein_type);
        if old_type != new_type {
            debug!("{}: protein type differs ({old_type} vs {new_type})", old.code);
            result.record(
                DifferenceKind::ProteinType,
                format!("Protein type differs: old {old_type}, new {new_type}"),
            );
            return result;
        }

        compare_biomatrix_lists(old, new, &mut result);

        let reconciled = biomatrix::reconcile(old, new);
        compare_chain_lists(&reconciled, &mut result);

        for (id, old_chain) in &reconciled.old {
            if let Some(new_chain) = reconciled.new.get(id) {
                self.compare_chain(old_chain, new_chain, &mut result);
            }
        }

        debug!(
            "{}: {} categories, {} messages",
            old.code,
            result.categories.len(),
            result.messages.len()
        );
        result
    }

    /// Apply aliases to both types; a wildcard new type takes the old value
    fn normalized_protein_types(
        &self,
        old: &ProteinType,
        new: &ProteinType,
    ) -> (ProteinType, ProteinType) {
        let alias = |t: &ProteinType| match t {
            ProteinType::Known(name) => ProteinType::Known(
                self.config
                    .protein_type_aliases
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| name.clone()),
            ),
            ProteinType::Missing => ProteinType::Missing,
        };

        let old_type = alias(old);
        let new_type = match new {
            ProteinType::Known(name) if self.config.wildcard_protein_types.contains(name) => {
                old_type.clone()
            }
            other => alias(other),
        };
        (old_type, new_type)
    }

    fn compare_chain(&self, old: &Chain, new: &Chain, result: &mut ComparisonResult) {
        let id = &old.id;

        if old.num_tm != new.num_tm {
            result.record(
                DifferenceKind::NumberOfTmRegions,
                format!(
                    "Number of TM regions differs - chain: {id} (old {}, new {})",
                    old.num_tm, new.num_tm
                ),
            );
        }

        if old.has_loop() {
            result.flags.set(DifferenceKind::OldHasLoop);
        }
        if new.has_loop() {
            result.flags.set(DifferenceKind::NewHasLoop);
        }

        self.compare_helix_boundaries(old, new, result);
        self.compare_topology(old, new, result);
    }

    /// Helices are paired by their position in the region lists; a helix with no
    /// helix at the same position on the new side is skipped
    fn compare_helix_boundaries(&self, old: &Chain, new: &Chain, result: &mut ComparisonResult) {
        let tolerance = self.config.boundary_tolerance;
        let new_helices: BTreeMap<usize, &Region> = new.helices().collect();

        for (index, old_region) in old.helices() {
            let Some(new_region) = new_helices.get(&index) else {
                continue;
            };

            if !equals_with_delta(old_region.start, new_region.start, tolerance) {
                result.flags.set(DifferenceKind::RegionStart);
                result.record(
                    DifferenceKind::RegionBoundaries,
                    format!(
                        "Region start in chain \"{}\" [old: {}, new: {}] differs",
                        old.id, old_region.start, new_region.start
                    ),
                );
            }
            if !equals_with_delta(old_region.end, new_region.end, tolerance) {
                result.flags.set(DifferenceKind::RegionEnd);
                result.record(
                    DifferenceKind::RegionBoundaries,
                    format!(
                        "Region end in chain \"{}\" [old: {}, new: {}] differs",
                        old.id, old_region.end, new_region.end
                    ),
                );
            }
        }
    }

    fn compare_topology(&self, old: &Chain, new: &Chain, result: &mut ComparisonResult) {
        if old.kind != new.kind {
            result.record(
                DifferenceKind::ChainType,
                format!(
                    "Type is different for chain {}: {} vs {}",
                    old.id, old.kind, new.kind
                ),
            );
            return;
        }

        let old_topology = self.builder.build_chain(old);
        let new_topology = self.builder.build_chain(new);
        let diff = self.differ.diff(&old_topology, &new_topology);

        match diff {
            TopologyDiff::LengthMismatch { old_len, new_len } => {
                result.record(
                    DifferenceKind::TopologyLength,
                    format!(
                        "Lengths of topology strings are different in chain {}: {old_len} vs {new_len}",
                        old.id
                    ),
                );
            }
            TopologyDiff::Compared(outcome) if !outcome.acceptable => {
                result.record(
                    DifferenceKind::Topology,
                    format!(
                        "Topologies are different in chain {}: fp: {} fn: {}\n{old_topology}\n{new_topology}",
                        old.id, outcome.false_positives, outcome.false_negatives
                    ),
                );
            }
            TopologyDiff::Compared(_) => {}
        }

        debug!("chain {}: {:?}", old.id, diff);
        result.chains.push(ChainComparison {
            chain: old.id.clone(),
            old_topology,
            new_topology,
            diff,
        });
    }
}

fn compare_biomatrix_lists(
    old: &StructureRecord,
    new: &StructureRecord,
    result: &mut ComparisonResult,
) {
    let (old_deleted, new_deleted) = (&old.deleted_chains, &new.deleted_chains);
    if !old_deleted.is_empty() && new_deleted.is_empty() {
        result.record(
            DifferenceKind::OnlyOldHasDeletedChains,
            "Old record has deleted chains, but new record has none",
        );
    }
    if old_deleted.is_empty() && !new_deleted.is_empty() {
        result.record(
            DifferenceKind::OnlyNewHasDeletedChains,
            "New record has deleted chains, but old record has none",
        );
    }
    if old_deleted != new_deleted {
        result.record(
            DifferenceKind::DeletedChainLists,
            format!(
                "Deleted chain list differs: old [{}], new [{}]",
                join_ids(old_deleted),
                join_ids(new_deleted)
            ),
        );
    }

    let (old_added, new_added) = (&old.added_chains, &new.added_chains);
    if !old_added.is_empty() && new_added.is_empty() {
        result.record(
            DifferenceKind::OnlyOldHasAddedChains,
            "Old record has added chains, but new record has none",
        );
    }
    if old_added.is_empty() && !new_added.is_empty() {
        result.record(
            DifferenceKind::OnlyNewHasAddedChains,
            "New record has added chains, but old record has none",
        );
    }
    if old_added != new_added {
        result.record(
            DifferenceKind::AddedChainLists,
            format!(
                "Added chain list differs: old [{}], new [{}]",
                join_ids(old_added),
                join_ids(new_added)
            ),
        );
    }
}

fn compare_chain_lists(reconciled: &ReconciledChains, result: &mut ComparisonResult) {
    if reconciled.same_chain_ids() {
        return;
    }
    result.record(
        DifferenceKind::ChainLists,
        format!(
            "Different chain lists: only old [{}], only new [{}]",
            join_ids(&reconciled.only_old()),
            join_ids(&reconciled.only_new())
        ),
    );
}

fn join_ids<'a>(ids: impl IntoIterator<Item = &'a ChainId>) -> String {
    ids.into_iter()
        .map(ChainId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
