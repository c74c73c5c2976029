use std::collections::BTreeSet;

use crate::core::structure::{ChainMap, StructureRecord};
use crate::core::types::ChainId;

/// Old and new chain maps after undoing biomatrix edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledChains {
    pub old: ChainMap,
    pub new: ChainMap,
}

impl ReconciledChains {
    /// Chains left only in the old map
    #[must_use]
    pub fn only_old(&self) -> Vec<ChainId> {
        self.old
            .keys()
            .filter(|id| !self.new.contains_key(*id))
            .cloned()
            .collect()
    }

    /// Chains left only in the new map
    #[must_use]
    pub fn only_new(&self) -> Vec<ChainId> {
        self.new
            .keys()
            .filter(|id| !self.old.contains_key(*id))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn same_chain_ids(&self) -> bool {
        self.old.keys().eq(self.new.keys())
    }
}

/// Copy the chains of both records and drop those touched by biomatrix operations
#[must_use]
pub fn reconcile(old: &StructureRecord, new: &StructureRecord) -> ReconciledChains {
    let mut old_chains = old.chains.clone();
    let mut new_chains = new.chains.clone();
    reconcile_in_place(
        &mut old_chains,
        &mut new_chains,
        &old.deleted_chains,
        &new.deleted_chains,
        &old.added_chains,
    );
    ReconciledChains {
        old: old_chains,
        new: new_chains,
    }
}

/// Drop chains deleted by the other record, and chains the old record synthesized
///
/// - old chains deleted in the new record go
/// - new chains deleted in the old record go
/// - old chains added by an old biomatrix operation go
pub fn reconcile_in_place(
    old_chains: &mut ChainMap,
    new_chains: &mut ChainMap,
    old_deleted: &BTreeSet<ChainId>,
    new_deleted: &BTreeSet<ChainId>,
    old_added: &BTreeSet<ChainId>,
) {
    old_chains.retain(|id, _| !new_deleted.contains(id) && !old_added.contains(id));
    new_chains.retain(|id, _| !old_deleted.contains(id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chain::Chain;
    use crate::core::types::{ChainType, ProteinType, TmStatus};

    fn record(chains: &[&str]) -> StructureRecord {
        chains.iter().fold(
            StructureRecord::new("1abc", TmStatus::Transmembrane, ProteinType::new("Tm_Alpha")),
            |record, id| record.with_chain(Chain::new(*id, ChainType::Alpha, "MKV")),
        )
    }

    fn ids(map: &ChainMap) -> Vec<&str> {
        map.keys().map(ChainId::as_str).collect()
    }

    #[test]
    fn test_chain_deleted_in_new_is_dropped_from_old() {
        let old = record(&["A", "B"]);
        let new = record(&["A"]).with_deleted_chains(["B"]);
        let reconciled = reconcile(&old, &new);
        assert_eq!(ids(&reconciled.old), vec!["A"]);
        assert_eq!(ids(&reconciled.new), vec!["A"]);
        assert!(reconciled.same_chain_ids());
    }

    #[test]
    fn test_chain_deleted_in_old_is_dropped_from_new() {
        let old = record(&["A"]).with_deleted_chains(["C"]);
        let new = record(&["A", "C"]);
        let reconciled = reconcile(&old, &new);
        assert_eq!(ids(&reconciled.new), vec!["A"]);
    }

    #[test]
    fn test_old_added_chains_are_dropped() {
        let old = record(&["A", "B", "C"]).with_added_chains(["C"]);
        let new = record(&["A", "B"]);
        let reconciled = reconcile(&old, &new);
        assert_eq!(ids(&reconciled.old), vec!["A", "B"]);
        // New additions are left alone
        let old = record(&["A"]);
        let new = record(&["A", "D"]).with_added_chains(["D"]);
        let reconciled = reconcile(&old, &new);
        assert_eq!(reconciled.only_new(), vec![ChainId::new("D")]);
        assert!(reconciled.only_old().is_empty());
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let old = record(&["A", "B", "C"])
            .with_deleted_chains(["D"])
            .with_added_chains(["C"]);
        let new = record(&["A", "D"]).with_deleted_chains(["B"]);

        let once = reconcile(&old, &new);
        let mut old_chains = once.old.clone();
        let mut new_chains = once.new.clone();
        reconcile_in_place(
            &mut old_chains,
            &mut new_chains,
            &old.deleted_chains,
            &new.deleted_chains,
            &old.added_chains,
        );
        assert_eq!(old_chains, once.old);
        assert_eq!(new_chains, once.new);
        assert_eq!(ids(&once.old), vec!["A"]);
        assert_eq!(ids(&once.new), vec!["A"]);
    }
}
