use serde::Serialize;

use crate::comparison::config::DifferConfig;
use crate::topology::{Topology, EMPTY, LOOP};

/// Run counts left after matching two topology strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffOutcome {
    /// Common runs that were matched and cleared
    pub matched_runs: usize,

    /// Runs left only in the new string
    pub false_positives: usize,

    /// Runs left only in the old string
    pub false_negatives: usize,

    /// Both leftover counts are within the configured limit
    pub acceptable: bool,
}

/// Result of diffing the old and new topology of one chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopologyDiff {
    /// The strings cover different residue counts; nothing was compared
    LengthMismatch { old_len: usize, new_len: usize },

    Compared(DiffOutcome),
}

impl TopologyDiff {
    #[must_use]
    pub fn is_acceptable(&self) -> bool {
        match self {
            Self::LengthMismatch { .. } => false,
            Self::Compared(outcome) => outcome.acceptable,
        }
    }
}

/// Interval-based comparison of two topology strings
#[derive(Debug, Clone, Default)]
pub struct IntervalDiffer {
    config: DifferConfig,
}

impl IntervalDiffer {
    #[must_use]
    pub fn new(config: DifferConfig) -> Self {
        Self { config }
    }

    /// Match co-located runs of `old` and `new` and count the unmatched leftovers
    ///
    /// Every common run of at least `min_matched_run` residues is a match. Unless
    /// it starts on a loop label, the match is cleared from each string together
    /// with whatever non-empty residues touch it on either side, so boundary slop
    /// around a matched feature is not counted again. Loops never count as
    /// leftovers.
    #[must_use]
    pub fn diff(&self, old: &Topology, new: &Topology) -> TopologyDiff {
        if old.len() != new.len() {
            return TopologyDiff::LengthMismatch {
                old_len: old.len(),
                new_len: new.len(),
            };
        }

        let mut old = old.clone().into_bytes();
        let mut new = new.clone().into_bytes();
        let mut matched_runs = 0;
        let mut from = 0;

        while let Some((beg, end)) = next_common_run(&old, &new, from) {
            if end - beg + 1 >= self.config.min_matched_run {
                matched_runs += 1;
                if old[beg] != LOOP {
                    clear_outward(&mut old, beg, end);
                }
                if new[beg] != LOOP {
                    clear_outward(&mut new, beg, end);
                }
            }
            from = end + 1;
        }

        let false_negatives = count_runs(&old);
        let false_positives = count_runs(&new);
        let limit = self.config.max_unmatched_runs;

        TopologyDiff::Compared(DiffOutcome {
            matched_runs,
            false_positives,
            false_negatives,
            acceptable: false_positives <= limit && false_negatives <= limit,
        })
    }
}

/// Next span starting at or after `from` where both strings are non-empty
fn next_common_run(a: &[u8], b: &[u8], from: usize) -> Option<(usize, usize)> {
    let len = a.len();
    let beg = (from..len).find(|&i| a[i] != EMPTY && b[i] != EMPTY)?;
    let mut end = beg;
    while end + 1 < len && a[end + 1] != EMPTY && b[end + 1] != EMPTY {
        end += 1;
    }
    Some((beg, end))
}

/// Clear `[beg, end]` and every contiguous non-empty residue touching it
fn clear_outward(top: &mut [u8], beg: usize, end: usize) {
    let mut i = beg;
    loop {
        if top[i] == EMPTY {
            break;
        }
        top[i] = EMPTY;
        if i == 0 {
            break;
        }
        i -= 1;
    }

    top[beg..=end].fill(EMPTY);

    let mut i = end + 1;
    while i < top.len() && top[i] != EMPTY {
        top[i] = EMPTY;
        i += 1;
    }
}

/// Number of maximal spans of residues that are neither empty nor loop
fn count_runs(top: &[u8]) -> usize {
    let is_region = |c: &u8| *c != EMPTY && *c != LOOP;
    let mut runs = 0;
    let mut inside = false;
    for c in top {
        let region = is_region(c);
        if region && !inside {
            runs += 1;
        }
        inside = region;
    }
    runs
}
