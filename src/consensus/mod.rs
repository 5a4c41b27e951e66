pub mod feature;

use std::collections::BTreeMap;

use crate::mapping::LabelMapping;

pub use feature::{FeatureGroup, FeaturePair, Operation, classify_pair, split_compound};

/// Original labels from both datasets that collapse onto one consensus label.
/// Both lists are sorted alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsensusGroup {
    pub dataset1: Vec<String>,
    pub dataset2: Vec<String>,
}

impl ConsensusGroup {
    pub fn presence(&self) -> Presence {
        match (self.dataset1.is_empty(), self.dataset2.is_empty()) {
            (false, false) => Presence::Shared,
            (false, true) => Presence::Dataset1Only,
            (true, false) => Presence::Dataset2Only,
            (true, true) => Presence::Empty,
        }
    }

    pub fn row_count(&self) -> usize {
        self.dataset1.len().max(self.dataset2.len()).max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Presence {
    Shared,
    Dataset1Only,
    Dataset2Only,
    Empty,
}

impl Presence {
    pub fn is_single_dataset(self) -> bool {
        matches!(self, Presence::Dataset1Only | Presence::Dataset2Only)
    }
}

pub type ConsensusMap = BTreeMap<String, ConsensusGroup>;

/// Inverts both mappings into consensus label -> group.
pub fn build_consensus_map<A, B>(dataset1: &A, dataset2: &B) -> ConsensusMap
where
    A: LabelMapping + ?Sized,
    B: LabelMapping + ?Sized,
{
    let mut map = ConsensusMap::new();
    for (original, consensus) in dataset1.pairs() {
        map.entry(consensus.to_string())
            .or_default()
            .dataset1
            .push(original.to_string());
    }
    for (original, consensus) in dataset2.pairs() {
        map.entry(consensus.to_string())
            .or_default()
            .dataset2
            .push(original.to_string());
    }
    for group in map.values_mut() {
        group.dataset1.sort();
        group.dataset2.sort();
    }
    map
}

/// Shared labels first, then dataset-1-only, then dataset-2-only; each block alphabetical.
pub fn sort_by_presence(map: &ConsensusMap) -> Vec<String> {
    let mut labels: Vec<(Presence, &String)> = map
        .iter()
        .map(|(label, group)| (group.presence(), label))
        .filter(|(presence, _)| *presence != Presence::Empty)
        .collect();
    labels.sort();
    labels.into_iter().map(|(_, label)| label.clone()).collect()
}

/// Per consensus label `(dataset1 op, dataset2 op)`: `sum()` when several dataset-1
/// features collapse, `max()` when several dataset-2 features do.
pub fn dataset_operations<A, B>(dataset1: &A, dataset2: &B) -> BTreeMap<String, (Operation, Operation)>
where
    A: LabelMapping + ?Sized,
    B: LabelMapping + ?Sized,
{
    build_consensus_map(dataset1, dataset2)
        .into_iter()
        .map(|(label, group)| {
            let d1 = if group.dataset1.len() > 1 {
                Operation::Sum
            } else {
                Operation::None
            };
            let d2 = if group.dataset2.len() > 1 {
                Operation::Max
            } else {
                Operation::None
            };
            (label, (d1, d2))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/consensus/tests.rs"]
mod tests;
