//! Matching Extraction and Invariant Checking
//!
//! Reads the final flow state back into a concrete matching: every
//! saturated inter-partition edge is one matched pair, reported as the two
//! nodes' display labels in edge-table order. The duplicate check validates
//! the no-node-used-twice invariant after the fact; it is a correctness
//! self-test on the driver's output, not part of the algorithm itself, and
//! reports failure as a plain `false` rather than a crash.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::data_structures::network::FlowNetwork;

/// One matched pair, identified by display labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedPair {
    pub left: String,
    pub right: String,
}

/// A set of disjoint matched pairs in deterministic (edge-table) order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matching {
    pub pairs: Vec<MatchedPair>,
}

impl Matching {
    /// Number of matched pairs.
    #[inline]
    pub fn size(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Verifies that no label appears in more than one pair on either side.
    pub fn is_vertex_disjoint(&self) -> bool {
        let mut seen = HashSet::new();
        self.pairs
            .iter()
            .all(|pair| seen.insert(pair.left.as_str()) && seen.insert(pair.right.as_str()))
    }

    /// Whether `label` participates in any pair.
    pub fn contains_label(&self, label: &str) -> bool {
        self.pairs
            .iter()
            .any(|pair| pair.left == label || pair.right == label)
    }
}

/// Collects the saturated inter-partition edges of `network` as label pairs.
pub fn extract_matching(network: &FlowNetwork) -> Matching {
    let pairs = network
        .edges()
        .iter()
        .filter(|edge| {
            edge.is_saturated()
                && network.is_left(edge.source())
                && network.is_right(edge.target())
        })
        .map(|edge| MatchedPair {
            left: network.label(edge.source()).to_owned(),
            right: network.label(edge.target()).to_owned(),
        })
        .collect();
    Matching { pairs }
}
