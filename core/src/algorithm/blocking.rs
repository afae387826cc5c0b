//! Blocking-Flow Finder
//!
//! Consumes one phase's level graph and commits a maximal set of
//! vertex-disjoint augmenting paths, a blocking flow, onto the network.
//!
//! The search is depth-first but deliberately iterative: an explicit stack
//! of residual views records the path under construction, and the per-node
//! adjacency is an arena-indexed list that shrinks by swap-removal. A view
//! is removed from its node's list at the moment the search descends through
//! it; a descent that dead-ends leaves the view removed (the branch is a
//! proven dead end and is never re-explored this phase), while a descent
//! that reaches the sink commits the flow change of every view on the path.
//! This single-removal discipline is what bounds the whole pass by the level
//! graph's edge count.
//!
//! Flow is committed only when a complete source-to-sink path exists, so a
//! failed search never leaves partial flow behind and no rollback is ever
//! needed.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::trace;

use crate::algorithm::level::LevelGraph;
use crate::algorithm::residual::ResidualEdge;
use crate::data_structures::network::{FlowNetwork, NodeId};

/// Commits a blocking flow for `levels` onto `network` and returns the
/// number of augmenting paths found. The count is informational; the phase
/// driver decides continuation from the next BFS, not from this value.
pub fn augment(levels: &LevelGraph, network: &mut FlowNetwork) -> usize {
    let mut adjacency: Vec<Vec<ResidualEdge>> = vec![Vec::new(); network.node_count()];
    for view in levels.edges() {
        adjacency[view.source()].push(view);
    }

    // Each source-adjacent view roots one search attempt. A root that fails
    // is abandoned for this phase with its flow untouched.
    let roots = std::mem::take(&mut adjacency[network.source()]);
    let sink = network.sink();

    let mut paths = 0;
    for root in roots {
        if search(&mut adjacency, network, root.target(), sink) {
            root.commit(network);
            paths += 1;
            trace!("augmenting path committed through node {}", root.target());
        }
    }
    paths
}

/// Depth-first search from `start` toward `sink`, restricted to the
/// level-graph adjacency.
///
/// The path stack holds the views descended through so far; the current
/// node is the target of the top view. Every descent removes the chosen
/// view from its list, so backtracking needs no bookkeeping: an exhausted
/// node simply pops the stack and the failed branch stays pruned.
fn search(
    adjacency: &mut [Vec<ResidualEdge>],
    network: &mut FlowNetwork,
    start: NodeId,
    sink: NodeId,
) -> bool {
    let mut path: Vec<ResidualEdge> = Vec::new();
    let mut node = start;

    loop {
        if node == sink {
            // Complete path: commit every view on it. The root view is
            // committed by the caller.
            for view in &path {
                view.commit(network);
            }
            return true;
        }

        if adjacency[node].is_empty() {
            // Dead end; the node is exhausted for this phase.
            match path.pop() {
                Some(view) => {
                    trace!("pruned exhausted node {}", node);
                    node = view.source();
                }
                None => return false,
            }
        } else {
            let view = adjacency[node].swap_remove(0);
            path.push(view);
            node = view.target();
        }
    }
}
