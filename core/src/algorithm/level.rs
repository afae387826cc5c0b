//! Level Builder
//!
//! Layers the residual structure by breadth-first distance from the source.
//! Layer `k` holds the residual views whose source node was expanded in BFS
//! wave `k`; a per-node visited marker, set when a node is expanded,
//! suppresses re-expansion and forbids edges into already visited nodes, so
//! no view in the result points backwards.
//!
//! The builder also answers the phase loop's continuation question: when the
//! sink was never reached, no augmenting path exists and the network already
//! carries maximum flow.
//!
//! # Complexity
//!
//! One pass over the residual views, `O(V + E)` per phase.

use log::trace;

use crate::algorithm::residual::{ResidualEdge, ResidualGraph};
use crate::data_structures::network::FlowNetwork;

/// The level graph of one phase: an ordered sequence of layers plus the
/// reachability verdict for the sink. Rebuilt every phase and discarded
/// after the blocking-flow pass that consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelGraph {
    layers: Vec<Vec<ResidualEdge>>,
    sink_reached: bool,
}

impl LevelGraph {
    /// Runs the breadth-first layering over `residual` from the source of
    /// `network`.
    pub fn build(residual: &ResidualGraph, network: &FlowNetwork) -> Self {
        let sink = network.sink();
        let mut seen = vec![false; network.node_count()];
        let mut layers: Vec<Vec<ResidualEdge>> = Vec::new();

        // Wave-synchronized BFS: `frontier` holds the nodes discovered during
        // the previous wave, duplicates included; the `seen` check on
        // expansion deduplicates them.
        let mut frontier = vec![network.source()];
        let mut level = 0;

        while !frontier.is_empty() {
            let mut next = Vec::new();

            for node in frontier {
                if seen[node] {
                    continue;
                }
                seen[node] = true;

                for &view in residual.outgoing(node) {
                    if seen[view.target()] {
                        continue;
                    }
                    // A wave that admits no view queues no nodes, so the
                    // layer index can never skip ahead of the layer list.
                    debug_assert!(layers.len() >= level);
                    if layers.len() == level {
                        layers.push(Vec::new());
                    }
                    layers[level].push(view);
                    next.push(view.target());
                }
            }

            trace!(
                "level {}: {} edge(s) admitted",
                level,
                layers.get(level).map_or(0, Vec::len),
            );
            frontier = next;
            level += 1;
        }

        Self {
            layers,
            sink_reached: seen[sink],
        }
    }

    /// Whether an augmenting path exists in the residual structure. `false`
    /// is the phase loop's terminal signal.
    #[inline]
    pub fn sink_reached(&self) -> bool {
        self.sink_reached
    }

    /// The layers in breadth-first order.
    #[inline]
    pub fn layers(&self) -> &[Vec<ResidualEdge>] {
        &self.layers
    }

    /// Number of layers, i.e. the depth the search reached.
    #[inline]
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// All level-graph views in layer order.
    pub fn edges(&self) -> impl Iterator<Item = ResidualEdge> + '_ {
        self.layers.iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::network::NodeId;

    fn network(labels: &[&str], pairs: &[(NodeId, NodeId)]) -> FlowNetwork {
        let labels = labels.iter().map(|s| s.to_string()).collect();
        FlowNetwork::from_bipartite(labels, pairs).unwrap()
    }

    fn levels_of(net: &FlowNetwork) -> LevelGraph {
        LevelGraph::build(&ResidualGraph::build(net), net)
    }

    #[test]
    fn test_single_pair_layers() {
        let net = network(&["a", "b"], &[(1, 2)]);
        let levels = levels_of(&net);

        assert!(levels.sink_reached());
        assert_eq!(levels.depth(), 3);

        // Layer 0: source -> 1, layer 1: 1 -> 2, layer 2: 2 -> sink.
        assert_eq!(levels.layers()[0].len(), 1);
        assert_eq!(levels.layers()[0][0].target(), 1);
        assert_eq!(levels.layers()[1][0].target(), 2);
        assert_eq!(levels.layers()[2][0].target(), net.sink());
    }

    #[test]
    fn test_levels_strictly_increase() {
        let net = network(&["a", "b", "c", "d"], &[(1, 3), (1, 4), (2, 3), (2, 4)]);
        let levels = levels_of(&net);

        assert!(levels.sink_reached());
        // Every view in layer k leaves a node first reached at depth k; with
        // all nodes fresh this is the partition structure itself.
        for (depth, layer) in levels.layers().iter().enumerate() {
            for view in layer {
                match depth {
                    0 => assert_eq!(view.source(), 0),
                    1 => assert!(net.is_left(view.source())),
                    2 => assert!(net.is_right(view.source())),
                    _ => panic!("unexpected layer {depth}"),
                }
            }
        }
    }

    #[test]
    fn test_no_view_enters_visited_node() {
        let net = network(&["a", "b", "c", "d"], &[(1, 3), (1, 4), (2, 3)]);
        let levels = levels_of(&net);

        // Targets of earlier layers never show up as targets again in later
        // layers (no back or cross edges into expanded nodes).
        let mut expanded = vec![false; net.node_count()];
        expanded[net.source()] = true;
        for layer in levels.layers() {
            for view in layer {
                assert!(!expanded[view.target()], "view re-enters an expanded node");
            }
            for view in layer {
                expanded[view.source()] = true;
            }
        }
    }

    #[test]
    fn test_sink_unreachable_without_cross_edges() {
        let net = network(&["a", "b"], &[]);
        let levels = levels_of(&net);

        assert!(!levels.sink_reached());
        // Only the source edge layer exists; nothing continues toward the sink.
        assert_eq!(levels.depth(), 1);
    }

    #[test]
    fn test_empty_network_has_no_layers() {
        let net = network(&[], &[]);
        let levels = levels_of(&net);

        assert!(!levels.sink_reached());
        assert_eq!(levels.depth(), 0);
    }

    #[test]
    fn test_saturated_state_changes_layering() {
        let mut net = network(&["a", "b"], &[(1, 2)]);
        // Saturate the whole single path; the residual now runs backwards
        // from nodes the source can no longer reach.
        net.saturate(0);
        net.saturate(2);
        net.saturate(1);

        let levels = levels_of(&net);
        assert!(!levels.sink_reached());
    }
}
