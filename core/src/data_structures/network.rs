//! Unit-Capacity Flow Network for Bipartite Matching
//!
//! This module implements the augmented flow network that Dinitz' algorithm
//! operates on: the two partitions of a bipartite graph bracketed by a
//! synthetic source and sink. Every edge carries unit capacity, because a
//! node can participate in at most one matched pair.
//!
//! # Network Layout
//!
//! Node indices are assigned once at construction and never change:
//!
//! - index `0` - the source sentinel
//! - indices `1..=L` - the left partition
//! - indices `L+1..=N` - the right partition
//! - index `N+1` - the sink sentinel
//!
//! The source owns one unit edge into every left node, every right node owns
//! one unit edge into the sink, and each supplied `(u, v)` pair becomes one
//! unit edge from the left partition into the right partition.
//!
//! # Ownership Model
//!
//! The network exclusively owns both the node registry and the edge table.
//! Flow state is mutated only through [`FlowNetwork::saturate`] and
//! [`FlowNetwork::unsaturate`], which move an edge's flow by exactly one
//! unit; capacity is fixed at construction. All derived structures (residual
//! views, level graphs) reference edges by [`EdgeId`] and hold no ownership.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Node identifier: an index into the network's node registry.
pub type NodeId = usize;

/// Edge identifier: an index into the network's edge table.
pub type EdgeId = usize;

/// Edge capacity, fixed at construction time.
pub type Capacity = u32;

/// Flow currently assigned to an edge.
pub type Flow = u32;

/// Index of the source sentinel in every network.
pub const SOURCE: NodeId = 0;

/// Errors raised while assembling a network from a graph description.
///
/// The graph-source collaborator is expected to validate its input before
/// handing it over; these variants exist so that a malformed description
/// surfaces as an error instead of a silently miscomputed matching.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("node count {0} cannot be split into two equal partitions")]
    OddNodeCount(usize),

    #[error("edge endpoint {endpoint} outside node range 1..={limit}")]
    EndpointOutOfRange { endpoint: NodeId, limit: usize },

    #[error("edge ({left}, {right}) does not run from the left partition into the right partition")]
    EndpointOutsidePartition { left: NodeId, right: NodeId },
}

/// A node of the augmented network: an identity index paired with an opaque
/// display label. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    label: String,
}

impl Node {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }

    /// Display label as supplied by the graph source.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A directed unit-capacity edge with mutable flow state.
///
/// # Invariant
///
/// `0 <= flow <= capacity` at all times. Flow moves only through
/// [`FlowEdge::saturate`] / [`FlowEdge::unsaturate`], each of which shifts
/// it by exactly one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    source: NodeId,
    target: NodeId,
    capacity: Capacity,
    flow: Flow,
}

impl FlowEdge {
    /// Creates an edge with unit capacity and no flow.
    pub(crate) fn unit(source: NodeId, target: NodeId) -> Self {
        Self {
            source,
            target,
            capacity: 1,
            flow: 0,
        }
    }

    /// Origin node of the edge.
    #[inline]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Destination node of the edge.
    #[inline]
    pub fn target(&self) -> NodeId {
        self.target
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    #[inline]
    pub fn flow(&self) -> Flow {
        self.flow
    }

    /// Whether the edge carries as much flow as its capacity allows.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.flow == self.capacity
    }

    /// Remaining forward capacity.
    #[inline]
    pub fn residual_capacity(&self) -> Capacity {
        self.capacity - self.flow
    }

    pub(crate) fn saturate(&mut self) {
        debug_assert!(
            self.flow < self.capacity,
            "saturating an already saturated edge ({} -> {})",
            self.source,
            self.target,
        );
        self.flow += 1;
    }

    pub(crate) fn unsaturate(&mut self) {
        debug_assert!(
            self.flow > 0,
            "unsaturating an edge with no flow ({} -> {})",
            self.source,
            self.target,
        );
        self.flow -= 1;
    }
}

/// The augmented flow network: node registry plus flow edge store.
///
/// Built once from a bipartite graph description and then mutated in place
/// by the phase loop; residual and level structures are transient views
/// derived from the state held here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNetwork {
    /// Ordered node identities; index 0 is the source, the last index the sink.
    nodes: Vec<Node>,
    /// All directed edges, indexed by [`EdgeId`] in construction order:
    /// source edges first, then sink edges, then inter-partition edges.
    edges: Vec<FlowEdge>,
    /// Size of one partition (`L`); the total node count is `2L + 2`.
    half: usize,
}

impl FlowNetwork {
    /// Assembles the augmented network from partition node labels and
    /// inter-partition edge pairs.
    ///
    /// `labels` lists the partition nodes in index order, left half first;
    /// sentinel labels are attached internally. Each pair `(u, v)` must run
    /// from the left partition (`1..=L`) into the right partition
    /// (`L+1..=N`), matching the index scheme of the node list.
    pub fn from_bipartite(
        labels: Vec<String>,
        pairs: &[(NodeId, NodeId)],
    ) -> Result<Self, NetworkError> {
        let count = labels.len();
        if count % 2 != 0 {
            return Err(NetworkError::OddNodeCount(count));
        }
        let half = count / 2;
        let sink = count + 1;

        let mut nodes = Vec::with_capacity(count + 2);
        nodes.push(Node::new("SOURCE"));
        nodes.extend(labels.into_iter().map(Node::new));
        nodes.push(Node::new("SINK"));

        let mut edges = Vec::with_capacity(count + pairs.len());
        for left in 1..=half {
            edges.push(FlowEdge::unit(SOURCE, left));
        }
        for right in half + 1..=count {
            edges.push(FlowEdge::unit(right, sink));
        }
        for &(left, right) in pairs {
            if left == SOURCE || left > count {
                return Err(NetworkError::EndpointOutOfRange {
                    endpoint: left,
                    limit: count,
                });
            }
            if right == SOURCE || right > count {
                return Err(NetworkError::EndpointOutOfRange {
                    endpoint: right,
                    limit: count,
                });
            }
            if left > half || right <= half {
                return Err(NetworkError::EndpointOutsidePartition { left, right });
            }
            edges.push(FlowEdge::unit(left, right));
        }

        Ok(Self { nodes, edges, half })
    }

    /// Total number of nodes, sentinels included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Index of the source sentinel.
    #[inline]
    pub fn source(&self) -> NodeId {
        SOURCE
    }

    /// Index of the sink sentinel.
    #[inline]
    pub fn sink(&self) -> NodeId {
        self.nodes.len() - 1
    }

    /// Size of one partition.
    #[inline]
    pub fn partition_size(&self) -> usize {
        self.half
    }

    /// Indices of the left partition.
    pub fn left_nodes(&self) -> std::ops::Range<NodeId> {
        1..self.half + 1
    }

    /// Indices of the right partition.
    pub fn right_nodes(&self) -> std::ops::Range<NodeId> {
        self.half + 1..self.nodes.len() - 1
    }

    /// Whether `node` belongs to the left partition.
    #[inline]
    pub fn is_left(&self, node: NodeId) -> bool {
        (1..=self.half).contains(&node)
    }

    /// Whether `node` belongs to the right partition.
    #[inline]
    pub fn is_right(&self, node: NodeId) -> bool {
        node > self.half && node < self.sink()
    }

    /// Display label of `node`.
    ///
    /// Panics on an out-of-range index; callers hold ids handed out by this
    /// network, so a miss is a programming error rather than input error.
    #[inline]
    pub fn label(&self, node: NodeId) -> &str {
        self.nodes[node].label()
    }

    /// The full edge table in [`EdgeId`] order.
    #[inline]
    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &FlowEdge {
        &self.edges[id]
    }

    /// Pushes one unit of flow onto edge `id`.
    pub(crate) fn saturate(&mut self, id: EdgeId) {
        self.edges[id].saturate();
    }

    /// Withdraws one unit of flow from edge `id`.
    pub(crate) fn unsaturate(&mut self, id: EdgeId) {
        self.edges[id].unsaturate();
    }

    /// Net flow leaving the source, i.e. the size of the current matching.
    pub fn total_flow(&self) -> Flow {
        self.edges
            .iter()
            .filter(|edge| edge.source() == SOURCE)
            .map(FlowEdge::flow)
            .sum()
    }

    /// Verifies flow conservation at every non-sentinel node: the flow
    /// entering a partition node equals the flow leaving it. A blocking-flow
    /// pass commits complete paths only, so this holds after every phase.
    pub fn is_flow_conserved(&self) -> bool {
        let mut balance = vec![0i64; self.node_count()];
        for edge in &self.edges {
            balance[edge.source()] -= i64::from(edge.flow());
            balance[edge.target()] += i64::from(edge.flow());
        }
        balance[1..self.sink()].iter().all(|&b| b == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_construction_layout() {
        let net = FlowNetwork::from_bipartite(labels(&["a", "b", "c", "d"]), &[(1, 3), (2, 4)])
            .unwrap();

        assert_eq!(net.node_count(), 6);
        assert_eq!(net.source(), 0);
        assert_eq!(net.sink(), 5);
        assert_eq!(net.partition_size(), 2);
        assert_eq!(net.label(0), "SOURCE");
        assert_eq!(net.label(1), "a");
        assert_eq!(net.label(4), "d");
        assert_eq!(net.label(5), "SINK");

        // 2 source edges + 2 sink edges + 2 inter-partition edges.
        assert_eq!(net.edges().len(), 6);
        assert!(net.edges().iter().all(|e| e.capacity() == 1 && e.flow() == 0));

        let source_targets: Vec<NodeId> = net
            .edges()
            .iter()
            .filter(|e| e.source() == SOURCE)
            .map(FlowEdge::target)
            .collect();
        assert_eq!(source_targets, vec![1, 2]);

        let sink_sources: Vec<NodeId> = net
            .edges()
            .iter()
            .filter(|e| e.target() == net.sink())
            .map(FlowEdge::source)
            .collect();
        assert_eq!(sink_sources, vec![3, 4]);
    }

    #[test]
    fn test_partition_membership() {
        let net = FlowNetwork::from_bipartite(labels(&["a", "b", "c", "d"]), &[]).unwrap();

        assert_eq!(net.left_nodes().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(net.right_nodes().collect::<Vec<_>>(), vec![3, 4]);
        assert!(net.is_left(1) && net.is_left(2));
        assert!(net.is_right(3) && net.is_right(4));
        assert!(!net.is_left(0) && !net.is_right(5));
        assert!(!net.is_left(3) && !net.is_right(2));
    }

    #[test]
    fn test_empty_network() {
        let net = FlowNetwork::from_bipartite(Vec::new(), &[]).unwrap();

        assert_eq!(net.node_count(), 2);
        assert_eq!(net.sink(), 1);
        assert!(net.edges().is_empty());
        assert_eq!(net.total_flow(), 0);
        assert!(net.is_flow_conserved());
    }

    #[test]
    fn test_odd_node_count_rejected() {
        let err = FlowNetwork::from_bipartite(labels(&["a", "b", "c"]), &[]).unwrap_err();
        assert_eq!(err, NetworkError::OddNodeCount(3));
    }

    #[test]
    fn test_out_of_range_endpoint_rejected() {
        let err = FlowNetwork::from_bipartite(labels(&["a", "b"]), &[(1, 7)]).unwrap_err();
        assert_eq!(
            err,
            NetworkError::EndpointOutOfRange {
                endpoint: 7,
                limit: 2
            }
        );

        let err = FlowNetwork::from_bipartite(labels(&["a", "b"]), &[(0, 2)]).unwrap_err();
        assert_eq!(
            err,
            NetworkError::EndpointOutOfRange {
                endpoint: 0,
                limit: 2
            }
        );
    }

    #[test]
    fn test_wrong_partition_rejected() {
        // Right-to-left pair.
        let err = FlowNetwork::from_bipartite(labels(&["a", "b"]), &[(2, 1)]).unwrap_err();
        assert_eq!(err, NetworkError::EndpointOutsidePartition { left: 2, right: 1 });

        // Both endpoints on the same side.
        let err =
            FlowNetwork::from_bipartite(labels(&["a", "b", "c", "d"]), &[(1, 2)]).unwrap_err();
        assert_eq!(err, NetworkError::EndpointOutsidePartition { left: 1, right: 2 });
    }

    #[test]
    fn test_flow_transitions() {
        let mut net = FlowNetwork::from_bipartite(labels(&["a", "b"]), &[(1, 2)]).unwrap();
        let id: EdgeId = 2; // the (1, 2) inter-partition edge

        assert!(!net.edge(id).is_saturated());
        assert_eq!(net.edge(id).residual_capacity(), 1);

        net.saturate(id);
        assert!(net.edge(id).is_saturated());
        assert_eq!(net.edge(id).flow(), 1);
        assert_eq!(net.edge(id).residual_capacity(), 0);

        net.unsaturate(id);
        assert!(!net.edge(id).is_saturated());
        assert_eq!(net.edge(id).flow(), 0);
    }

    #[test]
    fn test_total_flow_counts_source_edges() {
        let mut net = FlowNetwork::from_bipartite(labels(&["a", "b"]), &[(1, 2)]).unwrap();
        assert_eq!(net.total_flow(), 0);

        // Saturate the full path source -> 1 -> 2 -> sink.
        net.saturate(0);
        net.saturate(2);
        net.saturate(1);
        assert_eq!(net.total_flow(), 1);
        assert!(net.is_flow_conserved());
    }

    #[test]
    fn test_conservation_detects_partial_paths() {
        let mut net = FlowNetwork::from_bipartite(labels(&["a", "b"]), &[(1, 2)]).unwrap();
        // Flow into node 1 with no flow out of it.
        net.saturate(0);
        assert!(!net.is_flow_conserved());
    }
}
