//! Residual View Builder
//!
//! Derives the residual adjacency structure from the network's current flow
//! state. A residual edge is not an owned object: it is a `(edge id,
//! reversed)` view tuple over exactly one entry of the flow edge table. An
//! unsaturated edge appears in its original direction, a saturated edge
//! appears reversed, representing the ability to withdraw the unit of flow
//! it carries.
//!
//! Views whose residual source would be the sink are dropped outright: the
//! sink must never originate flow, and a sink-outgoing view would let the
//! blocking-flow search loop back through an already satisfied path.
//!
//! The builder is a pure function of flow state. Rebuilding from the same
//! state yields an identical structure; every phase of the algorithm
//! discards the previous view and derives a fresh one.

use serde::{Deserialize, Serialize};

use crate::data_structures::network::{EdgeId, FlowEdge, FlowNetwork, NodeId};

/// A directional view over one flow edge.
///
/// Carries the endpoints in residual orientation plus the id of the
/// underlying edge, so that committing the view mutates the single flow
/// edge it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidualEdge {
    edge: EdgeId,
    source: NodeId,
    target: NodeId,
    reversed: bool,
}

impl ResidualEdge {
    /// Builds the view for `edge`, reversing orientation when saturated.
    pub(crate) fn over(id: EdgeId, edge: &FlowEdge) -> Self {
        let reversed = edge.is_saturated();
        let (source, target) = if reversed {
            (edge.target(), edge.source())
        } else {
            (edge.source(), edge.target())
        };
        Self {
            edge: id,
            source,
            target,
            reversed,
        }
    }

    /// Id of the underlying flow edge.
    #[inline]
    pub fn edge_id(&self) -> EdgeId {
        self.edge
    }

    /// Origin of the view in residual orientation.
    #[inline]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Destination of the view in residual orientation.
    #[inline]
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Whether this view runs against the underlying edge's direction.
    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Commits one unit of flow along this view: saturates the underlying
    /// edge when traversed forward, withdraws the unit when traversed along
    /// a reversed view.
    pub(crate) fn commit(&self, network: &mut FlowNetwork) {
        if self.reversed {
            network.unsaturate(self.edge);
        } else {
            network.saturate(self.edge);
        }
    }
}

/// Residual adjacency derived from the current flow state.
///
/// Lives for a single phase: built, consumed by the level builder, and
/// discarded once the blocking-flow pass has committed its paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidualGraph {
    adjacency: Vec<Vec<ResidualEdge>>,
}

impl ResidualGraph {
    /// Emits exactly one residual view per flow edge, indexed by residual
    /// source, skipping views that would originate at the sink.
    pub fn build(network: &FlowNetwork) -> Self {
        let sink = network.sink();
        let mut adjacency = vec![Vec::new(); network.node_count()];

        for (id, edge) in network.edges().iter().enumerate() {
            let view = ResidualEdge::over(id, edge);
            if view.source() == sink {
                continue;
            }
            adjacency[view.source()].push(view);
        }

        Self { adjacency }
    }

    /// Residual views originating at `node`.
    #[inline]
    pub fn outgoing(&self, node: NodeId) -> &[ResidualEdge] {
        &self.adjacency[node]
    }

    /// Number of nodes the adjacency was built over.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of residual views.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}
