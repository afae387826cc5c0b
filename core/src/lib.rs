//! SYZYGY: Unit-Capacity Blocking-Flow Engine for Maximum Bipartite Matching
//!
//! This crate computes maximum-cardinality matchings in bipartite graphs via
//! Dinitz' algorithm specialized to unit-capacity networks. The bipartite
//! graph is embedded in an augmented flow network (a synthetic source feeds
//! the left partition and the right partition drains into a synthetic sink),
//! and the algorithm alternates breadth-first layering with depth-first
//! blocking-flow passes until no augmenting path remains.
//!
//! # Architecture
//!
//! - [`data_structures::network`] - the node registry and the unit-capacity
//!   flow edge store, built once and mutated in place by flow updates.
//! - [`algorithm::residual`] - the per-phase residual view, derived on
//!   demand from flow state as `(edge, reversed)` index tuples.
//! - [`algorithm::level`] - breadth-first layering, including the
//!   sink-reachability verdict that terminates the phase loop.
//! - [`algorithm::blocking`] - the iterative depth-first blocking-flow
//!   finder with permanent dead-branch pruning.
//! - [`algorithm::dinitz`] - the phase driver and its execution metrics.
//! - [`algorithm::matching`] - extraction of the final matching and the
//!   vertex-disjointness self-check.
//!
//! # Example
//!
//! ```
//! use syzygy_core::{maximum_matching, FlowNetwork};
//!
//! let labels = vec!["amy".into(), "bea".into(), "carl".into(), "dan".into()];
//! let mut network = FlowNetwork::from_bipartite(labels, &[(1, 3), (2, 3), (2, 4)])?;
//!
//! let (matching, metrics) = maximum_matching(&mut network);
//! assert_eq!(matching.size(), 2);
//! assert!(matching.is_vertex_disjoint());
//! assert!(metrics.phases >= 1);
//! # Ok::<(), syzygy_core::NetworkError>(())
//! ```
//!
//! Reading the graph description, driver entry points and output formatting
//! are deliberately outside this crate; see the repository README.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod data_structures;

pub use algorithm::{
    extract_matching, maximum_matching, DinitzEngine, MatchedPair, Matching, MatchingMetrics,
    PhaseOutcome,
};
pub use data_structures::{FlowEdge, FlowNetwork, NetworkError, NodeId};
