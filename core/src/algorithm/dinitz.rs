//! Dinitz' Algorithm Phase Driver
//!
//! Orchestrates the phase loop of Dinitz' algorithm specialized to
//! unit-capacity bipartite networks: derive the residual view from the
//! current flow state, layer it by breadth-first search, and, while the
//! sink remains reachable, commit a blocking flow and go again. The first
//! breadth-first pass that fails to reach the sink is the terminal signal:
//! the network carries maximum flow and the saturated inter-partition edges
//! form a maximum matching.
//!
//! # Progress Guarantees
//!
//! Every non-terminal phase commits at least one augmenting path, so total
//! flow strictly increases phase over phase, and each phase's shortest
//! augmenting path is strictly longer than the previous phase's. For
//! unit-capacity bipartite networks this bounds the phase count by
//! `O(sqrt(E))`.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::time::{Duration, Instant};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::blocking;
use crate::algorithm::level::LevelGraph;
use crate::algorithm::matching::{extract_matching, Matching};
use crate::algorithm::residual::ResidualGraph;
use crate::data_structures::network::FlowNetwork;

/// Outcome of a single phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseOutcome {
    /// The sink was reachable; a blocking flow of `paths` augmenting paths
    /// was committed and another phase is due.
    Augmented { paths: usize },
    /// The sink was unreachable: the network carries maximum flow. Terminal.
    Maximal,
}

/// Execution metrics of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchingMetrics {
    /// Number of non-terminal phases (each committed a blocking flow).
    pub phases: usize,
    /// Total augmenting paths committed across all phases; equals the size
    /// of the final matching.
    pub augmenting_paths: usize,
    /// Wall-clock time of the terminal run in milliseconds.
    pub execution_time_ms: f64,
}

/// The two-state phase machine driving the algorithm to its terminal state.
///
/// The engine owns nothing but counters; the network value is threaded
/// through explicitly, so a caller can interleave phases with its own
/// inspection of the flow state.
#[derive(Debug, Default)]
pub struct DinitzEngine {
    phases: usize,
    augmenting_paths: usize,
    elapsed: Duration,
}

impl DinitzEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one phase against `network`: rebuild the residual view, layer
    /// it, and either commit a blocking flow or report the terminal state.
    pub fn run_phase(&mut self, network: &mut FlowNetwork) -> PhaseOutcome {
        let residual = ResidualGraph::build(network);
        let levels = LevelGraph::build(&residual, network);

        if !levels.sink_reached() {
            debug!(
                "phase {}: sink unreachable, flow of {} is maximum",
                self.phases + 1,
                network.total_flow(),
            );
            return PhaseOutcome::Maximal;
        }

        let paths = blocking::augment(&levels, network);
        debug_assert!(paths > 0, "reachable sink must yield at least one path");

        self.phases += 1;
        self.augmenting_paths += paths;
        debug!(
            "phase {}: depth {}, {} augmenting path(s), total flow {}",
            self.phases,
            levels.depth(),
            paths,
            network.total_flow(),
        );
        PhaseOutcome::Augmented { paths }
    }

    /// Drives `network` to the terminal state and extracts the maximum
    /// matching it then encodes.
    pub fn run(&mut self, network: &mut FlowNetwork) -> Matching {
        let started = Instant::now();
        while let PhaseOutcome::Augmented { .. } = self.run_phase(network) {}
        self.elapsed = started.elapsed();

        let matching = extract_matching(network);
        debug!(
            "maximal after {} phase(s): {} matched pair(s)",
            self.phases,
            matching.size(),
        );
        matching
    }

    /// Number of completed (non-terminal) phases so far.
    #[inline]
    pub fn phases(&self) -> usize {
        self.phases
    }

    /// Augmenting paths committed so far.
    #[inline]
    pub fn augmenting_paths(&self) -> usize {
        self.augmenting_paths
    }

    /// Metrics snapshot of the last completed [`DinitzEngine::run`].
    pub fn metrics(&self) -> MatchingMetrics {
        MatchingMetrics {
            phases: self.phases,
            augmenting_paths: self.augmenting_paths,
            execution_time_ms: self.elapsed.as_secs_f64() * 1e3,
        }
    }
}

/// Convenience entry point: runs a fresh engine over `network` and returns
/// the maximum matching together with the run's metrics.
pub fn maximum_matching(network: &mut FlowNetwork) -> (Matching, MatchingMetrics) {
    let mut engine = DinitzEngine::new();
    let matching = engine.run(network);
    (matching, engine.metrics())
}
