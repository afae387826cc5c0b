//! SYZYGY Algorithm Modules
//! Dinitz' blocking-flow algorithm decomposed along its phase structure
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod blocking;
pub mod dinitz;
pub mod level;
pub mod matching;
pub mod residual;

pub use self::dinitz::{maximum_matching, DinitzEngine, MatchingMetrics, PhaseOutcome};
pub use self::level::LevelGraph;
pub use self::matching::{extract_matching, MatchedPair, Matching};
pub use self::residual::{ResidualEdge, ResidualGraph};
