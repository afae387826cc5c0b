//! Owned storage for the augmented flow network.

pub mod network;

pub use self::network::{
    Capacity, EdgeId, Flow, FlowEdge, FlowNetwork, NetworkError, Node, NodeId, SOURCE,
};
