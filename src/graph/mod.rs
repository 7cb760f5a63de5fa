// src/graph/mod.rs
pub mod builder;
pub mod features;
pub mod model;
pub mod stats;
pub mod tensors;
pub mod validate;

pub use builder::{parse_edges, GraphBuilder, GraphSource};
pub use features::{FeatureSource, FeatureTable};
pub use model::{Graph, Node, NodeId};
pub use stats::GraphStats;
pub use tensors::GraphTensors;
pub use validate::{validate_tree, TreeViolation};
