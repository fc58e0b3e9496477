//! Data models for `reactionviz`

pub mod graph;
pub mod reaction;

pub use graph::{GraphEdge, GraphNode, ReactionGraph};
pub use reaction::{Molecule, ReactionRecord};
