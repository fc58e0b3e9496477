//! Directed reaction network
//!
//! Nodes are molecules (keyed by IUPAC name) or synthetic intermediates that
//! stand for a multi-reactant reaction event. Edges run from starting
//! material towards product.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;
use std::fmt;

/// A node of the reaction network
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphNode {
    /// A real molecule
    Molecule {
        /// IUPAC name (node key)
        iupac_name: String,
        /// SMILES string shown on hover
        smiles: String,
        /// Functional-group tag the color was resolved from
        functional_group: String,
        /// Resolved display color
        color: &'static str,
    },
    /// A reaction event joining several reactants
    Intermediate {
        /// Generated key, unique per input position and reaction name
        id: String,
        /// Name of the reaction this event belongs to
        reaction_name: String,
        /// Reagents of that reaction
        reagents: String,
    },
}

impl GraphNode {
    /// Unique key of the node
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Molecule { iupac_name, .. } => iupac_name,
            Self::Intermediate { id, .. } => id,
        }
    }

    /// Display label: the molecule name, or the reaction name for intermediates
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Molecule { iupac_name, .. } => iupac_name,
            Self::Intermediate { reaction_name, .. } => reaction_name,
        }
    }

    /// Hover text
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Molecule { smiles, .. } => format!("SMILES: {smiles}"),
            Self::Intermediate {
                reaction_name,
                reagents,
                ..
            } => format!("{reaction_name} ({reagents})"),
        }
    }

    /// Node fill color
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Molecule { color, .. } => *color,
            Self::Intermediate { .. } => crate::core::palette::INTERMEDIATE_COLOR,
        }
    }

    /// Whether this node is a synthetic reaction event
    #[must_use]
    pub const fn is_intermediate(&self) -> bool {
        matches!(self, Self::Intermediate { .. })
    }
}

/// A directed edge of the reaction network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    /// Reagents shown along the edge, if any
    pub label: Option<String>,
    /// Reaction name shown on hover
    pub title: String,
}

/// Reaction network backed by a `petgraph` directed graph
///
/// Molecules and intermediates are indexed by key in separate maps, so a
/// molecule can never merge with an intermediate that happens to share its
/// key. Node and edge iteration follow insertion order.
#[derive(Debug, Clone, Default)]
pub struct ReactionGraph {
    graph: DiGraph<GraphNode, GraphEdge>,
    molecules: HashMap<String, NodeIndex>,
    intermediates: HashMap<String, NodeIndex>,
}

impl ReactionGraph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node unless its key already exists
    ///
    /// Molecules and intermediates are keyed separately. Returns the index of
    /// the node holding that key; an existing node keeps its original
    /// attributes.
    pub fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        let keys = if node.is_intermediate() {
            &mut self.intermediates
        } else {
            &mut self.molecules
        };
        if let Some(&index) = keys.get(node.id()) {
            return index;
        }
        let key = node.id().to_string();
        let index = self.graph.add_node(node);
        keys.insert(key, index);
        index
    }

    /// Index of the node with this key, molecules first
    fn index_of(&self, key: &str) -> Option<NodeIndex> {
        self.molecules
            .get(key)
            .or_else(|| self.intermediates.get(key))
            .copied()
    }

    /// Connect two nodes
    ///
    /// At most one edge exists per ordered pair; connecting the same pair
    /// again replaces the edge's label and title.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, edge: GraphEdge) {
        self.graph.update_edge(from, to, edge);
    }

    /// Look up a node by key
    ///
    /// A molecule takes precedence over an intermediate with the same key.
    #[must_use]
    pub fn node(&self, key: &str) -> Option<&GraphNode> {
        self.index_of(key).and_then(|index| self.graph.node_weight(index))
    }

    /// Whether a node with this key exists
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index_of(key).is_some()
    }

    /// The edge from `from` to `to`, if present
    #[must_use]
    pub fn edge_between(&self, from: &str, to: &str) -> Option<&GraphEdge> {
        let (a, b) = (self.index_of(from)?, self.index_of(to)?);
        self.graph
            .find_edge(a, b)
            .and_then(|edge| self.graph.edge_weight(edge))
    }

    /// Keys of the nodes reachable over one outgoing edge
    #[must_use]
    pub fn successors(&self, key: &str) -> Vec<&str> {
        self.neighbors(key, Direction::Outgoing)
    }

    /// Keys of the nodes with an edge into `key`
    #[must_use]
    pub fn predecessors(&self, key: &str) -> Vec<&str> {
        self.neighbors(key, Direction::Incoming)
    }

    fn neighbors(&self, key: &str, direction: Direction) -> Vec<&str> {
        let Some(index) = self.index_of(key) else {
            return Vec::new();
        };
        let mut keys: Vec<&str> = self
            .graph
            .neighbors_directed(index, direction)
            .map(|n| self.graph[n].id())
            .collect();
        keys.sort_unstable();
        keys
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.node_weights()
    }

    /// All edges as `(source, target, edge)` in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&GraphNode, &GraphNode, &GraphEdge)> {
        self.graph
            .edge_references()
            .map(|e| (&self.graph[e.source()], &self.graph[e.target()], e.weight()))
    }

    /// All edges as `(source, target, edge)`, with endpoints given as
    /// positions in [`nodes`](Self::nodes) order
    pub fn edge_positions(&self) -> impl Iterator<Item = (usize, usize, &GraphEdge)> {
        self.graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), e.weight()))
    }

    /// Number of nodes, intermediates included
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of synthetic intermediate nodes
    #[must_use]
    pub fn intermediate_count(&self) -> usize {
        self.nodes().filter(|n| n.is_intermediate()).count()
    }

    /// Whether the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

impl fmt::Display for ReactionGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Reaction network ({} nodes, {} edges):",
            self.node_count(),
            self.edge_count()
        )?;
        writeln!(f)?;
        for (source, target, edge) in self.edges() {
            match &edge.label {
                Some(label) => writeln!(f, "  {} → {} [{label}]", source.id(), target.id())?,
                None => writeln!(f, "  {} → {}", source.id(), target.id())?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn molecule(name: &str, smiles: &str) -> GraphNode {
        GraphNode::Molecule {
            iupac_name: name.to_string(),
            smiles: smiles.to_string(),
            functional_group: "alcohol".to_string(),
            color: "#1f77b4",
        }
    }

    fn edge(title: &str) -> GraphEdge {
        GraphEdge {
            label: Some("PCC".to_string()),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_graph_creation() {
        let graph = ReactionGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_add_node_keeps_first_attributes() {
        let mut graph = ReactionGraph::new();
        let first = graph.add_node(molecule("ethanol", "CCO"));
        let second = graph.add_node(molecule("ethanol", "OCC"));

        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.node("ethanol").unwrap().title(), "SMILES: CCO");
    }

    #[test]
    fn test_add_edge_replaces_existing_pair() {
        let mut graph = ReactionGraph::new();
        let a = graph.add_node(molecule("ethanol", "CCO"));
        let b = graph.add_node(molecule("ethanal", "CC=O"));
        graph.add_edge(a, b, edge("Oxidation"));
        graph.add_edge(a, b, edge("Swern oxidation"));

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(
            graph.edge_between("ethanol", "ethanal").unwrap().title,
            "Swern oxidation"
        );
        assert!(graph.edge_between("ethanal", "ethanol").is_none());
    }

    #[test]
    fn test_neighbors() {
        let mut graph = ReactionGraph::new();
        let a = graph.add_node(molecule("a", "C"));
        let b = graph.add_node(molecule("b", "C"));
        let c = graph.add_node(molecule("c", "C"));
        graph.add_edge(a, c, edge("x"));
        graph.add_edge(b, c, edge("y"));

        assert_eq!(graph.predecessors("c"), vec!["a", "b"]);
        assert_eq!(graph.successors("a"), vec!["c"]);
        assert!(graph.successors("missing").is_empty());
    }

    #[test]
    fn test_molecule_and_intermediate_keys_do_not_merge() {
        let mut graph = ReactionGraph::new();
        let hub = graph.add_node(GraphNode::Intermediate {
            id: "intermediate_0_Aldol".to_string(),
            reaction_name: "Aldol".to_string(),
            reagents: "NaOH".to_string(),
        });
        let lookalike = graph.add_node(molecule("intermediate_0_Aldol", "C"));
        let product = graph.add_node(molecule("butanal", "CCCC=O"));
        graph.add_edge(hub, product, edge("Aldol"));

        assert_ne!(hub, lookalike);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.intermediate_count(), 1);
        assert!(!graph.node("intermediate_0_Aldol").unwrap().is_intermediate());
        assert!(graph.successors("intermediate_0_Aldol").is_empty());

        let positions: Vec<(usize, usize)> =
            graph.edge_positions().map(|(a, b, _)| (a, b)).collect();
        assert_eq!(positions, vec![(hub.index(), product.index())]);
    }

    #[test]
    fn test_intermediate_node() {
        let node = GraphNode::Intermediate {
            id: "intermediate_0_Esterification".to_string(),
            reaction_name: "Esterification".to_string(),
            reagents: "H2SO4".to_string(),
        };
        assert!(node.is_intermediate());
        assert_eq!(node.label(), "Esterification");
        assert_eq!(node.title(), "Esterification (H2SO4)");
        assert_eq!(node.color(), crate::core::palette::INTERMEDIATE_COLOR);
    }

    #[test]
    fn test_graph_display() {
        let mut graph = ReactionGraph::new();
        let a = graph.add_node(molecule("ethanol", "CCO"));
        let b = graph.add_node(molecule("ethanal", "CC=O"));
        graph.add_edge(a, b, edge("Oxidation"));

        let display = format!("{graph}");
        assert!(display.contains("Reaction network (2 nodes, 1 edges)"));
        assert!(display.contains("ethanol → ethanal [PCC]"));
    }
}
