//! Maps reaction records onto a [`ReactionGraph`]

use crate::core::dataset::Dataset;
use crate::core::models::{GraphEdge, GraphNode, Molecule, ReactionGraph, ReactionRecord};
use crate::core::palette::{color_for, group_at};
use crate::{debug, warn};
use petgraph::graph::NodeIndex;
use std::fmt;

/// Which reactions make it into the graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildMode {
    /// Every reaction; multi-reactant ones go through an intermediate node
    #[default]
    Full,
    /// Only single-reactant reactions; the rest are logged and skipped
    SingleReactant,
}

/// Counts collected while building
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Reactions that contributed nodes and edges
    pub processed: usize,
    /// Records dropped by the loader before building
    pub malformed: usize,
    /// Multi-reactant reactions skipped in [`BuildMode::SingleReactant`]
    pub skipped_multi_reactant: usize,
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} reactions processed, {} malformed, {} multi-reactant skipped",
            self.processed, self.malformed, self.skipped_multi_reactant
        )
    }
}

/// Key of the intermediate node for the reaction at `position`
#[must_use]
pub fn intermediate_id(position: usize, reaction_name: &str) -> String {
    format!("intermediate_{position}_{reaction_name}")
}

/// Incremental graph builder
///
/// Feed reactions in input order with [`GraphBuilder::add_reaction`], then
/// call [`GraphBuilder::finish`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    mode: BuildMode,
    graph: ReactionGraph,
    report: BuildReport,
}

impl GraphBuilder {
    /// Create a builder for the given mode
    #[must_use]
    pub fn new(mode: BuildMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Add one reaction found at `position` in the input
    pub fn add_reaction(&mut self, position: usize, reaction: &ReactionRecord) {
        match reaction.reactants.len() {
            0 => {
                warn!(
                    "Skipping reaction without reactants: {}",
                    reaction.reaction_name
                );
                self.report.malformed += 1;
            }
            1 => {
                self.add_direct(reaction);
                self.report.processed += 1;
            }
            _ if self.mode == BuildMode::SingleReactant => {
                warn!(
                    "Skipping multi-reactant reaction: {}",
                    reaction.reaction_name
                );
                self.report.skipped_multi_reactant += 1;
            }
            _ => {
                self.add_through_intermediate(position, reaction);
                self.report.processed += 1;
            }
        }
    }

    /// Single reactant: one edge per product, straight from the reactant
    fn add_direct(&mut self, reaction: &ReactionRecord) {
        let groups = &reaction.functional_groups;
        let reactant = self.molecule(&reaction.reactants[0], group_at(groups, 0));

        for (j, product) in reaction.products.iter().enumerate() {
            let target = self.molecule(product, group_at(groups, 1 + j));
            self.graph.add_edge(
                reactant,
                target,
                GraphEdge {
                    label: Some(reaction.reagents.clone()),
                    title: reaction.reaction_name.clone(),
                },
            );
        }
    }

    /// Several reactants: reactants → intermediate → products
    fn add_through_intermediate(&mut self, position: usize, reaction: &ReactionRecord) {
        let id = intermediate_id(position, &reaction.reaction_name);
        debug!("Creating intermediate node {id}");
        let hub = self.graph.add_node(GraphNode::Intermediate {
            id,
            reaction_name: reaction.reaction_name.clone(),
            reagents: reaction.reagents.clone(),
        });

        let groups = &reaction.functional_groups;
        for (k, reactant) in reaction.reactants.iter().enumerate() {
            let source = self.molecule(reactant, group_at(groups, k));
            self.graph.add_edge(
                source,
                hub,
                GraphEdge {
                    label: None,
                    title: reaction.reaction_name.clone(),
                },
            );
        }

        let offset = reaction.reactants.len();
        for (j, product) in reaction.products.iter().enumerate() {
            let target = self.molecule(product, group_at(groups, offset + j));
            self.graph.add_edge(
                hub,
                target,
                GraphEdge {
                    label: Some(reaction.reagents.clone()),
                    title: reaction.reaction_name.clone(),
                },
            );
        }
    }

    fn molecule(&mut self, molecule: &Molecule, group: &str) -> NodeIndex {
        self.graph.add_node(GraphNode::Molecule {
            iupac_name: molecule.iupac_name.clone(),
            smiles: molecule.smiles.clone(),
            functional_group: group.to_string(),
            color: color_for(group),
        })
    }

    /// Finish building and hand out the graph with its report
    #[must_use]
    pub fn finish(self) -> (ReactionGraph, BuildReport) {
        (self.graph, self.report)
    }
}

/// Build the reaction network for a whole dataset
#[must_use]
pub fn build_graph(dataset: &Dataset, mode: BuildMode) -> (ReactionGraph, BuildReport) {
    let mut builder = GraphBuilder::new(mode);
    builder.report.malformed = dataset.malformed;
    for entry in &dataset.reactions {
        builder.add_reaction(entry.position, &entry.record);
    }
    builder.finish()
}
