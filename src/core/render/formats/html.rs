//! HTML renderer
//!
//! Produces a self-contained page: nodes, edges and layout options are
//! embedded as JSON and handed to vis-network, which is loaded from a CDN and
//! runs the force-directed layout in the browser.

use crate::core::models::{GraphNode, ReactionGraph};
use crate::core::render::{NetworkRenderer, RenderOptions};
use askama::Template;
use serde::Serialize;
use serde_json::json;
use std::collections::HashSet;
use std::error::Error;

const MOLECULE_SIZE: u32 = 10;
const INTERMEDIATE_SIZE: u32 = 5;

/// Node as vis-network expects it
#[derive(Debug, Serialize)]
struct VisNode<'a> {
    id: String,
    label: &'a str,
    title: String,
    color: &'a str,
    shape: &'static str,
    size: u32,
    group: &'a str,
    intermediate: bool,
}

impl<'a> VisNode<'a> {
    fn from_node(position: usize, node: &'a GraphNode) -> Self {
        let (label, size, group) = match node {
            GraphNode::Molecule {
                iupac_name,
                functional_group,
                ..
            } => (iupac_name.as_str(), MOLECULE_SIZE, functional_group.as_str()),
            GraphNode::Intermediate { .. } => ("", INTERMEDIATE_SIZE, "intermediate"),
        };
        Self {
            id: vis_id(position),
            label,
            title: node.title(),
            color: node.color(),
            shape: "dot",
            size,
            group,
            intermediate: node.is_intermediate(),
        }
    }
}

/// Edge as vis-network expects it
#[derive(Debug, Serialize)]
struct VisEdge<'a> {
    id: String,
    from: String,
    to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
    title: &'a str,
}

#[derive(Template)]
#[template(path = "network.html")]
struct NetworkPage<'a> {
    title: &'a str,
    height: &'a str,
    width: &'a str,
    bgcolor: &'a str,
    font_color: &'a str,
    molecule_count: usize,
    intermediate_count: usize,
    edge_count: usize,
    legend: Vec<(String, &'static str)>,
    nodes_json: String,
    edges_json: String,
    options_json: String,
    pathway_toggle: bool,
}

/// vis-network id of the node at `position`
///
/// Positional, since a molecule name may equal an intermediate key.
fn vis_id(position: usize) -> String {
    format!("n{position}")
}

/// Serialize for embedding inside a `<script>` element
///
/// `</` is escaped so a molecule name cannot close the script tag.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// HTML renderer with an interactive vis-network canvas
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer
    #[must_use]
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// vis-network options object
    fn network_options(&self) -> serde_json::Value {
        let physics = &self.options.physics;
        json!({
            "nodes": { "font": { "color": self.options.font_color } },
            "edges": {
                "arrows": { "to": { "enabled": true, "scaleFactor": 0.6 } },
                "smooth": { "type": "continuous" },
                "font": { "align": "middle", "size": 11 }
            },
            "interaction": { "hover": true, "tooltipDelay": 200 },
            "physics": {
                "solver": "forceAtlas2Based",
                "forceAtlas2Based": {
                    "gravitationalConstant": physics.gravity,
                    "centralGravity": physics.central_gravity,
                    "springLength": physics.spring_length,
                    "springConstant": physics.spring_strength
                },
                "stabilization": { "iterations": 200 }
            }
        })
    }

    /// Functional groups present in the graph, in first-seen order
    fn legend(graph: &ReactionGraph) -> Vec<(String, &'static str)> {
        let mut seen: HashSet<&str> = HashSet::new();
        graph
            .nodes()
            .filter_map(|node| match node {
                GraphNode::Molecule {
                    functional_group,
                    color,
                    ..
                } => seen
                    .insert(functional_group.as_str())
                    .then(|| (functional_group.replace('-', " "), *color)),
                GraphNode::Intermediate { .. } => None,
            })
            .collect()
    }

    fn render_page(&self, graph: &ReactionGraph) -> Result<String, Box<dyn Error>> {
        let nodes: Vec<VisNode> = graph
            .nodes()
            .enumerate()
            .map(|(i, node)| VisNode::from_node(i, node))
            .collect();
        let edges: Vec<VisEdge> = graph
            .edge_positions()
            .enumerate()
            .map(|(i, (source, target, edge))| VisEdge {
                id: format!("e{i}"),
                from: vis_id(source),
                to: vis_id(target),
                label: edge.label.as_deref(),
                title: &edge.title,
            })
            .collect();

        let intermediate_count = graph.intermediate_count();
        let page = NetworkPage {
            title: &self.options.title,
            height: &self.options.height,
            width: &self.options.width,
            bgcolor: &self.options.bgcolor,
            font_color: &self.options.font_color,
            molecule_count: graph.node_count() - intermediate_count,
            intermediate_count,
            edge_count: graph.edge_count(),
            legend: Self::legend(graph),
            nodes_json: script_json(&nodes)?,
            edges_json: script_json(&edges)?,
            options_json: script_json(&self.network_options())?,
            pathway_toggle: self.options.pathway_toggle,
        };
        Ok(page.render()?)
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl NetworkRenderer for HtmlRenderer {
    fn render(&self, graph: &ReactionGraph) -> Result<String, Box<dyn Error>> {
        self.render_page(graph)
    }
}
