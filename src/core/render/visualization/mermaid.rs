//! Mermaid diagram generator for reaction networks
//!
//! Generates Mermaid flowchart syntax that can be embedded in Markdown files
//! and rendered by GitHub, GitLab, and other Markdown viewers.

use crate::core::models::{GraphNode, ReactionGraph};
use std::fmt::Write;

/// Generator for Mermaid diagram syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a left-to-right flowchart of the network
    ///
    /// Molecules are boxes filled with their functional-group color;
    /// intermediates are small circles labeled with the reaction name. Node
    /// ids are positional (`n0`, `n1`, ...) because IUPAC names contain
    /// characters Mermaid does not accept in ids.
    #[must_use]
    pub fn generate(graph: &ReactionGraph) -> String {
        let mut output = String::from("```mermaid\nflowchart LR\n");

        for (i, node) in graph.nodes().enumerate() {
            let label = Self::escape_label(node.label());
            match node {
                GraphNode::Molecule { .. } => {
                    let _ = writeln!(output, "    n{i}[\"{label}\"]");
                }
                GraphNode::Intermediate { .. } => {
                    let _ = writeln!(output, "    n{i}((\"{label}\"))");
                }
            }
        }

        output.push('\n');

        for (from, to, edge) in graph.edge_positions() {
            match &edge.label {
                Some(label) if !label.is_empty() => {
                    let label = Self::escape_label(label);
                    let _ = writeln!(output, "    n{from} -->|\"{label}\"| n{to}");
                }
                _ => {
                    let _ = writeln!(output, "    n{from} --> n{to}");
                }
            }
        }

        output.push('\n');

        for (i, node) in graph.nodes().enumerate() {
            let _ = writeln!(output, "    style n{i} fill:{}", node.color());
        }

        output.push_str("```\n");
        output
    }

    /// Make a string safe inside a quoted Mermaid label
    fn escape_label(label: &str) -> String {
        label
            .replace('"', "#quot;")
            .replace('<', "#lt;")
            .replace('>', "#gt;")
    }
}
