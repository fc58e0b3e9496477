//! Markdown renderer
//!
//! Writes a summary, a Mermaid flowchart of the network, and a molecule table.

use crate::core::models::{GraphNode, ReactionGraph};
use crate::core::render::visualization::MermaidGenerator;
use crate::core::render::{NetworkRenderer, RenderOptions};
use std::error::Error;
use std::fmt::Write;

/// Markdown renderer with an embedded Mermaid diagram
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer
    #[must_use]
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    fn molecule_table(graph: &ReactionGraph) -> String {
        let mut table = String::from("| Molecule | Functional group | SMILES |\n|---|---|---|\n");
        for node in graph.nodes() {
            if let GraphNode::Molecule {
                iupac_name,
                smiles,
                functional_group,
                ..
            } = node
            {
                let _ = writeln!(
                    table,
                    "| {} | {} | `{}` |",
                    iupac_name.replace('|', "\\|"),
                    functional_group,
                    smiles.replace('|', "\\|")
                );
            }
        }
        table
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl NetworkRenderer for MarkdownRenderer {
    fn render(&self, graph: &ReactionGraph) -> Result<String, Box<dyn Error>> {
        let intermediates = graph.intermediate_count();
        let mut output = String::new();

        writeln!(output, "# {}\n", self.options.title)?;
        writeln!(
            output,
            "**Molecules:** {} | **Multi-reactant reactions:** {} | **Edges:** {}\n",
            graph.node_count() - intermediates,
            intermediates,
            graph.edge_count()
        )?;

        writeln!(output, "## Network\n")?;
        output.push_str(&MermaidGenerator::generate(graph));
        output.push('\n');

        writeln!(output, "## Molecules\n")?;
        output.push_str(&Self::molecule_table(graph));

        Ok(output)
    }
}
