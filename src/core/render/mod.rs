//! Rendering of reaction networks
//!
//! Turns a [`ReactionGraph`] into a standalone document: an interactive
//! vis-network page (HTML) or a Mermaid flowchart (Markdown). Layout is left
//! to the viewer; the HTML page runs vis-network's `forceAtlas2Based` physics
//! in the browser.

pub mod formats;
pub mod visualization;

use crate::config::RenderConfig;
use crate::core::builder::BuildMode;
use crate::core::models::ReactionGraph;
use crate::core::present;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlRenderer, MarkdownRenderer, OutputFormat};
pub use visualization::MermaidGenerator;

/// Spring length used by the single-reactant viewer
pub const SIMPLIFIED_SPRING_LENGTH: f64 = 200.0;

/// Parameters of the `forceAtlas2Based` solver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsOptions {
    /// Gravitational constant (negative repels)
    pub gravity: f64,
    /// Pull towards the center
    pub central_gravity: f64,
    /// Rest length of edges
    pub spring_length: f64,
    /// Edge stiffness
    pub spring_strength: f64,
}

impl Default for PhysicsOptions {
    fn default() -> Self {
        Self {
            gravity: -50.0,
            central_gravity: 0.01,
            spring_length: 150.0,
            spring_strength: 0.08,
        }
    }
}

/// Presentation settings shared by all renderers
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Document title
    pub title: String,
    /// Canvas height (CSS length)
    pub height: String,
    /// Canvas width (CSS length)
    pub width: String,
    /// Page background color
    pub bgcolor: String,
    /// Label color
    pub font_color: String,
    /// Layout physics
    pub physics: PhysicsOptions,
    /// Add a checkbox that hides multi-reactant pathways
    pub pathway_toggle: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Reaction Network".to_string(),
            height: "800px".to_string(),
            width: "100%".to_string(),
            bgcolor: "#f8f9fa".to_string(),
            font_color: "#343a40".to_string(),
            physics: PhysicsOptions::default(),
            pathway_toggle: false,
        }
    }
}

impl RenderOptions {
    /// Options from the `[render]` config section for the given build mode
    #[must_use]
    pub fn from_config(render: &RenderConfig, mode: BuildMode) -> Self {
        let spring_length = match mode {
            BuildMode::Full => render.spring_length,
            BuildMode::SingleReactant => render.simplified_spring_length,
        };
        let title = match mode {
            BuildMode::Full => "Reaction Network",
            BuildMode::SingleReactant => "Reaction Network (single-reactant)",
        };
        Self {
            title: title.to_string(),
            height: render.height.clone(),
            width: render.width.clone(),
            bgcolor: render.bgcolor.clone(),
            font_color: render.font_color.clone(),
            physics: PhysicsOptions {
                gravity: render.gravity,
                central_gravity: render.central_gravity,
                spring_length,
                spring_strength: render.spring_strength,
            },
            pathway_toggle: false,
        }
    }

    /// Enable or disable the pathway toggle
    #[must_use]
    pub const fn with_pathway_toggle(mut self, enabled: bool) -> Self {
        self.pathway_toggle = enabled;
        self
    }
}

/// Trait for network renderers
pub trait NetworkRenderer {
    /// Render the graph to a document string
    ///
    /// # Errors
    /// Returns an error if serialization or templating fails
    fn render(&self, graph: &ReactionGraph) -> Result<String, Box<dyn Error>>;

    /// Render the graph and write it to `output_path`
    ///
    /// # Errors
    /// Returns an error if rendering fails or the file cannot be written
    fn generate(&self, graph: &ReactionGraph, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(graph)?;
        present::write_output(output_path, &content)?;
        Ok(())
    }
}

/// Renderer for an output format
#[must_use]
pub fn renderer_for(format: OutputFormat, options: RenderOptions) -> Box<dyn NetworkRenderer> {
    match format {
        OutputFormat::Html => Box::new(HtmlRenderer::new(options)),
        OutputFormat::Markdown => Box::new(MarkdownRenderer::new(options)),
    }
}
