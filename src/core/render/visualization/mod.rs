//! Text-based diagram generators

pub mod mermaid;

pub use mermaid::MermaidGenerator;
