//! Library for `reactionviz`
//! Loads a JSON dataset of reactions, maps it onto a directed reaction network,
//! and renders the network as a standalone HTML or Markdown document.

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
