//! CLI command handlers for `reactionviz`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod render;
