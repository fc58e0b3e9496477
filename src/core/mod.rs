//! Core pipeline: load reactions, build the network, render it

pub mod builder;
pub mod config;
pub mod dataset;
pub mod models;
pub mod palette;
pub mod present;
pub mod render;

/// Returns the current version of the `reaction-network` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
