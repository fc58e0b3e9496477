//! Reaction dataset loading

pub mod json_loader;

pub use json_loader::{
    load_reactions, load_reactions_or_empty, parse_reactions, Dataset, DatasetError,
    IndexedReaction,
};
