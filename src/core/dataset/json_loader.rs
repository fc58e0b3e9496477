//! JSON loader for reaction datasets

use crate::core::models::ReactionRecord;
use crate::{debug, error, info, warn};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to read a dataset as a whole
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be read
    #[error("could not read '{path}': {source}")]
    Io {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON
    #[error("could not decode '{path}': {source}")]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
    /// The top-level JSON value is not an array of reactions
    #[error("'{path}' must contain a JSON array of reactions")]
    NotAnArray {
        /// File that was parsed
        path: PathBuf,
    },
}

/// A reaction together with its position in the input array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedReaction {
    /// Zero-based index in the input, malformed entries included
    pub position: usize,
    /// The validated record
    pub record: ReactionRecord,
}

/// Valid reactions from a dataset, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    /// Records that passed validation
    pub reactions: Vec<IndexedReaction>,
    /// Number of entries skipped as malformed
    pub malformed: usize,
}

impl Dataset {
    /// Build a dataset from records that are already known to be valid
    ///
    /// Positions are assigned in order starting at zero.
    #[must_use]
    pub fn from_records(records: Vec<ReactionRecord>) -> Self {
        Self {
            reactions: records
                .into_iter()
                .enumerate()
                .map(|(position, record)| IndexedReaction { position, record })
                .collect(),
            malformed: 0,
        }
    }

    /// Number of valid reactions
    #[must_use]
    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    /// Whether there are no valid reactions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }
}

/// Parse a dataset from a JSON string
///
/// Each array element is validated on its own; elements that miss a required
/// field, have the wrong shape, or have an empty reactant/product list are
/// logged and skipped.
///
/// # Errors
/// Returns [`DatasetError::Parse`] for invalid JSON and
/// [`DatasetError::NotAnArray`] when the top-level value is not an array.
pub fn parse_reactions(content: &str, source: &Path) -> Result<Dataset, DatasetError> {
    let value: Value = serde_json::from_str(content).map_err(|e| DatasetError::Parse {
        path: source.to_path_buf(),
        source: e,
    })?;
    let Value::Array(entries) = value else {
        return Err(DatasetError::NotAnArray {
            path: source.to_path_buf(),
        });
    };

    let mut dataset = Dataset::default();
    for (position, entry) in entries.into_iter().enumerate() {
        let name = entry
            .get("reaction_name")
            .and_then(Value::as_str)
            .unwrap_or("N/A")
            .to_string();

        let record = match serde_json::from_value::<ReactionRecord>(entry) {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping malformed reaction entry: {name} ({e})");
                dataset.malformed += 1;
                continue;
            }
        };
        if let Err(reason) = record.validate() {
            warn!("Skipping malformed reaction entry: {name} ({reason})");
            dataset.malformed += 1;
            continue;
        }

        debug!("Loaded reaction #{position}: {record}");
        dataset.reactions.push(IndexedReaction { position, record });
    }

    Ok(dataset)
}

/// Load a dataset from a JSON file
///
/// # Errors
/// Returns [`DatasetError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_reactions`].
pub fn load_reactions<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_reactions(&content, path)
}

/// Load a dataset, treating a missing or unreadable file as empty
///
/// The failure is logged; callers see an empty dataset and can exit
/// gracefully.
pub fn load_reactions_or_empty<P: AsRef<Path>>(path: P) -> Dataset {
    let path = path.as_ref();
    match load_reactions(path) {
        Ok(dataset) => {
            info!(
                "Successfully loaded {} reactions from {}",
                dataset.len(),
                path.display()
            );
            dataset
        }
        Err(e) => {
            error!("{e}");
            Dataset::default()
        }
    }
}
