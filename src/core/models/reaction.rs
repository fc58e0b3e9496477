//! Reaction records as they appear in the input dataset

use serde::{Deserialize, Serialize};
use std::fmt;

/// A molecule taking part in a reaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Molecule {
    /// IUPAC name, used as the node identity
    pub iupac_name: String,
    /// SMILES structure string (display only)
    pub smiles: String,
}

impl Molecule {
    /// Create a new molecule
    #[must_use]
    pub fn new(iupac_name: impl Into<String>, smiles: impl Into<String>) -> Self {
        Self {
            iupac_name: iupac_name.into(),
            smiles: smiles.into(),
        }
    }
}

/// One reaction from the dataset
///
/// `functional_groups` is positionally aligned with the molecules: the first
/// `reactants.len()` tags describe the reactants, the remainder the products.
/// All fields are required; a JSON object missing any of them does not
/// deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionRecord {
    /// Starting materials, in order
    pub reactants: Vec<Molecule>,
    /// Products, in order
    pub products: Vec<Molecule>,
    /// Reagents/conditions, shown as the edge label
    pub reagents: String,
    /// Human-readable reaction name, shown as the edge title
    pub reaction_name: String,
    /// Functional-group tags, reactants first then products
    pub functional_groups: Vec<String>,
}

impl ReactionRecord {
    /// Check invariants serde cannot express.
    ///
    /// # Errors
    /// Returns a message when the record has no reactants or no products.
    pub fn validate(&self) -> Result<(), String> {
        if self.reactants.is_empty() {
            return Err(format!("reaction '{}' has no reactants", self.reaction_name));
        }
        if self.products.is_empty() {
            return Err(format!("reaction '{}' has no products", self.reaction_name));
        }
        Ok(())
    }

    /// Whether this reaction combines more than one starting material
    #[must_use]
    pub fn is_multi_reactant(&self) -> bool {
        self.reactants.len() > 1
    }
}

impl fmt::Display for ReactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = |molecules: &[Molecule]| {
            molecules
                .iter()
                .map(|m| m.iupac_name.as_str())
                .collect::<Vec<_>>()
                .join(" + ")
        };
        write!(
            f,
            "{}: {} → {} ({})",
            self.reaction_name,
            names(&self.reactants),
            names(&self.products),
            self.reagents
        )
    }
}
