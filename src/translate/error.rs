//! Error types for model translation.
//!
//! Errors are split by how far they reach. [`Error::MalformedBlock`] means
//! the document does not have the expected shape and stops the whole
//! translation. [`Error::UnresolvedReference`] and [`Error::InvalidBond`]
//! stop only the species or rule being read; the translator records them in
//! its [`Report`](super::Report) and moves on to the next sibling.
//! [`Error::AmbiguousRate`] and [`Error::MissingRate`] are never raised, only
//! recorded as warnings.

use std::fmt;
use thiserror::Error;

/// Top-level list of the model a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    Model,
    Parameters,
    MoleculeTypes,
    Species,
    Compartments,
    ReactionRules,
    Observables,
}

impl Block {
    /// Translation order of the model lists.
    pub const ORDER: [Block; 6] = [
        Block::Parameters,
        Block::MoleculeTypes,
        Block::Species,
        Block::Compartments,
        Block::ReactionRules,
        Block::Observables,
    ];

    /// Element name of the list holding this block's items.
    pub fn list_tag(&self) -> &'static str {
        match self {
            Block::Model => "Model",
            Block::Parameters => "ListOfParameters",
            Block::MoleculeTypes => "ListOfMoleculeTypes",
            Block::Species => "ListOfSpecies",
            Block::Compartments => "ListOfCompartments",
            Block::ReactionRules => "ListOfReactionRules",
            Block::Observables => "ListOfObservables",
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Model => write!(f, "model"),
            Block::Parameters => write!(f, "parameters"),
            Block::MoleculeTypes => write!(f, "molecule types"),
            Block::Species => write!(f, "seed species"),
            Block::Compartments => write!(f, "compartments"),
            Block::ReactionRules => write!(f, "reaction rules"),
            Block::Observables => write!(f, "observables"),
        }
    }
}

/// Errors that can occur while translating a model.
#[derive(Debug, Error)]
pub enum Error {
    /// A required list or attribute is absent.
    #[error("malformed {block} block at {item}: {detail}")]
    MalformedBlock {
        /// Block being translated.
        block: Block,
        /// Label of the element that is missing something.
        item: String,
        /// What was expected.
        detail: String,
    },

    /// A bond or operation names an id that is not registered in the
    /// current species or rule.
    #[error("unresolved reference '{id}' in {block} item {item}")]
    UnresolvedReference {
        block: Block,
        /// Species id or rule name.
        item: String,
        /// The id that could not be resolved.
        id: String,
    },

    /// A bond or operation connects a component to itself.
    #[error("bond at '{site}' in {block} item {item} connects a component to itself")]
    InvalidBond {
        block: Block,
        item: String,
        site: String,
    },

    /// A rate law with more than one constant; the last one is used.
    #[error("rule {rule} declares {count} rate constants, using the last one")]
    AmbiguousRate { rule: String, count: usize },

    /// A rate law whose constant list is empty; the rule keeps an empty rate.
    #[error("rule {rule} declares no rate constants, rate left empty")]
    MissingRate { rule: String },

    /// Failed to parse a TOML translation config.
    #[error("failed to parse translation config: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    /// Creates a [`MalformedBlock`](Error::MalformedBlock) error.
    pub fn malformed(block: Block, item: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedBlock {
            block,
            item: item.into(),
            detail: detail.into(),
        }
    }

    /// Creates an [`UnresolvedReference`](Error::UnresolvedReference) error.
    pub fn unresolved(block: Block, item: impl Into<String>, id: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            block,
            item: item.into(),
            id: id.into(),
        }
    }

    /// Creates an [`InvalidBond`](Error::InvalidBond) error.
    pub fn invalid_bond(block: Block, item: impl Into<String>, site: impl Into<String>) -> Self {
        Self::InvalidBond {
            block,
            item: item.into(),
            site: site.into(),
        }
    }

    /// Whether this error ends the whole translation instead of a single unit.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::MalformedBlock { .. } | Error::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_is_fatal_unit_errors_are_not() {
        assert!(Error::malformed(Block::Species, "Species \"S1\"", "missing ListofMolecules").is_fatal());
        assert!(!Error::unresolved(Block::ReactionRules, "Rule1", "RR1_RP1_M1_C9").is_fatal());
        assert!(!Error::invalid_bond(Block::Species, "S2", "S2_M1_C1").is_fatal());
        assert!(!Error::AmbiguousRate { rule: "r".into(), count: 2 }.is_fatal());
        assert!(!Error::MissingRate { rule: "r".into() }.is_fatal());
    }

    #[test]
    fn messages_name_block_and_item() {
        let err = Error::unresolved(Block::Species, "S4", "S4_M3_C1");
        assert_eq!(
            err.to_string(),
            "unresolved reference 'S4_M3_C1' in seed species item S4"
        );

        let err = Error::malformed(Block::ReactionRules, "ReactionRule \"RR1\"", "missing child ListOfReactantPatterns");
        assert_eq!(
            err.to_string(),
            "malformed reaction rules block at ReactionRule \"RR1\": missing child ListOfReactantPatterns"
        );
    }

    #[test]
    fn list_tags_follow_translation_order() {
        let tags: Vec<_> = Block::ORDER.iter().map(Block::list_tag).collect();
        assert_eq!(
            tags,
            [
                "ListOfParameters",
                "ListOfMoleculeTypes",
                "ListOfSpecies",
                "ListOfCompartments",
                "ListOfReactionRules",
                "ListOfObservables",
            ]
        );
    }
}
