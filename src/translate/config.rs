//! Translation settings.
//!
//! The defaults reproduce what existing consumers of the model observe. Each
//! switch turns on a corrected or more lenient reading of the source.

use super::error::Error;
use serde::Deserialize;

/// Options controlling how a model document is translated.
///
/// # Examples
///
/// ```
/// use bngl_model::TranslateConfig;
///
/// let config = TranslateConfig::from_toml("strip_compartment_suffix = true").unwrap();
/// assert!(config.strip_compartment_suffix);
/// assert!(!config.legacy_bond_states);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslateConfig {
    /// Store seed-species molecule names without their `@compartment` suffix.
    ///
    /// When `false`, a molecule written `L@EC` keeps the full name `L@EC`
    /// while its compartment is still reported as `@EC`.
    pub strip_compartment_suffix: bool,

    /// Report bond endpoint states the way older consumers expect: no state
    /// on the second endpoint of a seed-species bond, and the first
    /// endpoint's state on both ends of rule bonds and operations.
    pub legacy_bond_states: bool,

    /// Accept seed-species, pattern and observable molecules that have no
    /// `ListOfComponents`, translating them as component-less molecules.
    pub allow_bare_molecules: bool,
}

impl TranslateConfig {
    /// Parses a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }
}
