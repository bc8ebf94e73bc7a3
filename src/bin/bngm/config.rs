use std::fs;

use anyhow::{Context, Result};
use bngl_model::TranslateConfig;

use crate::cli::TranslateOptions;

pub fn build_translate_config(opts: &TranslateOptions) -> Result<TranslateConfig> {
    let mut config = match &opts.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            TranslateConfig::from_toml(&text)
                .with_context(|| format!("Invalid config file: {}", path.display()))?
        }
        None => TranslateConfig::default(),
    };

    config.strip_compartment_suffix |= opts.strip_compartments;
    config.legacy_bond_states |= opts.legacy_bond_states;
    config.allow_bare_molecules |= opts.allow_bare_molecules;

    Ok(config)
}

pub fn describe(config: &TranslateConfig) -> Vec<String> {
    let mut notes = Vec::new();
    if config.strip_compartment_suffix {
        notes.push("Compartment suffixes stripped from names".to_string());
    }
    if config.legacy_bond_states {
        notes.push("Legacy bond endpoint states".to_string());
    }
    if config.allow_bare_molecules {
        notes.push("Bare molecules accepted".to_string());
    }
    notes
}
