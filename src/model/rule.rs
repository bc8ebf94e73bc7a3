//! Buffered data for one reaction rule.
//!
//! Unlike observables, which are streamed to the builder element by
//! element, a rule is assembled completely (reactant and product patterns,
//! rate and bond operations) and handed over as a single [`RuleData`].

use super::bond::{Bond, BondSite};
use super::scope::ComponentId;
use serde::Serialize;
use std::fmt;

/// A component inside a rule pattern. Carries at most one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentData {
    pub name: String,
    pub unique_id: ComponentId,
    pub state: Option<String>,
}

impl ComponentData {
    pub fn new(name: impl Into<String>, unique_id: ComponentId) -> Self {
        Self {
            name: name.into(),
            unique_id,
            state: None,
        }
    }

    pub fn with_state(mut self, state: Option<String>) -> Self {
        self.state = state;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternMolecule {
    pub name: String,
    pub components: Vec<ComponentData>,
}

impl PatternMolecule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    pub fn add_component(&mut self, component: ComponentData) {
        self.components.push(component);
    }
}

/// One reactant or product pattern of a rule, e.g. `Rec(a!1).Lig(l!1)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RulePatternData {
    pub molecules: Vec<PatternMolecule>,
    pub bonds: Vec<Bond>,
}

impl RulePatternData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_molecule(&mut self, molecule: PatternMolecule) {
        self.molecules.push(molecule);
    }

    pub fn add_bond(&mut self, bond: Bond) {
        self.bonds.push(bond);
    }

    pub fn molecule_names(&self) -> impl Iterator<Item = &str> {
        self.molecules.iter().map(|m| m.name.as_str())
    }
}

impl fmt::Display for RulePatternData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, molecule) in self.molecules.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}(", molecule.name)?;
            for (j, component) in molecule.components.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                f.write_str(&component.name)?;
                if let Some(state) = &component.state {
                    write!(f, "~{state}")?;
                }
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BondAction {
    Add,
    Break,
}

impl BondAction {
    /// `AddBond` adds; every other operation tag breaks.
    pub fn from_operation(tag: &str) -> Self {
        if tag == "AddBond" {
            BondAction::Add
        } else {
            BondAction::Break
        }
    }
}

impl fmt::Display for BondAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BondAction::Add => write!(f, "add"),
            BondAction::Break => write!(f, "break"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BondChange {
    pub first: BondSite,
    pub second: BondSite,
    pub action: BondAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleData {
    pub name: String,
    pub reactants: Vec<RulePatternData>,
    pub products: Vec<RulePatternData>,
    /// Rate constant exactly as written in the source; never reparsed.
    pub rate: String,
    pub bond_changes: Vec<BondChange>,
}

impl RuleData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reactants: Vec::new(),
            products: Vec::new(),
            rate: String::new(),
            bond_changes: Vec::new(),
        }
    }

    pub fn add_reactant_pattern(&mut self, pattern: RulePatternData) {
        self.reactants.push(pattern);
    }

    pub fn add_product_pattern(&mut self, pattern: RulePatternData) {
        self.products.push(pattern);
    }

    pub fn set_rate(&mut self, rate: impl Into<String>) {
        self.rate = rate.into();
    }

    pub fn add_bond_data(&mut self, first: BondSite, second: BondSite, action: BondAction) {
        self.bond_changes.push(BondChange {
            first,
            second,
            action,
        });
    }

    pub fn adds(&self) -> impl Iterator<Item = &BondChange> {
        self.bond_changes
            .iter()
            .filter(|c| c.action == BondAction::Add)
    }

    pub fn breaks(&self) -> impl Iterator<Item = &BondChange> {
        self.bond_changes
            .iter()
            .filter(|c| c.action == BondAction::Break)
    }
}

impl fmt::Display for RuleData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |patterns: &[RulePatternData]| {
            patterns
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" + ")
        };
        write!(
            f,
            "{}: {} -> {} {}",
            self.name,
            join(&self.reactants),
            join(&self.products),
            self.rate
        )
    }
}
