use super::scope::ComponentId;
use serde::Serialize;
use std::fmt;

/// One end of a bond: a component of a molecule, with its visible state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BondSite {
    pub molecule: String,
    pub component: String,
    pub component_id: ComponentId,
    pub state: Option<String>,
}

impl BondSite {
    pub fn new(
        molecule: impl Into<String>,
        component: impl Into<String>,
        component_id: ComponentId,
        state: Option<String>,
    ) -> Self {
        Self {
            molecule: molecule.into(),
            component: component.into(),
            component_id,
            state,
        }
    }

    /// Two sites denote the same component when molecule, component name
    /// and id coincide; the state does not take part.
    pub fn same_component(&self, other: &BondSite) -> bool {
        self.component_id == other.component_id
            && self.molecule == other.molecule
            && self.component == other.component
    }
}

impl fmt::Display for BondSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}", self.molecule, self.component)?;
        if let Some(state) = &self.state {
            write!(f, "~{state}")?;
        }
        write!(f, "){}", self.component_id)
    }
}

/// An undirected connection between two distinct components.
#[derive(Debug, Clone, Serialize)]
pub struct Bond {
    pub first: BondSite,
    pub second: BondSite,
}

impl Bond {
    /// Returns `None` when both endpoints are the same component.
    pub fn new(first: BondSite, second: BondSite) -> Option<Self> {
        if first.same_component(&second) {
            return None;
        }
        Some(Self { first, second })
    }

    pub fn involves(&self, id: ComponentId) -> bool {
        self.first.component_id == id || self.second.component_id == id
    }
}

impl PartialEq for Bond {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl Eq for Bond {}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.first, self.second)
    }
}
