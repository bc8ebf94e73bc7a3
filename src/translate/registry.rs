//! Identifier registries scoped to one seed species or one reaction rule.
//!
//! Bonds and operations refer to components only through source ids such as
//! `RR1_PP1_M2_C1`. While a unit is read, every molecule and component id is
//! registered here; when the unit is done the registry is dropped, so ids of
//! one species or rule never resolve inside another.

use crate::model::bond::BondSite;
use crate::model::molecule::Component;
use crate::model::rule::ComponentData;
use crate::model::scope::{owner_id, ComponentId};
use std::collections::HashMap;

/// What a registered component exposes to a bond endpoint.
pub(crate) trait SiteComponent {
    fn site_name(&self) -> &str;
    fn site_id(&self) -> ComponentId;
    fn site_state(&self) -> Option<&str>;
}

impl SiteComponent for Component {
    fn site_name(&self) -> &str {
        &self.name
    }

    fn site_id(&self) -> ComponentId {
        self.unique_id
    }

    fn site_state(&self) -> Option<&str> {
        self.first_state()
    }
}

impl SiteComponent for ComponentData {
    fn site_name(&self) -> &str {
        &self.name
    }

    fn site_id(&self) -> ComponentId {
        self.unique_id
    }

    fn site_state(&self) -> Option<&str> {
        self.state.as_deref()
    }
}

#[derive(Debug)]
pub(crate) struct ScopeRegistry<C> {
    molecules: HashMap<String, String>,
    components: HashMap<String, C>,
}

impl<C: SiteComponent> ScopeRegistry<C> {
    pub fn new() -> Self {
        Self {
            molecules: HashMap::new(),
            components: HashMap::new(),
        }
    }

    pub fn register_molecule(&mut self, id: &str, name: &str) {
        self.molecules.insert(id.to_string(), name.to_string());
    }

    pub fn register_component(&mut self, id: &str, component: C) {
        self.components.insert(id.to_string(), component);
    }

    /// Resolves a component id to a bond endpoint. On failure returns the
    /// id that is missing: the component id itself or its owning molecule.
    pub fn resolve(&self, component_id: &str) -> Result<BondSite, String> {
        let component = self
            .components
            .get(component_id)
            .ok_or_else(|| component_id.to_string())?;

        let owner = owner_id(component_id).ok_or_else(|| component_id.to_string())?;
        let molecule = self.molecules.get(&owner).ok_or(owner)?;

        Ok(BondSite::new(
            molecule.as_str(),
            component.site_name(),
            component.site_id(),
            component.site_state().map(str::to_owned),
        ))
    }
}

/// An empty endpoint id marks a wildcard bond (`!+`), which is not modelled.
pub(crate) fn is_wildcard(site1: &str, site2: &str) -> bool {
    site1.is_empty() || site2.is_empty()
}
