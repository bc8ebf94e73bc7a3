use super::scope::ComponentId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct State {
    pub name: String,
}

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A named binding site on a molecule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    pub name: String,
    pub states: Vec<State>,
    pub unique_id: ComponentId,
}

impl Component {
    pub fn new(name: impl Into<String>, unique_id: ComponentId) -> Self {
        Self {
            name: name.into(),
            states: Vec::new(),
            unique_id,
        }
    }

    pub fn add_state(&mut self, state: impl Into<String>) {
        self.states.push(State::new(state));
    }

    /// The state a bond endpoint reports: only the first one is visible.
    pub fn first_state(&self) -> Option<&str> {
        self.states.first().map(|s| s.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Molecule {
    pub name: String,
    pub components: Vec<Component>,
    pub compartment: Option<String>,
}

impl Molecule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
            compartment: None,
        }
    }

    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn set_compartment(&mut self, compartment: impl Into<String>) {
        self.compartment = Some(compartment.into());
    }

    /// First component with the given name.
    pub fn component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    #[inline]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Copy of the molecule with every component id zeroed, for comparing
    /// the structure of two translations.
    pub fn structure(&self) -> Molecule {
        let mut copy = self.clone();
        for component in &mut copy.components {
            component.unique_id = ComponentId::default();
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::scope::IdAllocator;

    #[test]
    fn components_keep_insertion_order() {
        let ids = IdAllocator::new();
        let mut lig = Molecule::new("Lig");
        lig.add_component(Component::new("l", ids.allocate()));
        lig.add_component(Component::new("l", ids.allocate()));

        assert_eq!(lig.component_count(), 2);
        assert_ne!(lig.components[0].unique_id, lig.components[1].unique_id);
        assert_eq!(lig.component("l").unwrap().unique_id, lig.components[0].unique_id);
    }

    #[test]
    fn first_state_is_reported() {
        let ids = IdAllocator::new();
        let mut y = Component::new("Y", ids.allocate());
        assert_eq!(y.first_state(), None);
        y.add_state("U");
        y.add_state("P");
        assert_eq!(y.first_state(), Some("U"));
    }

    #[test]
    fn structure_ignores_ids() {
        let ids = IdAllocator::new();
        let mut a = Molecule::new("Rec");
        a.add_component(Component::new("a", ids.allocate()));
        let mut b = Molecule::new("Rec");
        b.add_component(Component::new("a", ids.allocate()));

        assert_ne!(a, b);
        assert_eq!(a.structure(), b.structure());
    }

    #[test]
    fn compartment_defaults_to_none() {
        let mut m = Molecule::new("L");
        assert!(m.compartment.is_none());
        m.set_compartment("@EC");
        assert_eq!(m.compartment.as_deref(), Some("@EC"));
    }
}
