use super::{required_attr, Block, Error, ModelBuilder, Translator};
use crate::io::Node;
use crate::model::molecule::{Component, Molecule};
use tracing::debug;

impl<B: ModelBuilder + ?Sized> Translator<'_, B> {
    pub(super) fn molecule_types(&mut self, list: &Node) -> Result<(), Error> {
        for molecule_type in list.children() {
            let molecule = self.molecule_type(molecule_type)?;
            debug!(
                item = %molecule.name,
                components = molecule.component_count(),
                "molecule type"
            );
            self.builder.found_molecule_type(molecule);
        }
        Ok(())
    }

    fn molecule_type(&self, node: &Node) -> Result<Molecule, Error> {
        let mut molecule = Molecule::new(required_attr(node, "id", Block::MoleculeTypes)?);

        let Some(component_types) = node.child("ListOfComponentTypes") else {
            return Ok(molecule);
        };
        for component_type in component_types.children() {
            let name = required_attr(component_type, "id", Block::MoleculeTypes)?;
            let mut component = Component::new(name, self.ids.allocate());
            if let Some(states) = component_type.child("ListOfAllowedStates") {
                for state in states.children() {
                    component.add_state(required_attr(state, "id", Block::MoleculeTypes)?);
                }
            }
            molecule.add_component(component);
        }
        Ok(molecule)
    }
}
