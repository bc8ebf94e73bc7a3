use super::registry::ScopeRegistry;
use super::{required_attr, required_child, resolve_pair, Block, Error, ModelBuilder, Translator};
use crate::io::Node;
use crate::model::bond::Bond;
use crate::model::molecule::{Component, Molecule};
use tracing::debug;

/// A species read in full, held back until every bond has resolved.
struct SeedSpecies {
    molecules: Vec<Molecule>,
    bonds: Vec<Bond>,
}

impl<B: ModelBuilder + ?Sized> Translator<'_, B> {
    pub(super) fn species(&mut self, list: &Node) -> Result<(), Error> {
        for species in list.children() {
            let result = self.seed_species(species).map(|seed| {
                for molecule in seed.molecules {
                    self.builder.found_molecule_in_seed_species(molecule);
                }
                for bond in seed.bonds {
                    self.builder.found_bond_in_seed_species(bond);
                }
            });
            self.isolate(result)?;
        }
        Ok(())
    }

    fn seed_species(&self, species: &Node) -> Result<SeedSpecies, Error> {
        let item = species.attribute("id").unwrap_or(species.tag());
        let mut registry = ScopeRegistry::<Component>::new();
        let mut molecules = Vec::new();

        for entry in required_child(species, "ListofMolecules", Block::Species)?.children() {
            let molecule = self.seed_molecule(entry)?;
            let id = required_attr(entry, "id", Block::Species)?;
            registry.register_molecule(id, &molecule.name);

            for (node, component) in self
                .component_list(entry, Block::Species)?
                .iter()
                .zip(&molecule.components)
            {
                let id = required_attr(node, "id", Block::Species)?;
                registry.register_component(id, component.clone());
            }
            molecules.push(molecule);
        }

        let mut bonds = Vec::new();
        if let Some(list) = species.child("ListofBonds") {
            for node in list.children() {
                let site1 = required_attr(node, "site1", Block::Species)?;
                let site2 = required_attr(node, "site2", Block::Species)?;
                let (first, mut second) = resolve_pair(&registry, site1, site2, Block::Species, item)?;
                if self.config.legacy_bond_states {
                    second.state = None;
                }
                let bond = Bond::new(first, second)
                    .ok_or_else(|| Error::invalid_bond(Block::Species, item, site1))?;
                bonds.push(bond);
            }
        }

        debug!(item, molecules = molecules.len(), bonds = bonds.len(), "seed species");
        Ok(SeedSpecies { molecules, bonds })
    }

    fn seed_molecule(&self, entry: &Node) -> Result<Molecule, Error> {
        let written = required_attr(entry, "name", Block::Species)?;
        let mut molecule = match written.find('@') {
            Some(at) => {
                let name = if self.config.strip_compartment_suffix {
                    &written[..at]
                } else {
                    written
                };
                let mut molecule = Molecule::new(name);
                molecule.set_compartment(&written[at..]);
                molecule
            }
            None => Molecule::new(written),
        };

        for node in self.component_list(entry, Block::Species)? {
            let name = required_attr(node, "name", Block::Species)?;
            let mut component = Component::new(name, self.ids.allocate());
            if let Some(state) = node.attribute("state") {
                component.add_state(state);
            }
            molecule.add_component(component);
        }
        Ok(molecule)
    }
}
