use super::{required_attr, required_child, Block, Error, ModelBuilder, Translator};
use crate::io::Node;
use crate::model::observable::ObservableKind;
use tracing::debug;

const BLOCK: Block = Block::Observables;

impl<B: ModelBuilder + ?Sized> Translator<'_, B> {
    /// Observables are streamed: each element is reported as soon as it is
    /// read, depth first.
    pub(super) fn observables(&mut self, list: &Node) -> Result<(), Error> {
        for observable in list.children() {
            let id = required_attr(observable, "id", BLOCK)?;
            let name = required_attr(observable, "name", BLOCK)?;
            let kind = required_attr(observable, "type", BLOCK)?
                .parse::<ObservableKind>()
                .map_err(|e| Error::malformed(BLOCK, observable.label(), e.to_string()))?;

            let patterns = required_child(observable, "ListOfPatterns", BLOCK)?.children();
            debug!(item = id, %kind, patterns = patterns.len(), "observable");
            self.builder.found_observable(id, name, kind);

            for pattern in patterns {
                self.observable_pattern(id, pattern)?;
            }
        }
        Ok(())
    }

    fn observable_pattern(&mut self, observable: &str, pattern: &Node) -> Result<(), Error> {
        let pattern_id = required_attr(pattern, "id", BLOCK)?;
        self.builder.found_observable_pattern(observable, pattern_id);

        for molecule in required_child(pattern, "ListofMolecules", BLOCK)?.children() {
            let molecule_id = required_attr(molecule, "id", BLOCK)?;
            let molecule_name = required_attr(molecule, "name", BLOCK)?;
            self.builder
                .found_observable_pattern_molecule(observable, pattern_id, molecule_id, molecule_name);

            for component in self.component_list(molecule, BLOCK)? {
                let component_id = required_attr(component, "id", BLOCK)?;
                let component_name = required_attr(component, "name", BLOCK)?;
                self.builder.found_observable_pattern_molecule_component(
                    observable,
                    pattern_id,
                    molecule_id,
                    component_id,
                    component_name,
                );
                if let Some(state) = component.attribute("state") {
                    self.builder.found_observable_pattern_molecule_component_state(
                        observable,
                        pattern_id,
                        molecule_id,
                        component_id,
                        state,
                    );
                }
            }
        }
        Ok(())
    }
}
