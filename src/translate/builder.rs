//! The consumer side of translation.
//!
//! The translator reports each finished unit to a [`ModelBuilder`]. All
//! registries, graphs and exports are the builder's business; it only ever
//! receives what the source document contains, one call per unit, in
//! document order.

use crate::model::bond::Bond;
use crate::model::molecule::Molecule;
use crate::model::observable::ObservableKind;
use crate::model::rule::RuleData;
use serde::Serialize;

/// Receiver of translation results.
///
/// Every method has an empty default body so an implementation only
/// overrides the notifications it cares about. Calls belonging to one unit
/// (one seed species, one observable) are complete before the next unit's
/// calls begin.
#[allow(unused_variables)]
pub trait ModelBuilder {
    fn parameter_found(&mut self, id: &str, kind: &str, value: &str) {}

    /// A molecule type with all its components and allowed states attached.
    fn found_molecule_type(&mut self, molecule: Molecule) {}

    fn found_molecule_in_seed_species(&mut self, molecule: Molecule) {}

    /// A bond inside the seed species whose molecules were just reported.
    fn found_bond_in_seed_species(&mut self, bond: Bond) {}

    fn found_compartment(&mut self, id: &str, size: &str, outside: Option<&str>) {}

    /// A fully assembled reaction rule.
    fn found_rule(&mut self, rule: RuleData) {}

    fn found_observable(&mut self, id: &str, name: &str, kind: ObservableKind) {}

    fn found_observable_pattern(&mut self, observable_id: &str, pattern_id: &str) {}

    fn found_observable_pattern_molecule(
        &mut self,
        observable_id: &str,
        pattern_id: &str,
        molecule_id: &str,
        molecule_name: &str,
    ) {
    }

    fn found_observable_pattern_molecule_component(
        &mut self,
        observable_id: &str,
        pattern_id: &str,
        molecule_id: &str,
        component_id: &str,
        component_name: &str,
    ) {
    }

    fn found_observable_pattern_molecule_component_state(
        &mut self,
        observable_id: &str,
        pattern_id: &str,
        molecule_id: &str,
        component_id: &str,
        state: &str,
    ) {
    }
}

/// One builder notification, as recorded by [`EventLog`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ModelEvent {
    Parameter {
        id: String,
        kind: String,
        value: String,
    },
    MoleculeType {
        molecule: Molecule,
    },
    SeedSpeciesMolecule {
        molecule: Molecule,
    },
    SeedSpeciesBond {
        bond: Bond,
    },
    Compartment {
        id: String,
        size: String,
        outside: Option<String>,
    },
    Rule {
        rule: RuleData,
    },
    Observable {
        id: String,
        name: String,
        kind: ObservableKind,
    },
    ObservablePattern {
        observable: String,
        pattern: String,
    },
    ObservablePatternMolecule {
        observable: String,
        pattern: String,
        molecule: String,
        name: String,
    },
    ObservablePatternComponent {
        observable: String,
        pattern: String,
        molecule: String,
        component: String,
        name: String,
    },
    ObservablePatternComponentState {
        observable: String,
        pattern: String,
        molecule: String,
        component: String,
        state: String,
    },
}

/// Builder that records every notification in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<ModelEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ModelEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<ModelEvent> {
        self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn rules(&self) -> impl Iterator<Item = &RuleData> {
        self.events.iter().filter_map(|e| match e {
            ModelEvent::Rule { rule } => Some(rule),
            _ => None,
        })
    }

    pub fn seed_bonds(&self) -> impl Iterator<Item = &Bond> {
        self.events.iter().filter_map(|e| match e {
            ModelEvent::SeedSpeciesBond { bond } => Some(bond),
            _ => None,
        })
    }

    pub fn summary(&self) -> ModelSummary {
        let mut summary = ModelSummary::default();
        for event in &self.events {
            match event {
                ModelEvent::Parameter { .. } => summary.parameters += 1,
                ModelEvent::MoleculeType { .. } => summary.molecule_types += 1,
                ModelEvent::SeedSpeciesMolecule { .. } => summary.seed_molecules += 1,
                ModelEvent::SeedSpeciesBond { .. } => summary.seed_bonds += 1,
                ModelEvent::Compartment { .. } => summary.compartments += 1,
                ModelEvent::Rule { rule } => {
                    summary.rules += 1;
                    summary.bond_changes += rule.bond_changes.len();
                }
                ModelEvent::Observable { .. } => summary.observables += 1,
                ModelEvent::ObservablePattern { .. } => summary.observable_patterns += 1,
                ModelEvent::ObservablePatternMolecule { .. }
                | ModelEvent::ObservablePatternComponent { .. }
                | ModelEvent::ObservablePatternComponentState { .. } => {}
            }
        }
        summary
    }
}

impl ModelBuilder for EventLog {
    fn parameter_found(&mut self, id: &str, kind: &str, value: &str) {
        self.events.push(ModelEvent::Parameter {
            id: id.to_string(),
            kind: kind.to_string(),
            value: value.to_string(),
        });
    }

    fn found_molecule_type(&mut self, molecule: Molecule) {
        self.events.push(ModelEvent::MoleculeType { molecule });
    }

    fn found_molecule_in_seed_species(&mut self, molecule: Molecule) {
        self.events.push(ModelEvent::SeedSpeciesMolecule { molecule });
    }

    fn found_bond_in_seed_species(&mut self, bond: Bond) {
        self.events.push(ModelEvent::SeedSpeciesBond { bond });
    }

    fn found_compartment(&mut self, id: &str, size: &str, outside: Option<&str>) {
        self.events.push(ModelEvent::Compartment {
            id: id.to_string(),
            size: size.to_string(),
            outside: outside.map(str::to_owned),
        });
    }

    fn found_rule(&mut self, rule: RuleData) {
        self.events.push(ModelEvent::Rule { rule });
    }

    fn found_observable(&mut self, id: &str, name: &str, kind: ObservableKind) {
        self.events.push(ModelEvent::Observable {
            id: id.to_string(),
            name: name.to_string(),
            kind,
        });
    }

    fn found_observable_pattern(&mut self, observable_id: &str, pattern_id: &str) {
        self.events.push(ModelEvent::ObservablePattern {
            observable: observable_id.to_string(),
            pattern: pattern_id.to_string(),
        });
    }

    fn found_observable_pattern_molecule(
        &mut self,
        observable_id: &str,
        pattern_id: &str,
        molecule_id: &str,
        molecule_name: &str,
    ) {
        self.events.push(ModelEvent::ObservablePatternMolecule {
            observable: observable_id.to_string(),
            pattern: pattern_id.to_string(),
            molecule: molecule_id.to_string(),
            name: molecule_name.to_string(),
        });
    }

    fn found_observable_pattern_molecule_component(
        &mut self,
        observable_id: &str,
        pattern_id: &str,
        molecule_id: &str,
        component_id: &str,
        component_name: &str,
    ) {
        self.events.push(ModelEvent::ObservablePatternComponent {
            observable: observable_id.to_string(),
            pattern: pattern_id.to_string(),
            molecule: molecule_id.to_string(),
            component: component_id.to_string(),
            name: component_name.to_string(),
        });
    }

    fn found_observable_pattern_molecule_component_state(
        &mut self,
        observable_id: &str,
        pattern_id: &str,
        molecule_id: &str,
        component_id: &str,
        state: &str,
    ) {
        self.events.push(ModelEvent::ObservablePatternComponentState {
            observable: observable_id.to_string(),
            pattern: pattern_id.to_string(),
            molecule: molecule_id.to_string(),
            component: component_id.to_string(),
            state: state.to_string(),
        });
    }
}

/// Counts of translated units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    pub parameters: usize,
    pub molecule_types: usize,
    pub seed_molecules: usize,
    pub seed_bonds: usize,
    pub compartments: usize,
    pub rules: usize,
    pub bond_changes: usize,
    pub observables: usize,
    pub observable_patterns: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::molecule::Component;
    use crate::model::scope::IdAllocator;

    struct ParameterNames(Vec<String>);

    impl ModelBuilder for ParameterNames {
        fn parameter_found(&mut self, id: &str, _kind: &str, _value: &str) {
            self.0.push(id.to_string());
        }
    }

    #[test]
    fn default_methods_ignore_other_notifications() {
        let mut builder = ParameterNames(Vec::new());
        builder.found_molecule_type(Molecule::new("A"));
        builder.found_compartment("EC", "1", None);
        builder.parameter_found("kp1", "Constant", "1.0");
        assert_eq!(builder.0, ["kp1"]);
    }

    #[test]
    fn event_log_records_in_call_order() {
        let ids = IdAllocator::new();
        let mut log = EventLog::new();
        let mut rec = Molecule::new("Rec");
        rec.add_component(Component::new("a", ids.allocate()));

        log.parameter_found("Rec_tot", "Constant", "400.0");
        log.found_molecule_type(rec);
        log.found_observable("O1", "RecFree", ObservableKind::Molecules);
        log.found_observable_pattern("O1", "O1_P1");

        assert!(matches!(log.events()[0], ModelEvent::Parameter { .. }));
        assert!(matches!(log.events()[1], ModelEvent::MoleculeType { .. }));
        assert!(matches!(log.events()[3], ModelEvent::ObservablePattern { .. }));

        let summary = log.summary();
        assert_eq!(summary.parameters, 1);
        assert_eq!(summary.molecule_types, 1);
        assert_eq!(summary.observables, 1);
        assert_eq!(summary.observable_patterns, 1);
        assert_eq!(summary.rules, 0);
    }

    #[test]
    fn events_serialize_with_tag() {
        let mut log = EventLog::new();
        log.found_compartment("PM", "0.1", Some("EC"));
        let json = serde_json::to_value(log.events()).unwrap();
        assert_eq!(json[0]["event"], "compartment");
        assert_eq!(json[0]["outside"], "EC");
    }
}
