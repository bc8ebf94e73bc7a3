//! Reaction rules.
//!
//! A rule's reactant and product patterns share one registry, so the
//! operations at the end of the rule can refer to components of either
//! side. Operations that carry no `site1`/`site2` pair (state changes,
//! molecule additions and deletions) are not bond changes and are passed
//! over.

use super::registry::{is_wildcard, ScopeRegistry};
use super::{required_attr, required_child, resolve_pair, Block, Error, ModelBuilder, Translator};
use crate::io::Node;
use crate::model::bond::{Bond, BondSite};
use crate::model::rule::{BondAction, ComponentData, PatternMolecule, RuleData, RulePatternData};
use tracing::{debug, trace};

const BLOCK: Block = Block::ReactionRules;

impl<B: ModelBuilder + ?Sized> Translator<'_, B> {
    pub(super) fn reaction_rules(&mut self, list: &Node) -> Result<(), Error> {
        for rule in list.children() {
            let result = self.reaction_rule(rule).map(|(data, note)| {
                if let Some(note) = note {
                    self.warn(note);
                }
                self.builder.found_rule(data);
            });
            self.isolate(result)?;
        }
        Ok(())
    }

    fn reaction_rule(&self, rule: &Node) -> Result<(RuleData, Option<Error>), Error> {
        let name = required_attr(rule, "name", BLOCK)?;
        let mut data = RuleData::new(name);
        let mut registry = ScopeRegistry::<ComponentData>::new();

        for pattern in required_child(rule, "ListOfReactantPatterns", BLOCK)?.children() {
            data.add_reactant_pattern(self.rule_pattern(pattern, &mut registry, name)?);
        }
        for pattern in required_child(rule, "ListOfProductPatterns", BLOCK)?.children() {
            data.add_product_pattern(self.rule_pattern(pattern, &mut registry, name)?);
        }

        let note = read_rate(rule, &mut data)?;

        if let Some(map) = rule.child("Map") {
            trace!(item = name, entries = map.children().len(), "ignoring map");
        }

        for operation in required_child(rule, "ListOfOperations", BLOCK)?.children() {
            let (Some(site1), Some(site2)) = (operation.attribute("site1"), operation.attribute("site2"))
            else {
                trace!(item = name, operation = operation.tag(), "not a bond operation");
                continue;
            };
            if is_wildcard(site1, site2) {
                trace!(item = name, operation = operation.tag(), "skipping wildcard operation");
                continue;
            }
            let (first, second) = self.sites(&registry, site1, site2, name)?;
            data.add_bond_data(first, second, BondAction::from_operation(operation.tag()));
        }

        debug!(
            item = name,
            reactants = data.reactants.len(),
            products = data.products.len(),
            bond_changes = data.bond_changes.len(),
            "reaction rule"
        );
        Ok((data, note))
    }

    fn rule_pattern(
        &self,
        pattern: &Node,
        registry: &mut ScopeRegistry<ComponentData>,
        rule: &str,
    ) -> Result<RulePatternData, Error> {
        let mut data = RulePatternData::new();

        for entry in required_child(pattern, "ListofMolecules", BLOCK)?.children() {
            let id = required_attr(entry, "id", BLOCK)?;
            let name = required_attr(entry, "name", BLOCK)?;
            registry.register_molecule(id, name);

            let mut molecule = PatternMolecule::new(name);
            for node in self.component_list(entry, BLOCK)? {
                let component_id = required_attr(node, "id", BLOCK)?;
                let component = ComponentData::new(required_attr(node, "name", BLOCK)?, self.ids.allocate())
                    .with_state(node.attribute("state").map(str::to_owned));
                registry.register_component(component_id, component.clone());
                molecule.add_component(component);
            }
            data.add_molecule(molecule);
        }

        if let Some(list) = pattern.child("ListofBonds") {
            for node in list.children() {
                let site1 = required_attr(node, "site1", BLOCK)?;
                let site2 = required_attr(node, "site2", BLOCK)?;
                if is_wildcard(site1, site2) {
                    trace!(item = rule, bond = node.attribute("id"), "skipping wildcard bond");
                    continue;
                }
                let (first, second) = self.sites(registry, site1, site2, rule)?;
                let bond = Bond::new(first, second).ok_or_else(|| Error::invalid_bond(BLOCK, rule, site1))?;
                data.add_bond(bond);
            }
        }

        Ok(data)
    }

    fn sites(
        &self,
        registry: &ScopeRegistry<ComponentData>,
        site1: &str,
        site2: &str,
        rule: &str,
    ) -> Result<(BondSite, BondSite), Error> {
        let (first, mut second) = resolve_pair(registry, site1, site2, BLOCK, rule)?;
        if self.config.legacy_bond_states {
            second.state = first.state.clone();
        }
        Ok((first, second))
    }
}

/// Sets the rule's rate from its rate law. With several constants the last
/// one wins; with none the rate stays empty. Either case returns a note.
fn read_rate(rule: &Node, data: &mut RuleData) -> Result<Option<Error>, Error> {
    let law = required_child(rule, "RateLaw", BLOCK)?;
    let constants = required_child(law, "ListOfRateConstants", BLOCK)?.children();

    for constant in constants {
        data.set_rate(required_attr(constant, "value", BLOCK)?);
    }

    Ok(match constants.len() {
        0 => Some(Error::MissingRate {
            rule: data.name.clone(),
        }),
        1 => None,
        count => Some(Error::AmbiguousRate {
            rule: data.name.clone(),
            count,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::super::{EventLog, TranslateConfig};
    use super::*;

    fn pattern(tag: &str, id: &str, mols: Vec<Node>, bond_list: Vec<Node>) -> Node {
        let node = Node::new(tag).with_attr("id", id).with_child(molecules(mols));
        if bond_list.is_empty() {
            node
        } else {
            node.with_child(bonds(bond_list))
        }
    }

    fn rate_law(values: &[&str]) -> Node {
        Node::new("RateLaw").with_attr("type", "Ele").with_child(
            Node::new("ListOfRateConstants").with_children(
                values
                    .iter()
                    .map(|v| Node::new("RateConstant").with_attr("value", *v)),
            ),
        )
    }

    fn rule(
        name: &str,
        reactants: Vec<Node>,
        products: Vec<Node>,
        rates: &[&str],
        operations: Vec<Node>,
    ) -> Node {
        Node::new("ReactionRule")
            .with_attr("id", name)
            .with_attr("name", name)
            .with_child(Node::new("ListOfReactantPatterns").with_children(reactants))
            .with_child(Node::new("ListOfProductPatterns").with_children(products))
            .with_child(rate_law(rates))
            .with_child(Node::new("Map").with_child(
                Node::new("MapItem").with_attr("sourceID", "x").with_attr("targetID", "y"),
            ))
            .with_child(Node::new("ListOfOperations").with_children(operations))
    }

    fn operation(tag: &str, site1: &str, site2: &str) -> Node {
        Node::new(tag).with_attr("site1", site1).with_attr("site2", site2)
    }

    /// `Rec(a~U) + Lig(l) -> Rec(a~P!1).Lig(l!1)` adding the bond between
    /// the reactant components.
    fn binding_rule(name: &str) -> Node {
        rule(
            name,
            vec![
                pattern(
                    "ReactantPattern",
                    "RR1_RP1",
                    vec![molecule("RR1_RP1_M1", "Rec", vec![component_in("RR1_RP1_M1_C1", "a", "U")])],
                    vec![],
                ),
                pattern(
                    "ReactantPattern",
                    "RR1_RP2",
                    vec![molecule("RR1_RP2_M1", "Lig", vec![component("RR1_RP2_M1_C1", "l")])],
                    vec![],
                ),
            ],
            vec![pattern(
                "ProductPattern",
                "RR1_PP1",
                vec![
                    molecule("RR1_PP1_M1", "Rec", vec![component_in("RR1_PP1_M1_C1", "a", "P")]),
                    molecule("RR1_PP1_M2", "Lig", vec![component("RR1_PP1_M2_C1", "l")]),
                ],
                vec![bond("RR1_PP1_B1", "RR1_PP1_M1_C1", "RR1_PP1_M2_C1")],
            )],
            &["kp1"],
            vec![operation("AddBond", "RR1_RP1_M1_C1", "RR1_RP2_M1_C1")],
        )
    }

    fn rules_of(log: &EventLog) -> Vec<&RuleData> {
        log.rules().collect()
    }

    #[test]
    fn binding_rule_is_assembled() {
        let (log, result) = run_block(BLOCK, vec![binding_rule("bind")]);
        assert!(result.unwrap().is_clean());

        let rules = rules_of(&log);
        assert_eq!(rules.len(), 1);
        let rule = rules[0];
        assert_eq!(rule.name, "bind");
        assert_eq!(rule.rate, "kp1");
        assert_eq!(rule.to_string(), "bind: Rec(a~U) + Lig(l) -> Rec(a~P).Lig(l) kp1");

        let product = &rule.products[0];
        assert_eq!(product.bonds.len(), 1);
        assert_eq!(product.bonds[0].first.molecule, "Rec");
        assert_eq!(product.bonds[0].first.state.as_deref(), Some("P"));
        assert_eq!(product.bonds[0].second.molecule, "Lig");

        let change = &rule.bond_changes[0];
        assert_eq!(change.action, BondAction::Add);
        assert_eq!(change.first.component_id, rule.reactants[0].molecules[0].components[0].unique_id);
        assert_eq!(change.second.component_id, rule.reactants[1].molecules[0].components[0].unique_id);
        assert_eq!(change.second.state, None);
    }

    #[test]
    fn legacy_mode_copies_first_state() {
        let config = TranslateConfig {
            legacy_bond_states: true,
            ..Default::default()
        };
        let (log, _) = run(model_with(BLOCK, vec![binding_rule("bind")]), config);
        let rule = rules_of(&log)[0];
        assert_eq!(rule.bond_changes[0].second.state.as_deref(), Some("U"));
        assert_eq!(rule.products[0].bonds[0].second.state.as_deref(), Some("P"));
    }

    #[test]
    fn unbinding_and_other_operations() {
        let unbind = rule(
            "unbind",
            vec![pattern(
                "ReactantPattern",
                "RR2_RP1",
                vec![
                    molecule("RR2_RP1_M1", "Rec", vec![component("RR2_RP1_M1_C1", "a")]),
                    molecule("RR2_RP1_M2", "Lig", vec![component("RR2_RP1_M2_C1", "l")]),
                ],
                vec![bond("RR2_RP1_B1", "RR2_RP1_M1_C1", "RR2_RP1_M2_C1")],
            )],
            vec![],
            &["km1"],
            vec![
                operation("DeleteBond", "RR2_RP1_M1_C1", "RR2_RP1_M2_C1"),
                Node::new("StateChange").with_attr("site", "RR2_RP1_M1_C1").with_attr("finalState", "P"),
                Node::new("Delete").with_attr("id", "RR2_RP1_M2"),
            ],
        );
        let (log, result) = run_block(BLOCK, vec![unbind]);
        assert!(result.unwrap().is_clean());

        let rule = rules_of(&log)[0];
        assert_eq!(rule.bond_changes.len(), 1);
        assert_eq!(rule.breaks().count(), 1);
        assert_eq!(rule.adds().count(), 0);
    }

    #[test]
    fn wildcard_endpoints_are_skipped() {
        let dangling = rule(
            "release",
            vec![pattern(
                "ReactantPattern",
                "RR1_RP1",
                vec![molecule("RR1_RP1_M1", "Rec", vec![component("RR1_RP1_M1_C1", "a")])],
                vec![bond("RR1_RP1_B1", "RR1_RP1_M1_C1", "")],
            )],
            vec![],
            &["k"],
            vec![
                operation("DeleteBond", "RR1_RP1_M1_C1", ""),
                operation("DeleteBond", "", "RR1_RP1_M1_C1"),
            ],
        );
        let (log, result) = run_block(BLOCK, vec![dangling]);
        assert!(result.unwrap().is_clean());

        let rule = rules_of(&log)[0];
        assert!(rule.reactants[0].bonds.is_empty());
        assert!(rule.bond_changes.is_empty());
    }

    #[test]
    fn last_rate_constant_wins_with_warning() {
        let mut node = binding_rule("bind");
        node = Node::new(node.tag())
            .with_attr("name", "bind")
            .with_children(node.children().iter().cloned().map(|child| {
                if child.tag() == "RateLaw" {
                    rate_law(&["kf", "kr"])
                } else {
                    child
                }
            }));
        let (log, result) = run_block(BLOCK, vec![node]);

        let report = result.unwrap();
        assert!(report.skipped.is_empty());
        assert!(matches!(
            &report.warnings[..],
            [Error::AmbiguousRate { rule, count: 2 }] if rule == "bind"
        ));
        assert_eq!(rules_of(&log)[0].rate, "kr");
    }

    #[test]
    fn empty_rate_list_keeps_rule_with_warning() {
        let (log, result) = run_block(
            BLOCK,
            vec![rule("r", vec![], vec![], &[], vec![]), binding_rule("next")],
        );

        let report = result.unwrap();
        assert!(report.skipped.is_empty());
        assert!(matches!(
            &report.warnings[..],
            [Error::MissingRate { rule }] if rule == "r"
        ));
        let rules = rules_of(&log);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].rate, "");
        assert_eq!(rules[1].name, "next");
        assert_eq!(rules[1].rate, "kp1");
    }

    #[test]
    fn missing_rate_list_is_malformed() {
        let node = Node::new("ReactionRule")
            .with_attr("name", "r")
            .with_child(Node::new("ListOfReactantPatterns"))
            .with_child(Node::new("ListOfProductPatterns"))
            .with_child(Node::new("RateLaw"))
            .with_child(Node::new("ListOfOperations"));
        let (log, result) = run_block(BLOCK, vec![node]);
        match result {
            Err(Error::MalformedBlock { detail, .. }) => assert_eq!(detail, "missing child ListOfRateConstants"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(log.is_empty());
    }

    #[test]
    fn operation_may_reference_product_ids() {
        let dimerise = rule(
            "dimerise",
            vec![pattern(
                "ReactantPattern",
                "RR1_RP1",
                vec![molecule("RR1_RP1_M1", "Rec", vec![component("RR1_RP1_M1_C1", "a")])],
                vec![],
            )],
            vec![pattern(
                "ProductPattern",
                "RR1_PP1",
                vec![
                    molecule("RR1_PP1_M1", "Rec", vec![component("RR1_PP1_M1_C1", "a")]),
                    molecule("RR1_PP1_M2", "Lig", vec![component_in("RR1_PP1_M2_C1", "l", "Y")]),
                ],
                vec![],
            )],
            &["1.0"],
            vec![operation("AddBond", "RR1_RP1_M1_C1", "RR1_PP1_M2_C1")],
        );
        let (log, result) = run_block(BLOCK, vec![dimerise]);
        assert!(result.unwrap().is_clean());

        let rule = rules_of(&log)[0];
        let change = &rule.bond_changes[0];
        assert_eq!(change.action, BondAction::Add);
        assert_eq!(change.first.component_id, rule.reactants[0].molecules[0].components[0].unique_id);
        assert_eq!(change.second.molecule, "Lig");
        assert_eq!(change.second.state.as_deref(), Some("Y"));
        assert_eq!(change.second.component_id, rule.products[0].molecules[1].components[0].unique_id);
    }

    #[test]
    fn ids_never_resolve_across_rules() {
        let borrowing = rule(
            "r2",
            vec![pattern(
                "ReactantPattern",
                "RR2_RP1",
                vec![molecule("RR2_RP1_M1", "Rec", vec![component("RR2_RP1_M1_C1", "a")])],
                vec![],
            )],
            vec![],
            &["k"],
            vec![operation("AddBond", "RR2_RP1_M1_C1", "RR1_PP1_M2_C1")],
        );
        let (log, result) = run_block(BLOCK, vec![binding_rule("r1"), borrowing]);

        let report = result.unwrap();
        assert!(matches!(
            &report.skipped[..],
            [Error::UnresolvedReference { item, id, .. }] if item == "r2" && id == "RR1_PP1_M2_C1"
        ));
        let names: Vec<_> = rules_of(&log).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["r1"]);
    }

    #[test]
    fn association_with_two_rate_constants() {
        let associate = rule(
            "associate",
            vec![pattern(
                "ReactantPattern",
                "RR1_RP1",
                vec![molecule("RR1_RP1_M1", "Rec", vec![component("RR1_RP1_M1_C1", "a")])],
                vec![],
            )],
            vec![pattern(
                "ProductPattern",
                "RR1_PP1",
                vec![
                    molecule("RR1_PP1_M1", "Rec", vec![component("RR1_PP1_M1_C1", "a")]),
                    molecule("RR1_PP1_M2", "Lig", vec![component("RR1_PP1_M2_C1", "l")]),
                ],
                vec![bond("RR1_PP1_B1", "RR1_PP1_M1_C1", "RR1_PP1_M2_C1")],
            )],
            &["1.0", "2.0"],
            vec![],
        );
        let (log, result) = run_block(BLOCK, vec![associate]);
        let report = result.unwrap();
        assert_eq!(report.warnings.len(), 1);

        let rule = rules_of(&log)[0];
        assert_eq!(rule.reactants.len(), 1);
        assert_eq!(rule.products.len(), 1);
        assert_eq!(rule.rate, "2.0");
        assert_eq!(rule.to_string(), "associate: Rec(a) -> Rec(a).Lig(l) 2.0");
    }

    #[test]
    fn unresolved_operation_skips_rule_and_continues() {
        let broken = rule(
            "broken",
            vec![pattern(
                "ReactantPattern",
                "RR9_RP1",
                vec![molecule("RR9_RP1_M1", "Rec", vec![component("RR9_RP1_M1_C1", "a")])],
                vec![],
            )],
            vec![],
            &["k"],
            vec![operation("AddBond", "RR9_RP1_M1_C1", "RR9_RP1_M1_C9")],
        );
        let (log, result) = run_block(BLOCK, vec![binding_rule("first"), broken, binding_rule("last")]);

        let report = result.unwrap();
        assert!(matches!(
            &report.skipped[..],
            [Error::UnresolvedReference { item, id, .. }] if item == "broken" && id == "RR9_RP1_M1_C9"
        ));
        let names: Vec<_> = rules_of(&log).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["first", "last"]);
    }

    #[test]
    fn self_bond_operation_is_rejected() {
        let looped = rule(
            "loop",
            vec![pattern(
                "ReactantPattern",
                "RR1_RP1",
                vec![molecule("RR1_RP1_M1", "Rec", vec![component("RR1_RP1_M1_C1", "a")])],
                vec![],
            )],
            vec![],
            &["k"],
            vec![operation("AddBond", "RR1_RP1_M1_C1", "RR1_RP1_M1_C1")],
        );
        let (log, result) = run_block(BLOCK, vec![looped]);
        assert!(matches!(
            &result.unwrap().skipped[..],
            [Error::InvalidBond { item, .. }] if item == "loop"
        ));
        assert!(log.is_empty());
    }

    #[test]
    fn missing_operations_list_is_malformed() {
        let node = Node::new("ReactionRule")
            .with_attr("name", "r")
            .with_child(Node::new("ListOfReactantPatterns"))
            .with_child(Node::new("ListOfProductPatterns"))
            .with_child(rate_law(&["k"]));
        let (_, result) = run_block(BLOCK, vec![node]);
        match result {
            Err(Error::MalformedBlock { detail, .. }) => assert_eq!(detail, "missing child ListOfOperations"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
