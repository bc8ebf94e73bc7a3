//! Tree builders shared by the translator tests.

use super::{translate, Block, Error, EventLog, ModelEvent, Report, TranslateConfig};
use crate::io::Node;
use crate::model::scope::ComponentId;

/// A `Model` whose lists are all empty except `block`, which holds `items`.
pub fn model_with(block: Block, items: Vec<Node>) -> Node {
    let lists = Block::ORDER.iter().map(|b| {
        let list = Node::new(b.list_tag());
        if *b == block {
            list.with_children(items.clone())
        } else {
            list
        }
    });
    Node::new("Model").with_attr("id", "test").with_children(lists)
}

pub fn run(model: Node, config: TranslateConfig) -> (EventLog, Result<Report, Error>) {
    let root = Node::new("sbml").with_child(model);
    let mut log = EventLog::new();
    let result = translate(&root, &mut log, &config);
    (log, result)
}

pub fn run_block(block: Block, items: Vec<Node>) -> (EventLog, Result<Report, Error>) {
    run(model_with(block, items), TranslateConfig::default())
}

pub fn molecule(id: &str, name: &str, components: Vec<Node>) -> Node {
    Node::new("Molecule")
        .with_attr("id", id)
        .with_attr("name", name)
        .with_child(Node::new("ListOfComponents").with_children(components))
}

pub fn component(id: &str, name: &str) -> Node {
    Node::new("Component")
        .with_attr("id", id)
        .with_attr("name", name)
        .with_attr("numberOfBonds", "0")
}

pub fn component_in(id: &str, name: &str, state: &str) -> Node {
    component(id, name).with_attr("state", state)
}

pub fn bond(id: &str, site1: &str, site2: &str) -> Node {
    Node::new("Bond")
        .with_attr("id", id)
        .with_attr("site1", site1)
        .with_attr("site2", site2)
}

pub fn molecules(items: Vec<Node>) -> Node {
    Node::new("ListofMolecules").with_children(items)
}

pub fn bonds(items: Vec<Node>) -> Node {
    Node::new("ListofBonds").with_children(items)
}

/// Every component id carried by an event.
pub fn component_ids(event: &ModelEvent) -> Vec<ComponentId> {
    match event {
        ModelEvent::MoleculeType { molecule } | ModelEvent::SeedSpeciesMolecule { molecule } => {
            molecule.components.iter().map(|c| c.unique_id).collect()
        }
        ModelEvent::Rule { rule } => rule
            .reactants
            .iter()
            .chain(&rule.products)
            .flat_map(|p| &p.molecules)
            .flat_map(|m| &m.components)
            .map(|c| c.unique_id)
            .collect(),
        _ => Vec::new(),
    }
}
