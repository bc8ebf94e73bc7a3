//! Translation of a BioNetGen model tree into builder notifications.
//!
//! The [`Translator`] walks the `Model` element of a parsed document and
//! visits its lists in a fixed order: parameters, molecule types, seed
//! species, compartments, reaction rules and observables. Each seed species
//! and each reaction rule is read against its own identifier registry, so a
//! bond can only refer to components declared in the same unit.
//!
//! Failures are handled per unit. A species or rule with a dangling
//! reference is skipped and listed in the returned [`Report`]; a document
//! missing a required list or attribute stops translation with
//! [`Error::MalformedBlock`].

mod builder;
mod compartments;
mod config;
mod error;
mod molecule_types;
mod observables;
mod parameters;
mod registry;
mod rules;
mod species;

#[cfg(test)]
mod fixtures;

pub use builder::{EventLog, ModelBuilder, ModelEvent, ModelSummary};
pub use config::TranslateConfig;
pub use error::{Block, Error};

use crate::io::Node;
use crate::model::bond::BondSite;
use crate::model::scope::IdAllocator;
use registry::{ScopeRegistry, SiteComponent};
use tracing::{debug, warn};

/// Outcome of a completed translation.
#[derive(Debug, Default)]
pub struct Report {
    /// Species and rules that were not emitted, with the reason.
    pub skipped: Vec<Error>,
    /// Notes about units that were emitted.
    pub warnings: Vec<Error>,
}

impl Report {
    /// Whether every unit was emitted without notes.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.warnings.is_empty()
    }
}

/// Walks a model tree and reports what it finds to a [`ModelBuilder`].
///
/// Component ids come from the shared [`IdAllocator`], so several
/// translations drawing from one allocator never hand out the same id.
///
/// # Examples
///
/// ```
/// use bngl_model::io::Node;
/// use bngl_model::{EventLog, IdAllocator, Translator};
///
/// let root = Node::new("sbml").with_child(
///     Node::new("Model")
///         .with_child(Node::new("ListOfParameters").with_child(
///             Node::new("Parameter")
///                 .with_attr("id", "kp1")
///                 .with_attr("type", "Constant")
///                 .with_attr("value", "0.5"),
///         ))
///         .with_child(Node::new("ListOfMoleculeTypes"))
///         .with_child(Node::new("ListOfSpecies"))
///         .with_child(Node::new("ListOfCompartments"))
///         .with_child(Node::new("ListOfReactionRules"))
///         .with_child(Node::new("ListOfObservables")),
/// );
///
/// let ids = IdAllocator::new();
/// let mut log = EventLog::new();
/// let report = Translator::new(&mut log, &ids).translate(&root).unwrap();
///
/// assert!(report.is_clean());
/// assert_eq!(log.summary().parameters, 1);
/// ```
pub struct Translator<'a, B: ModelBuilder + ?Sized> {
    builder: &'a mut B,
    ids: &'a IdAllocator,
    config: TranslateConfig,
    report: Report,
}

impl<'a, B: ModelBuilder + ?Sized> Translator<'a, B> {
    pub fn new(builder: &'a mut B, ids: &'a IdAllocator) -> Self {
        Self {
            builder,
            ids,
            config: TranslateConfig::default(),
            report: Report::default(),
        }
    }

    pub fn config(mut self, config: TranslateConfig) -> Self {
        self.config = config;
        self
    }

    /// Translates the document rooted at `root`.
    pub fn translate(mut self, root: &Node) -> Result<Report, Error> {
        let model = required_child(root, "Model", Block::Model)?;
        debug!(model = model.attribute("id").unwrap_or_default(), "translating model");

        for block in Block::ORDER {
            let list = required_child(model, block.list_tag(), Block::Model)?;
            debug!(%block, items = list.children().len(), "reading block");
            match block {
                Block::Parameters => self.parameters(list)?,
                Block::MoleculeTypes => self.molecule_types(list)?,
                Block::Species => self.species(list)?,
                Block::Compartments => self.compartments(list)?,
                Block::ReactionRules => self.reaction_rules(list)?,
                Block::Observables => self.observables(list)?,
                Block::Model => {}
            }
        }

        Ok(self.report)
    }

    /// Turns a unit-level failure into a report entry. Fatal errors pass
    /// through unchanged.
    fn isolate(&mut self, result: Result<(), Error>) -> Result<(), Error> {
        match result {
            Err(err) if !err.is_fatal() => {
                warn!(error = %err, "skipping unit");
                self.report.skipped.push(err);
                Ok(())
            }
            other => other,
        }
    }

    fn warn(&mut self, note: Error) {
        warn!(%note, "translation warning");
        self.report.warnings.push(note);
    }

    /// Children of a molecule's `ListOfComponents`. A missing list is an
    /// error unless bare molecules are allowed.
    fn component_list<'n>(&self, molecule: &'n Node, block: Block) -> Result<&'n [Node], Error> {
        match molecule.child("ListOfComponents") {
            Some(list) => Ok(list.children()),
            None if self.config.allow_bare_molecules => Ok(&[]),
            None => Err(missing_child(molecule, "ListOfComponents", block)),
        }
    }
}

/// Translates `root` with a fresh id allocator.
pub fn translate<B: ModelBuilder + ?Sized>(
    root: &Node,
    builder: &mut B,
    config: &TranslateConfig,
) -> Result<Report, Error> {
    let ids = IdAllocator::new();
    Translator::new(builder, &ids).config(config.clone()).translate(root)
}

fn missing_child(node: &Node, tag: &str, block: Block) -> Error {
    Error::malformed(block, node.label(), format!("missing child {tag}"))
}

pub(crate) fn required_child<'n>(node: &'n Node, tag: &str, block: Block) -> Result<&'n Node, Error> {
    node.child(tag).ok_or_else(|| missing_child(node, tag, block))
}

pub(crate) fn required_attr<'n>(node: &'n Node, name: &str, block: Block) -> Result<&'n str, Error> {
    node.attribute(name)
        .ok_or_else(|| Error::malformed(block, node.label(), format!("missing attribute {name}")))
}

/// Resolves both endpoints of a bond or operation inside one unit's
/// registry and rejects a component bonded to itself.
pub(crate) fn resolve_pair<C: SiteComponent>(
    registry: &ScopeRegistry<C>,
    site1: &str,
    site2: &str,
    block: Block,
    item: &str,
) -> Result<(BondSite, BondSite), Error> {
    let first = registry
        .resolve(site1)
        .map_err(|id| Error::unresolved(block, item, id))?;
    let second = registry
        .resolve(site2)
        .map_err(|id| Error::unresolved(block, item, id))?;
    if first.same_component(&second) {
        return Err(Error::invalid_bond(block, item, site1));
    }
    Ok((first, second))
}
