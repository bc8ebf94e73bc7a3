//! Translation of BioNetGen XML models into a rule-based model graph.
//!
//! A BioNetGen model document describes molecule types, seed species,
//! compartments, reaction rules and observables. This crate reads such a
//! document and reports its content, unit by unit, to a consumer-supplied
//! [`ModelBuilder`]. Identifiers used by the document to wire bonds together
//! (`S3_M1_C2`, `RR1_PP1_M2_C1`, ...) are resolved inside the species or rule
//! that declares them; consumers only ever see named molecules, components
//! and bonds carrying run-wide unique component ids.
//!
//! # Features
//!
//! - **Scoped resolution**: bond endpoints are looked up in a per-species or
//!   per-rule registry, so references never leak between units
//! - **Unit isolation**: a species or rule with a dangling reference is
//!   skipped and reported while the rest of the model is translated
//! - **Event recording**: [`EventLog`] records every notification as a
//!   serialisable [`ModelEvent`]
//! - **Configurable readings**: [`TranslateConfig`] selects compartment and
//!   bond-state conventions
//!
//! # Quick Start
//!
//! ```
//! use bngl_model::io::parse_document;
//! use bngl_model::{translate, EventLog, TranslateConfig, TranslateError};
//!
//! let xml = r#"
//! <sbml xmlns="http://www.sbml.org/sbml/level3" level="3" version="1">
//!   <Model id="simple">
//!     <ListOfParameters>
//!       <Parameter id="kp1" type="Constant" value="0.5"/>
//!     </ListOfParameters>
//!     <ListOfMoleculeTypes>
//!       <MoleculeType id="A">
//!         <ListOfComponentTypes>
//!           <ComponentType id="b"/>
//!         </ListOfComponentTypes>
//!       </MoleculeType>
//!     </ListOfMoleculeTypes>
//!     <ListOfSpecies>
//!       <Species id="S1" concentration="100" name="A(b!1).A(b!1)">
//!         <ListofMolecules>
//!           <Molecule id="S1_M1" name="A">
//!             <ListOfComponents>
//!               <Component id="S1_M1_C1" name="b" numberOfBonds="1"/>
//!             </ListOfComponents>
//!           </Molecule>
//!           <Molecule id="S1_M2" name="A">
//!             <ListOfComponents>
//!               <Component id="S1_M2_C1" name="b" numberOfBonds="1"/>
//!             </ListOfComponents>
//!           </Molecule>
//!         </ListofMolecules>
//!         <ListofBonds>
//!           <Bond id="S1_B1" site1="S1_M1_C1" site2="S1_M2_C1"/>
//!         </ListofBonds>
//!       </Species>
//!     </ListOfSpecies>
//!     <ListOfCompartments/>
//!     <ListOfReactionRules/>
//!     <ListOfObservables/>
//!   </Model>
//! </sbml>"#;
//!
//! let root = parse_document(xml).unwrap();
//! let mut log = EventLog::new();
//! let report = translate(&root, &mut log, &TranslateConfig::default())?;
//!
//! assert!(report.is_clean());
//! let summary = log.summary();
//! assert_eq!(summary.molecule_types, 1);
//! assert_eq!(summary.seed_molecules, 2);
//! assert_eq!(summary.seed_bonds, 1);
//! # Ok::<(), TranslateError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`]: reading XML into the [`Node`](io::Node) tree
//! - [`translate`]: the translator entry point
//! - [`Translator`]: translation with a shared [`IdAllocator`]
//!
//! # Data Types
//!
//! - [`Molecule`], [`Component`], [`State`]: molecule types and seed-species molecules
//! - [`Bond`], [`BondSite`]: bonds between components
//! - [`RuleData`], [`RulePatternData`], [`BondChange`]: reaction rules
//! - [`ObservableKind`]: observable counting mode

mod model;
mod translate;

pub mod io;

pub use model::bond::{Bond, BondSite};
pub use model::molecule::{Component, Molecule, State};
pub use model::observable::{ObservableKind, ParseObservableKindError};
pub use model::rule::{BondAction, BondChange, ComponentData, PatternMolecule, RuleData, RulePatternData};
pub use model::scope::{ComponentId, IdAllocator, ScopePath};

pub use translate::{
    Block, EventLog, ModelBuilder, ModelEvent, ModelSummary, Report, TranslateConfig, Translator,
    translate,
};

pub use translate::Error as TranslateError;
