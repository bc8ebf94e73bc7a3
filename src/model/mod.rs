//! Entities produced by the translator.
//!
//! - [`molecule`]: Molecules, their components and component states.
//! - [`bond`]: Bond endpoints and undirected bonds between components.
//! - [`rule`]: Buffered reaction rule data: patterns, rate and bond operations.
//! - [`observable`]: Observable kinds.
//! - [`scope`]: Component ids and the scoped identifier convention of the source.
//!
//! Everything here is plain data. The entities hold no reference back to the
//! source tree, so a builder may keep them after the translation pass ends.

pub mod bond;
pub mod molecule;
pub mod observable;
pub mod rule;
pub mod scope;
