use super::{required_attr, Block, Error, ModelBuilder, Translator};
use crate::io::Node;
use tracing::debug;

impl<B: ModelBuilder + ?Sized> Translator<'_, B> {
    pub(super) fn compartments(&mut self, list: &Node) -> Result<(), Error> {
        for compartment in list.children() {
            let id = required_attr(compartment, "id", Block::Compartments)?;
            let size = required_attr(compartment, "size", Block::Compartments)?;
            let outside = compartment.attribute("outside");
            debug!(item = id, size, outside, "compartment");
            self.builder.found_compartment(id, size, outside);
        }
        Ok(())
    }
}
