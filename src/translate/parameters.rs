use super::{required_attr, Block, Error, ModelBuilder, Translator};
use crate::io::Node;
use tracing::debug;

impl<B: ModelBuilder + ?Sized> Translator<'_, B> {
    pub(super) fn parameters(&mut self, list: &Node) -> Result<(), Error> {
        for param in list.children() {
            let id = required_attr(param, "id", Block::Parameters)?;
            let kind = required_attr(param, "type", Block::Parameters)?;
            let value = required_attr(param, "value", Block::Parameters)?;
            debug!(item = id, kind, value, "parameter");
            self.builder.parameter_found(id, kind, value);
        }
        Ok(())
    }
}
