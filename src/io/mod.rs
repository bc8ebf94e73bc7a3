//! Reading BioNetGen XML into the [`Node`] tree the translator walks.
//!
//! Parsing is a single preparatory step: the whole document is read and
//! converted into owned nodes before translation starts, so the translator
//! never touches the raw text.

use std::io::Read;

pub mod error;
mod node;

pub use error::Error;
pub use node::Node;

/// Parses an XML document held in memory and returns its root element.
pub fn parse_document(text: &str) -> Result<Node, Error> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(text, options)?;
    Ok(Node::from_xml(doc.root_element()))
}

/// Reads an XML document from `reader` and returns its root element.
pub fn read_document<R: Read>(mut reader: R) -> Result<Node, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_document(&text)
}
