//! `xmltree` adapter for the registry port.

use std::io::Read;

use dispatchgen_application::ports::{NodeContent, RegistryNode};
use xmltree::{Element, ParseError, XMLNode};

/// Parses a registry document and returns its root element.
///
/// # Errors
///
/// Returns an error if the input is not well-formed XML or has no root element.
pub fn parse_registry<R: Read>(reader: R) -> Result<Element, ParseError> {
    Element::parse(reader)
}

/// Borrowed view of an `xmltree` element implementing [`RegistryNode`].
#[derive(Debug, Clone, Copy)]
pub struct XmlNode<'a> {
    element: &'a Element,
}

impl<'a> XmlNode<'a> {
    /// Wraps a parsed element.
    #[must_use]
    pub const fn new(element: &'a Element) -> Self {
        Self { element }
    }
}

impl RegistryNode for XmlNode<'_> {
    fn tag(&self) -> &str {
        &self.element.name
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.element.attributes.get(name).map(String::as_str)
    }

    fn content(&self) -> Vec<NodeContent<'_, Self>> {
        self.element
            .children
            .iter()
            .filter_map(|child| match child {
                XMLNode::Element(element) => Some(NodeContent::Element(XmlNode::new(element))),
                XMLNode::Text(text) | XMLNode::CData(text) => Some(NodeContent::Text(text)),
                _ => None,
            })
            .collect()
    }
}
