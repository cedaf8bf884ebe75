//! Registry document port.
//!
//! The generator never touches a concrete document parser. Adapters expose
//! parsed elements through [`RegistryNode`], and everything above this port
//! works on tags, attributes and ordered mixed content.

use crate::error::{ApplicationError, ApplicationResult};

/// One item of an element's mixed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeContent<'a, N> {
    /// A child element.
    Element(N),
    /// A run of character data.
    Text(&'a str),
}

/// Port for reading one element of a parsed registry document.
///
/// Implementors are expected to be cheap handles (typically a reference
/// wrapper), since child access hands out owned `Self` values.
pub trait RegistryNode: Sized {
    /// Element tag name.
    fn tag(&self) -> &str;

    /// Attribute value, if present.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Child elements and text runs in document order.
    fn content(&self) -> Vec<NodeContent<'_, Self>>;

    /// Child elements in document order.
    fn elements(&self) -> Vec<Self> {
        self.content()
            .into_iter()
            .filter_map(|item| match item {
                NodeContent::Element(node) => Some(node),
                NodeContent::Text(_) => None,
            })
            .collect()
    }

    /// Child elements with the given tag, in document order.
    fn children(&self, tag: &str) -> Vec<Self> {
        self.elements()
            .into_iter()
            .filter(|node| node.tag() == tag)
            .collect()
    }

    /// First child element with the given tag.
    fn child(&self, tag: &str) -> Option<Self> {
        self.elements().into_iter().find(|node| node.tag() == tag)
    }

    /// Concatenated character data directly inside this element.
    fn text(&self) -> String {
        self.content()
            .into_iter()
            .filter_map(|item| match item {
                NodeContent::Text(text) => Some(text),
                NodeContent::Element(_) => None,
            })
            .collect()
    }

    /// Character data preceding the first child element.
    fn leading_text(&self) -> String {
        self.content()
            .into_iter()
            .map_while(|item| match item {
                NodeContent::Text(text) => Some(text),
                NodeContent::Element(_) => None,
            })
            .collect()
    }

    /// Character data following the first child element tagged `tag`, up to
    /// the next child element.
    fn tail_of(&self, tag: &str) -> String {
        self.content()
            .into_iter()
            .skip_while(|item| !matches!(item, NodeContent::Element(node) if node.tag() == tag))
            .skip(1)
            .map_while(|item| match item {
                NodeContent::Text(text) => Some(text),
                NodeContent::Element(_) => None,
            })
            .collect()
    }

    /// Attribute that generation cannot proceed without.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::MissingAttribute`] if it is absent.
    fn required_attribute(&self, name: &str) -> ApplicationResult<&str> {
        self.attribute(name)
            .ok_or_else(|| ApplicationError::MissingAttribute {
                element: self.tag().to_string(),
                attribute: name.to_string(),
            })
    }

    /// Child element that generation cannot proceed without.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::MissingChild`] if it is absent.
    fn required_child(&self, tag: &str) -> ApplicationResult<Self> {
        self.child(tag).ok_or_else(|| ApplicationError::MissingChild {
            parent: self.tag().to_string(),
            child: tag.to_string(),
        })
    }
}
