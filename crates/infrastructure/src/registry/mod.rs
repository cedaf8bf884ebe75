//! Registry document adapters.

mod xml;

pub use xml::{XmlNode, parse_registry};
