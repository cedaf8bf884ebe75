//! In-memory registry nodes for unit tests.

use crate::ports::{NodeContent, RegistryNode};

#[derive(Debug, Clone)]
enum MemContent {
    Element(MemNode),
    Text(String),
}

/// A hand-built registry element.
#[derive(Debug, Clone)]
pub struct MemNode {
    tag: String,
    attributes: Vec<(String, String)>,
    content: Vec<MemContent>,
}

impl MemNode {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            content: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn child(mut self, node: Self) -> Self {
        self.content.push(MemContent::Element(node));
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.content.push(MemContent::Text(text.to_string()));
        self
    }
}

impl<'a> RegistryNode for &'a MemNode {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn content(&self) -> Vec<NodeContent<'_, Self>> {
        let node: &'a MemNode = *self;
        node.content
            .iter()
            .map(|item| match item {
                MemContent::Element(child) => NodeContent::Element(child),
                MemContent::Text(text) => NodeContent::Text(text.as_str()),
            })
            .collect()
    }
}

/// `<name>value</name>`
pub fn name(value: &str) -> MemNode {
    MemNode::new("name").text(value)
}

/// `<type>value</type>`
pub fn ty(value: &str) -> MemNode {
    MemNode::new("type").text(value)
}

/// `<param>{prefix}<type>ty</type>{suffix} <name>name</name></param>`
pub fn param(prefix: &str, type_name: &str, suffix: &str, arg_name: &str) -> MemNode {
    let mut node = MemNode::new("param");
    if !prefix.is_empty() {
        node = node.text(prefix);
    }
    node.child(ty(type_name))
        .text(&format!("{suffix} "))
        .child(name(arg_name))
}

/// `<command><proto><type>ret</type> <name>cmd</name></proto>params...</command>`
pub fn command(ret: &str, cmd: &str, params: Vec<MemNode>) -> MemNode {
    let proto = MemNode::new("proto").child(ty(ret)).text(" ").child(name(cmd));
    params
        .into_iter()
        .fold(MemNode::new("command").child(proto), MemNode::child)
}

/// `<command name="alias" alias="target"/>`
pub fn alias(alias_name: &str, target: &str) -> MemNode {
    MemNode::new("command")
        .attr("name", alias_name)
        .attr("alias", target)
}

/// `<require>` block listing `commands`.
pub fn require(commands: &[&str]) -> MemNode {
    commands.iter().fold(MemNode::new("require"), |node, cmd| {
        node.child(MemNode::new("command").attr("name", cmd))
    })
}
