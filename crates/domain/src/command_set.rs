//! Ordered command collection.

use indexmap::IndexMap;

use crate::function::Function;

/// Command signatures keyed by name, in definition order.
///
/// Re-inserting a name replaces the signature but keeps its original position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandSet {
    functions: IndexMap<String, Function>,
}

impl CommandSet {
    /// Creates an empty command set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a function, returning the definition it replaced.
    pub fn insert(&mut self, function: Function) -> Option<Function> {
        self.functions.insert(function.name.clone(), function)
    }

    /// Looks up a command by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Returns true if `name` is defined.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Iterates functions in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Function> {
        self.functions.values()
    }

    /// Number of defined commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns true if no command is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl FromIterator<Function> for CommandSet {
    fn from_iter<I: IntoIterator<Item = Function>>(iter: I) -> Self {
        let mut set = Self::new();
        for function in iter {
            set.insert(function);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redefinition_keeps_position() {
        let mut set = CommandSet::new();
        set.insert(Function::new("vkA", "void", Vec::new()));
        set.insert(Function::new("vkB", "void", Vec::new()));
        let replaced = set.insert(Function::new("vkA", "VkResult", Vec::new()));

        assert_eq!(replaced.map(|f| f.return_type), Some("void".to_string()));
        let names: Vec<_> = set.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["vkA", "vkB"]);
        assert_eq!(set.get("vkA").map(|f| f.return_type.as_str()), Some("VkResult"));
    }
}
