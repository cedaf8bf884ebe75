//! Requirement groups.
//!
//! A command is enabled when any one of its requirement groups is satisfied,
//! and a group is satisfied when all of its symbols are defined. Group and
//! symbol order follow the registry document and are never normalized.

use indexmap::IndexMap;

/// Conjunction of symbols that together enable a command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequirementGroup {
    symbols: Vec<String>,
}

impl RequirementGroup {
    /// Starts a group with its root symbol (the feature or extension name).
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            symbols: vec![root.into()],
        }
    }

    /// Appends a symbol to the conjunction.
    pub fn push(&mut self, symbol: impl Into<String>) {
        self.symbols.push(symbol.into());
    }

    /// Builder-style variant of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, symbol: impl Into<String>) -> Self {
        self.push(symbol);
        self
    }

    /// Renders the group as `A && B && C`.
    #[must_use]
    pub fn render(&self) -> String {
        self.symbols.join(" && ")
    }
}

/// Per-command disjunction of requirement groups, in first-seen command order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandRequirements {
    groups: IndexMap<String, Vec<RequirementGroup>>,
}

impl CommandRequirements {
    /// Creates an empty requirement map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `group` to the groups enabling `command`.
    pub fn add(&mut self, command: impl Into<String>, group: RequirementGroup) {
        self.groups.entry(command.into()).or_default().push(group);
    }

    /// Groups enabling `command`, if it was required anywhere.
    #[must_use]
    pub fn get(&self, command: &str) -> Option<&[RequirementGroup]> {
        self.groups.get(command).map(Vec::as_slice)
    }

    /// Iterates commands and their groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[RequirementGroup])> {
        self.groups
            .iter()
            .map(|(name, groups)| (name.as_str(), groups.as_slice()))
    }

    /// Number of commands with at least one group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if no command was required.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Renders a disjunction of groups as `A && B || C`.
#[must_use]
pub fn render_groups(groups: &[RequirementGroup]) -> String {
    groups
        .iter()
        .map(RequirementGroup::render)
        .collect::<Vec<_>>()
        .join(" || ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_renders_conjunction_in_order() {
        let group = RequirementGroup::new("VK_KHR_swapchain").with("VK_VERSION_1_1");
        assert_eq!(group.render(), "VK_KHR_swapchain && VK_VERSION_1_1");
    }

    #[test]
    fn test_groups_render_without_simplification() {
        let groups = vec![RequirementGroup::new("A"), RequirementGroup::new("A").with("B")];
        assert_eq!(render_groups(&groups), "A || A && B");
    }

    #[test]
    fn test_requirements_keep_first_seen_command_order() {
        let mut reqs = CommandRequirements::new();
        reqs.add("vkB", RequirementGroup::new("X"));
        reqs.add("vkA", RequirementGroup::new("X"));
        reqs.add("vkB", RequirementGroup::new("Y"));

        let order: Vec<_> = reqs.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["vkB", "vkA"]);
        assert_eq!(reqs.get("vkB").map(<[_]>::len), Some(2));
        assert_eq!(reqs.get("vkC"), None);
    }
}
