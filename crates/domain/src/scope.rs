//! Command scopes.

use indexmap::IndexMap;

/// The dispatch level a command is resolved and exposed at.
///
/// Every command belongs to exactly one scope. Physical-device commands are
/// loaded through the instance resolver but get their own mixin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandScope {
    /// First argument is the instance handle, or the command is an instance override.
    Instance,
    /// First argument is the physical-device handle.
    PhysicalDevice,
    /// Everything else, including commands without arguments.
    Device,
}

impl CommandScope {
    /// All scopes in emission order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Instance, Self::PhysicalDevice, Self::Device]
    }

    /// Returns true if the instance loader resolves commands of this scope.
    #[must_use]
    pub const fn loads_with_instance(self) -> bool {
        matches!(self, Self::Instance | Self::PhysicalDevice)
    }

    /// Human-readable name for logs.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Instance => "instance",
            Self::PhysicalDevice => "physical device",
            Self::Device => "device",
        }
    }
}

/// Scope assignment for every command of a command set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    scopes: IndexMap<String, CommandScope>,
}

impl Classification {
    /// Creates an empty classification.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the scope of `command`, replacing any earlier assignment.
    pub fn assign(&mut self, command: impl Into<String>, scope: CommandScope) {
        self.scopes.insert(command.into(), scope);
    }

    /// Scope of `command`, if it was classified.
    #[must_use]
    pub fn scope_of(&self, command: &str) -> Option<CommandScope> {
        self.scopes.get(command).copied()
    }

    /// Returns true if `command` was classified into one of `scopes`.
    #[must_use]
    pub fn is_in(&self, command: &str, scopes: &[CommandScope]) -> bool {
        self.scope_of(command).is_some_and(|scope| scopes.contains(&scope))
    }

    /// Commands of one scope, in classification order.
    pub fn commands_in(&self, scope: CommandScope) -> impl Iterator<Item = &str> {
        self.scopes
            .iter()
            .filter(move |(_, s)| **s == scope)
            .map(|(name, _)| name.as_str())
    }

    /// Number of commands in `scope`.
    #[must_use]
    pub fn count(&self, scope: CommandScope) -> usize {
        self.commands_in(scope).count()
    }

    /// Total number of classified commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Returns true if nothing was classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_queries_by_scope() {
        let mut classes = Classification::new();
        classes.assign("vkCreateInstance", CommandScope::Instance);
        classes.assign("vkGetPhysicalDeviceFeatures", CommandScope::PhysicalDevice);
        classes.assign("vkCreateBuffer", CommandScope::Device);

        assert_eq!(classes.count(CommandScope::Device), 1);
        assert!(classes.is_in(
            "vkGetPhysicalDeviceFeatures",
            &[CommandScope::Instance, CommandScope::PhysicalDevice]
        ));
        assert!(!classes.is_in("vkCreateBuffer", &[CommandScope::Instance]));
        assert!(!classes.is_in("vkUnknown", CommandScope::all()));
        assert_eq!(
            classes.commands_in(CommandScope::Instance).collect::<Vec<_>>(),
            vec!["vkCreateInstance"]
        );
    }

    #[test]
    fn test_instance_loader_covers_physical_devices() {
        assert!(CommandScope::Instance.loads_with_instance());
        assert!(CommandScope::PhysicalDevice.loads_with_instance());
        assert!(!CommandScope::Device.loads_with_instance());
    }
}
