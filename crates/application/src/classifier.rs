//! Command classification.

use dispatchgen_domain::{Classification, CommandScope, CommandSet, Function, GeneratorSettings};
use indexmap::IndexMap;

/// Assigns every command to the instance, physical-device or device scope.
///
/// The first argument's handle type decides, except for the configured
/// instance overrides (the device proc-address getter and the instance
/// constructor), which resolve at instance scope without taking an instance.
/// An alias of an override is an override too.
#[derive(Debug, Clone, Copy)]
pub struct CommandClassifier<'a> {
    settings: &'a GeneratorSettings,
    aliases: Option<&'a IndexMap<String, String>>,
}

impl<'a> CommandClassifier<'a> {
    /// Creates a classifier using the handle names from `settings`.
    #[must_use]
    pub const fn new(settings: &'a GeneratorSettings) -> Self {
        Self {
            settings,
            aliases: None,
        }
    }

    /// Uses `aliases` (alias name to target) to extend the overrides.
    #[must_use]
    pub const fn with_aliases(mut self, aliases: &'a IndexMap<String, String>) -> Self {
        self.aliases = Some(aliases);
        self
    }

    fn is_override(&self, name: &str) -> bool {
        self.settings.is_instance_override(name)
            || self
                .aliases
                .and_then(|aliases| aliases.get(name))
                .is_some_and(|target| self.settings.is_instance_override(target))
    }

    /// Returns true if `function` is resolved and exposed at instance scope.
    #[must_use]
    pub fn is_instance(&self, function: &Function) -> bool {
        function.first_arg_type() == Some(self.settings.instance_handle.as_str())
            || self.is_override(&function.name)
    }

    /// Returns true if `function` takes the physical-device handle first.
    #[must_use]
    pub fn is_physical_device(&self, function: &Function) -> bool {
        function.first_arg_type() == Some(self.settings.physical_device_handle.as_str())
    }

    /// Returns true if `function` is neither instance nor physical-device scoped.
    ///
    /// Commands without arguments land here.
    #[must_use]
    pub fn is_device(&self, function: &Function) -> bool {
        !self.is_instance(function) && !self.is_physical_device(function)
    }

    /// The single scope of `function`; instance wins over physical device.
    #[must_use]
    pub fn classify(&self, function: &Function) -> CommandScope {
        if self.is_instance(function) {
            CommandScope::Instance
        } else if self.is_physical_device(function) {
            CommandScope::PhysicalDevice
        } else {
            CommandScope::Device
        }
    }

    /// Classifies every command of `commands`.
    #[must_use]
    pub fn classify_all(&self, commands: &CommandSet) -> Classification {
        let mut classification = Classification::new();
        for function in commands.iter() {
            classification.assign(function.name.as_str(), self.classify(function));
        }
        classification
    }
}
