//! Build dispatch model use case.

use dispatchgen_domain::{CommandScope, DispatchModel, GeneratorSettings};
use tracing::{debug, warn};

use crate::classifier::CommandClassifier;
use crate::conditions::canonicalize;
use crate::error::ApplicationResult;
use crate::ports::RegistryNode;
use crate::registry::{expand_aliases, parse_commands};
use crate::requirements::collect_requirements;

/// Use case turning a parsed registry into a [`DispatchModel`].
///
/// Runs the whole core pipeline once: requirement collection, command
/// parsing, alias expansion, condition canonicalization and classification.
pub struct BuildDispatchModel<'a> {
    settings: &'a GeneratorSettings,
}

impl<'a> BuildDispatchModel<'a> {
    /// Creates a new `BuildDispatchModel` use case.
    #[must_use]
    pub const fn new(settings: &'a GeneratorSettings) -> Self {
        Self { settings }
    }

    /// Builds the model from the registry's root element.
    ///
    /// # Errors
    /// - Returns error if the settings are invalid
    /// - Returns error if the registry is missing a required element or attribute
    /// - Returns error if an alias cannot be resolved to a concrete command
    pub fn execute<N: RegistryNode>(&self, root: &N) -> ApplicationResult<DispatchModel> {
        self.settings.validate()?;

        let requirements = collect_requirements(root)?;
        let registry = parse_commands(root, &self.settings.api)?;
        let aliases = registry.aliases.clone();
        let commands = expand_aliases(registry)?;
        let conditions = canonicalize(&requirements);
        let classification = CommandClassifier::new(self.settings)
            .with_aliases(&aliases)
            .classify_all(&commands);

        for name in conditions.all_commands() {
            if !commands.contains(name) {
                warn!(command = name, "required command has no definition; it gets a table field only");
            }
        }

        for scope in CommandScope::all() {
            debug!(
                scope = scope.display_name(),
                commands = classification.count(*scope),
                "classified commands"
            );
        }

        Ok(DispatchModel {
            commands,
            conditions,
            classification,
        })
    }
}
