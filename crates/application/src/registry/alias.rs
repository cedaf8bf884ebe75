//! Alias expansion.

use dispatchgen_domain::{CommandSet, Function};
use tracing::debug;

use super::model::RegistryCommands;
use crate::error::{ApplicationError, ApplicationResult};

/// Materializes every alias as a copy of its target's signature.
///
/// Targets are looked up among concrete commands only: an alias of an alias
/// is rejected rather than followed. Aliases are appended after all concrete
/// commands, in document order.
///
/// # Errors
///
/// Returns [`ApplicationError::AliasChain`] if a target is itself an alias
/// and [`ApplicationError::UnresolvedAlias`] if it is not defined at all.
pub fn expand_aliases(registry: RegistryCommands) -> ApplicationResult<CommandSet> {
    let RegistryCommands {
        mut concrete,
        aliases,
    } = registry;

    let resolved = aliases
        .iter()
        .map(|(alias, target)| match concrete.get(target) {
            Some(function) => Ok(function.renamed(alias)),
            None if aliases.contains_key(target) => Err(ApplicationError::AliasChain {
                alias: alias.clone(),
                target: target.clone(),
            }),
            None => Err(ApplicationError::UnresolvedAlias {
                alias: alias.clone(),
                target: target.clone(),
            }),
        })
        .collect::<ApplicationResult<Vec<Function>>>()?;

    debug!(count = resolved.len(), "expanded command aliases");
    for function in resolved {
        concrete.insert(function);
    }
    Ok(concrete)
}
