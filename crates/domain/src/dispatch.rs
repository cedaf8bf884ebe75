//! The generator's intermediate representation.

use crate::command_set::CommandSet;
use crate::condition::{CanonicalCondition, ConditionBuckets};
use crate::function::Function;
use crate::scope::{Classification, CommandScope};

/// Everything the code generators need: signatures, guards and scopes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DispatchModel {
    /// Concrete and alias commands.
    pub commands: CommandSet,
    /// Commands grouped by their rendered condition.
    pub conditions: ConditionBuckets,
    /// Scope of every command in `commands`.
    pub classification: Classification,
}

impl DispatchModel {
    /// Guarded command signatures of the given scopes, bucket by bucket.
    ///
    /// Buckets with no matching command are omitted; commands lacking a
    /// definition are skipped.
    #[must_use]
    pub fn sections(&self, scopes: &[CommandScope]) -> Vec<(CanonicalCondition<'_>, Vec<&Function>)> {
        self.conditions
            .iter()
            .filter_map(|condition| {
                let members: Vec<&Function> = condition
                    .commands
                    .iter()
                    .filter(|name| self.classification.is_in(name, scopes))
                    .filter_map(|name| self.commands.get(name))
                    .collect();
                (!members.is_empty()).then_some((condition, members))
            })
            .collect()
    }
}
