//! Canonical preprocessor conditions.
//!
//! Commands sharing the exact same rendered condition are grouped into one
//! bucket so that every emitted artifact wraps them in a single `#if` block.
//! Bucket order is the order in which each condition was first produced.

use indexmap::IndexMap;

/// A rendered condition and the commands it guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalCondition<'a> {
    /// Boolean expression, e.g. `VK_VERSION_1_0` or `A || A && B`.
    pub expression: &'a str,
    /// Guarded commands in first-seen order.
    pub commands: &'a [String],
}

/// Ordered map from condition expression to the commands it guards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConditionBuckets {
    buckets: IndexMap<String, Vec<String>>,
}

impl ConditionBuckets {
    /// Creates an empty set of buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `command` under `expression`, creating the bucket if needed.
    pub fn insert(&mut self, expression: impl Into<String>, command: impl Into<String>) {
        self.buckets
            .entry(expression.into())
            .or_default()
            .push(command.into());
    }

    /// Iterates buckets in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = CanonicalCondition<'_>> {
        self.buckets
            .iter()
            .map(|(expression, commands)| CanonicalCondition {
                expression,
                commands,
            })
    }

    /// Returns the expression guarding `command`, if any.
    #[must_use]
    pub fn condition_of(&self, command: &str) -> Option<&str> {
        self.buckets
            .iter()
            .find(|(_, commands)| commands.iter().any(|c| c == command))
            .map(|(expression, _)| expression.as_str())
    }

    /// Commands guarded by `expression`.
    #[must_use]
    pub fn commands(&self, expression: &str) -> Option<&[String]> {
        self.buckets.get(expression).map(Vec::as_slice)
    }

    /// Every bucketed command, bucket by bucket.
    pub fn all_commands(&self) -> impl Iterator<Item = &str> {
        self.buckets.values().flatten().map(String::as_str)
    }

    /// Number of distinct conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if no command is guarded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
