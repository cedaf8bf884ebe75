//! Condition canonicalization.

use dispatchgen_domain::{CommandRequirements, ConditionBuckets, render_groups};
use tracing::debug;

/// Buckets commands by the exact text of their rendered condition.
///
/// The rendering is purely textual: groups joined with `||`, symbols within
/// a group joined with `&&`, in collection order. Equivalent expressions
/// that differ in symbol order land in different buckets. Commands without
/// any requirement group are left out.
#[must_use]
pub fn canonicalize(requirements: &CommandRequirements) -> ConditionBuckets {
    let mut buckets = ConditionBuckets::new();
    for (command, groups) in requirements.iter() {
        if groups.is_empty() {
            continue;
        }
        buckets.insert(render_groups(groups), command);
    }

    debug!(conditions = buckets.len(), "canonicalized command conditions");
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatchgen_domain::RequirementGroup;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identical_conditions_share_a_bucket() {
        let mut requirements = CommandRequirements::new();
        requirements.add("vkCreateInstance", RequirementGroup::new("VK_VERSION_1_0"));
        requirements.add("vkCreateSwapchainKHR", RequirementGroup::new("VK_KHR_swapchain"));
        requirements.add("vkDestroyInstance", RequirementGroup::new("VK_VERSION_1_0"));

        let buckets = canonicalize(&requirements);
        let sections: Vec<_> = buckets
            .iter()
            .map(|c| (c.expression, c.commands.to_vec()))
            .collect();
        assert_eq!(
            sections,
            vec![
                (
                    "VK_VERSION_1_0",
                    vec!["vkCreateInstance".to_string(), "vkDestroyInstance".to_string()]
                ),
                ("VK_KHR_swapchain", vec!["vkCreateSwapchainKHR".to_string()]),
            ]
        );
    }

    #[test]
    fn test_disjunction_is_not_simplified() {
        let mut requirements = CommandRequirements::new();
        requirements.add("vkThing", RequirementGroup::new("A"));
        requirements.add("vkThing", RequirementGroup::new("A").with("B"));

        let buckets = canonicalize(&requirements);
        assert_eq!(buckets.condition_of("vkThing"), Some("A || A && B"));
    }

    #[test]
    fn test_symbol_order_is_significant() {
        let mut requirements = CommandRequirements::new();
        requirements.add("vkOne", RequirementGroup::new("A").with("B"));
        requirements.add("vkTwo", RequirementGroup::new("B").with("A"));

        let buckets = canonicalize(&requirements);
        assert_eq!(buckets.len(), 2);
    }
}
