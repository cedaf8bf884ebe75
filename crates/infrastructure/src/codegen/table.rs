//! Dispatch table struct generator.

use dispatchgen_domain::{ConditionBuckets, GeneratorSettings, strip_prefix};

/// Generates the dispatch table declaration.
pub struct TableEmitter;

impl TableEmitter {
    /// Emits one function-pointer field per bucketed command, each bucket
    /// wrapped in its `#if` guard, inside a single `typedef struct`.
    ///
    /// Fields exist for every bucketed command, defined or not, since only
    /// the function-pointer typedef is referenced.
    #[must_use]
    pub fn emit(conditions: &ConditionBuckets, settings: &GeneratorSettings) -> String {
        let sections = conditions
            .iter()
            .map(|condition| {
                let fields = condition
                    .commands
                    .iter()
                    .map(|command| {
                        format!(
                            "    {}{command} {};",
                            settings.pfn_prefix,
                            strip_prefix(command, settings.command_prefix_len)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                super::guard(condition.expression, &fields)
            })
            .collect::<Vec<_>>()
            .join("\n");

        [
            "typedef struct {".to_string(),
            sections,
            format!("}} {};", settings.table_name),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_emit_guarded_fields() {
        let mut conditions = ConditionBuckets::new();
        conditions.insert("VK_VERSION_1_0", "vkCreateInstance");
        conditions.insert("VK_VERSION_1_0", "vkDestroyInstance");
        conditions.insert("VK_KHR_surface", "vkDestroySurfaceKHR");

        let table = TableEmitter::emit(&conditions, &GeneratorSettings::default());
        assert_eq!(
            table,
            "typedef struct {
#if VK_VERSION_1_0
    PFN_vkCreateInstance CreateInstance;
    PFN_vkDestroyInstance DestroyInstance;
#endif // VK_VERSION_1_0
#if VK_KHR_surface
    PFN_vkDestroySurfaceKHR DestroySurfaceKHR;
#endif // VK_KHR_surface
} DispatchTable;"
        );
    }

    #[test]
    fn test_emit_empty_table() {
        let table = TableEmitter::emit(&ConditionBuckets::new(), &GeneratorSettings::default());
        assert_eq!(table, "typedef struct {\n\n} DispatchTable;");
    }
}
