//! Loader function generator.

use dispatchgen_domain::{CommandScope, DispatchModel, GeneratorSettings, strip_prefix};

/// Shape of one loader function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderSpec<'a> {
    /// Loader function name.
    pub name: &'a str,
    /// Command whose function-pointer type the resolver parameter has.
    pub resolver: &'a str,
    /// Handle type passed to the resolver.
    pub handle_type: &'a str,
    /// Handle parameter name.
    pub handle_param: &'a str,
    /// Scopes whose commands this loader resolves.
    pub scopes: Vec<CommandScope>,
}

impl<'a> LoaderSpec<'a> {
    /// Instance loader: instance and physical-device commands through the
    /// instance resolver.
    #[must_use]
    pub fn instance(settings: &'a GeneratorSettings) -> Self {
        Self {
            name: &settings.load_instance_fn,
            resolver: &settings.instance_resolver,
            handle_type: &settings.instance_handle,
            handle_param: &settings.instance_param,
            scopes: Self::scopes_where(CommandScope::loads_with_instance),
        }
    }

    /// Device loader: device commands through the device resolver.
    #[must_use]
    pub fn device(settings: &'a GeneratorSettings) -> Self {
        Self {
            name: &settings.load_device_fn,
            resolver: &settings.device_resolver,
            handle_type: &settings.device_handle,
            handle_param: &settings.device_param,
            scopes: Self::scopes_where(|scope| !scope.loads_with_instance()),
        }
    }

    fn scopes_where(predicate: impl Fn(CommandScope) -> bool) -> Vec<CommandScope> {
        CommandScope::all()
            .iter()
            .copied()
            .filter(|scope| predicate(*scope))
            .collect()
    }
}

/// Generates loader prototypes and definitions.
///
/// A loader assigns `table->Field = (PFN_cmd) proc(handle, "cmd")` for each
/// command of its scopes. Commands the runtime does not support resolve to
/// null, and calling only one loader leaves the other half of the table
/// untouched.
pub struct LoaderEmitter;

impl LoaderEmitter {
    fn signature(spec: &LoaderSpec<'_>, settings: &GeneratorSettings) -> String {
        format!(
            "void {}({}{} proc, {} {}, {}* table)",
            spec.name,
            settings.pfn_prefix,
            spec.resolver,
            spec.handle_type,
            spec.handle_param,
            settings.table_name
        )
    }

    /// Emits the loader's prototype.
    #[must_use]
    pub fn prototype(spec: &LoaderSpec<'_>, settings: &GeneratorSettings) -> String {
        format!("{};", Self::signature(spec, settings))
    }

    /// Emits the loader's definition.
    #[must_use]
    pub fn emit(model: &DispatchModel, spec: &LoaderSpec<'_>, settings: &GeneratorSettings) -> String {
        let body = model
            .sections(&spec.scopes)
            .into_iter()
            .map(|(condition, functions)| {
                let assignments = functions
                    .iter()
                    .map(|function| {
                        format!(
                            "    table->{} = ({}{}) proc({}, \"{}\");",
                            strip_prefix(&function.name, settings.command_prefix_len),
                            settings.pfn_prefix,
                            function.name,
                            spec.handle_param,
                            function.name
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                super::guard(condition.expression, &assignments)
            })
            .collect::<Vec<_>>()
            .join("\n");

        [
            format!("{} {{", Self::signature(spec, settings)),
            body,
            "};".to_string(),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatchgen_domain::{Argument, Function};
    use pretty_assertions::assert_eq;

    fn model() -> DispatchModel {
        let mut model = DispatchModel::default();
        let commands = [
            ("vkCreateInstance", "const VkInstanceCreateInfo*", CommandScope::Instance),
            ("vkGetPhysicalDeviceFeatures", "VkPhysicalDevice", CommandScope::PhysicalDevice),
            ("vkDestroyDevice", "VkDevice", CommandScope::Device),
        ];
        for (name, first, scope) in commands {
            model
                .commands
                .insert(Function::new(name, "void", vec![Argument::new(first, "handle")]));
            model.classification.assign(name, scope);
            model.conditions.insert("VK_VERSION_1_0", name);
        }
        model.conditions.insert("VK_KHR_undefined", "vkUndefinedKHR");
        model
    }

    #[test]
    fn test_loaders_partition_scopes() {
        let settings = GeneratorSettings::default();
        assert_eq!(
            LoaderSpec::instance(&settings).scopes,
            vec![CommandScope::Instance, CommandScope::PhysicalDevice]
        );
        assert_eq!(LoaderSpec::device(&settings).scopes, vec![CommandScope::Device]);
    }

    #[test]
    fn test_prototypes() {
        let settings = GeneratorSettings::default();
        assert_eq!(
            LoaderEmitter::prototype(&LoaderSpec::instance(&settings), &settings),
            "void loadInstanceFunctions(PFN_vkGetInstanceProcAddr proc, VkInstance instance, DispatchTable* table);"
        );
        assert_eq!(
            LoaderEmitter::prototype(&LoaderSpec::device(&settings), &settings),
            "void loadDeviceFunctions(PFN_vkGetDeviceProcAddr proc, VkDevice device, DispatchTable* table);"
        );
    }

    #[test]
    fn test_instance_loader_includes_physical_device_commands() {
        let settings = GeneratorSettings::default();
        let loader = LoaderEmitter::emit(&model(), &LoaderSpec::instance(&settings), &settings);
        assert_eq!(
            loader,
            r#"void loadInstanceFunctions(PFN_vkGetInstanceProcAddr proc, VkInstance instance, DispatchTable* table) {
#if VK_VERSION_1_0
    table->CreateInstance = (PFN_vkCreateInstance) proc(instance, "vkCreateInstance");
    table->GetPhysicalDeviceFeatures = (PFN_vkGetPhysicalDeviceFeatures) proc(instance, "vkGetPhysicalDeviceFeatures");
#endif // VK_VERSION_1_0
};"#
        );
    }

    #[test]
    fn test_device_loader() {
        let settings = GeneratorSettings::default();
        let loader = LoaderEmitter::emit(&model(), &LoaderSpec::device(&settings), &settings);
        assert_eq!(
            loader,
            r#"void loadDeviceFunctions(PFN_vkGetDeviceProcAddr proc, VkDevice device, DispatchTable* table) {
#if VK_VERSION_1_0
    table->DestroyDevice = (PFN_vkDestroyDevice) proc(device, "vkDestroyDevice");
#endif // VK_VERSION_1_0
};"#
        );
    }

    #[test]
    fn test_empty_loader() {
        let settings = GeneratorSettings::default();
        let loader = LoaderEmitter::emit(
            &DispatchModel::default(),
            &LoaderSpec::device(&settings),
            &settings,
        );
        assert_eq!(
            loader,
            "void loadDeviceFunctions(PFN_vkGetDeviceProcAddr proc, VkDevice device, DispatchTable* table) {\n\n};"
        );
    }
}
