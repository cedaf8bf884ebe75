//! Mixin template generator.
//!
//! Each mixin is a CRTP template contributing one forwarding method per
//! command of its scope. The host type `Derived` supplies the dispatch
//! table, its handle and the allocation callbacks through accessors, so
//! those arguments disappear from the method signatures.

use dispatchgen_domain::{Argument, CommandScope, DispatchModel, Function, GeneratorSettings, strip_prefix};

/// Shape of one mixin template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixinSpec<'a> {
    /// Template name.
    pub name: &'a str,
    /// Scope whose commands get a method.
    pub scope: CommandScope,
    /// Handle type replaced by the host's accessor.
    pub handle_type: &'a str,
    /// Host accessor returning the handle.
    pub handle_accessor: &'a str,
}

impl<'a> MixinSpec<'a> {
    /// Instance mixin.
    #[must_use]
    pub fn instance(settings: &'a GeneratorSettings) -> Self {
        Self {
            name: &settings.instance_mixin,
            scope: CommandScope::Instance,
            handle_type: &settings.instance_handle,
            handle_accessor: &settings.instance_accessor,
        }
    }

    /// Physical-device mixin.
    #[must_use]
    pub fn physical_device(settings: &'a GeneratorSettings) -> Self {
        Self {
            name: &settings.physical_device_mixin,
            scope: CommandScope::PhysicalDevice,
            handle_type: &settings.physical_device_handle,
            handle_accessor: &settings.physical_device_accessor,
        }
    }

    /// Device mixin.
    #[must_use]
    pub fn device(settings: &'a GeneratorSettings) -> Self {
        Self {
            name: &settings.device_mixin,
            scope: CommandScope::Device,
            handle_type: &settings.device_handle,
            handle_accessor: &settings.device_accessor,
        }
    }
}

/// Generates mixin templates.
pub struct MixinEmitter;

impl MixinEmitter {
    /// Emits the whole template for `spec`.
    #[must_use]
    pub fn emit(model: &DispatchModel, spec: &MixinSpec<'_>, settings: &GeneratorSettings) -> String {
        let sections = model
            .sections(&[spec.scope])
            .into_iter()
            .map(|(condition, functions)| {
                let methods = functions
                    .iter()
                    .map(|function| Self::method(function, spec, settings))
                    .collect::<Vec<_>>()
                    .join("\n\n");
                super::guard(condition.expression, &methods)
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        [
            "template <class Derived>".to_string(),
            format!("struct {} {{", spec.name),
            sections,
            "};".to_string(),
        ]
        .join("\n")
    }

    /// Host accessor call standing in for `arg`, if the host supplies it.
    fn substitute(arg: &Argument, spec: &MixinSpec<'_>, settings: &GeneratorSettings) -> Option<String> {
        if arg.ty == spec.handle_type {
            Some(format!("impl->{}()", spec.handle_accessor))
        } else if arg.ty == settings.allocator_type {
            Some(format!("impl->{}()", settings.allocator_accessor))
        } else {
            None
        }
    }

    /// Emits one forwarding method.
    ///
    /// A null table entry trips the `assert`: it means the command was not
    /// loaded for this handle, which callers cannot recover from.
    #[must_use]
    pub fn method(function: &Function, spec: &MixinSpec<'_>, settings: &GeneratorSettings) -> String {
        let name = strip_prefix(&function.name, settings.command_prefix_len);

        let params = function
            .args
            .iter()
            .filter(|arg| Self::substitute(arg, spec, settings).is_none())
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        let call_args = function
            .args
            .iter()
            .map(|arg| Self::substitute(arg, spec, settings).unwrap_or_else(|| arg.name.clone()))
            .collect::<Vec<_>>()
            .join(", ");

        [
            format!("   {} {name}({params}) const {{", function.return_type),
            "      const auto* impl = static_cast<const Derived*>(this);".to_string(),
            format!("      auto* func = impl->{}().{name};", settings.table_accessor),
            format!("      assert(func && \"{} not loaded!\");", function.name),
            format!("      return func({call_args});"),
            "   }".to_string(),
        ]
        .join("\n")
    }
}
