//! Generator settings.
//!
//! Names used by the generated artifacts. The defaults target the Vulkan
//! registry; a JSON settings file may override any subset of fields.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Naming and classification settings for one generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// API identifier used to filter `api`-tagged commands and parameters.
    pub api: String,
    /// Include directive target for the API header, brackets included.
    pub api_include: String,
    /// Prefix of the API's function-pointer typedefs.
    pub pfn_prefix: String,
    /// Length of the command-name prefix dropped for field and method names.
    pub command_prefix_len: usize,

    /// Instance handle type.
    pub instance_handle: String,
    /// Physical-device handle type.
    pub physical_device_handle: String,
    /// Device handle type.
    pub device_handle: String,
    /// Commands resolved at instance scope regardless of their first argument.
    pub instance_overrides: Vec<String>,
    /// Allocator callback type replaced by the host accessor in mixins.
    pub allocator_type: String,

    /// Resolver used by the instance loader.
    pub instance_resolver: String,
    /// Resolver used by the device loader.
    pub device_resolver: String,
    /// Handle parameter name of the instance loader.
    pub instance_param: String,
    /// Handle parameter name of the device loader.
    pub device_param: String,

    /// Dispatch table struct name.
    pub table_name: String,
    /// Instance loader function name.
    pub load_instance_fn: String,
    /// Device loader function name.
    pub load_device_fn: String,

    /// Instance mixin template name.
    pub instance_mixin: String,
    /// Physical-device mixin template name.
    pub physical_device_mixin: String,
    /// Device mixin template name.
    pub device_mixin: String,

    /// Host accessor returning the dispatch table.
    pub table_accessor: String,
    /// Host accessor returning the instance handle.
    pub instance_accessor: String,
    /// Host accessor returning the physical-device handle.
    pub physical_device_accessor: String,
    /// Host accessor returning the device handle.
    pub device_accessor: String,
    /// Host accessor returning the allocation callbacks.
    pub allocator_accessor: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            api: "vulkan".to_string(),
            api_include: "<vulkan/vulkan.h>".to_string(),
            pfn_prefix: "PFN_".to_string(),
            command_prefix_len: 2,
            instance_handle: "VkInstance".to_string(),
            physical_device_handle: "VkPhysicalDevice".to_string(),
            device_handle: "VkDevice".to_string(),
            instance_overrides: vec![
                "vkGetDeviceProcAddr".to_string(),
                "vkCreateInstance".to_string(),
            ],
            allocator_type: "const VkAllocationCallbacks*".to_string(),
            instance_resolver: "vkGetInstanceProcAddr".to_string(),
            device_resolver: "vkGetDeviceProcAddr".to_string(),
            instance_param: "instance".to_string(),
            device_param: "device".to_string(),
            table_name: "DispatchTable".to_string(),
            load_instance_fn: "loadInstanceFunctions".to_string(),
            load_device_fn: "loadDeviceFunctions".to_string(),
            instance_mixin: "InstanceFunctionsMixin".to_string(),
            physical_device_mixin: "PhysicalDeviceFunctionsMixin".to_string(),
            device_mixin: "DeviceFunctionsMixin".to_string(),
            table_accessor: "getDispatchTable".to_string(),
            instance_accessor: "getInstance".to_string(),
            physical_device_accessor: "getPhysicalDevice".to_string(),
            device_accessor: "getDevice".to_string(),
            allocator_accessor: "getAllocator".to_string(),
        }
    }
}

impl GeneratorSettings {
    /// Returns a copy targeting another API identifier.
    #[must_use]
    pub fn with_api(mut self, api: impl Into<String>) -> Self {
        self.api = api.into();
        self
    }

    /// Checks that every identifier is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSettings`] naming the first empty field.
    pub fn validate(&self) -> DomainResult<()> {
        let fields = [
            ("api", &self.api),
            ("api_include", &self.api_include),
            ("pfn_prefix", &self.pfn_prefix),
            ("instance_handle", &self.instance_handle),
            ("physical_device_handle", &self.physical_device_handle),
            ("device_handle", &self.device_handle),
            ("allocator_type", &self.allocator_type),
            ("instance_resolver", &self.instance_resolver),
            ("device_resolver", &self.device_resolver),
            ("instance_param", &self.instance_param),
            ("device_param", &self.device_param),
            ("table_name", &self.table_name),
            ("load_instance_fn", &self.load_instance_fn),
            ("load_device_fn", &self.load_device_fn),
            ("instance_mixin", &self.instance_mixin),
            ("physical_device_mixin", &self.physical_device_mixin),
            ("device_mixin", &self.device_mixin),
            ("table_accessor", &self.table_accessor),
            ("instance_accessor", &self.instance_accessor),
            ("physical_device_accessor", &self.physical_device_accessor),
            ("device_accessor", &self.device_accessor),
            ("allocator_accessor", &self.allocator_accessor),
        ];

        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(DomainError::InvalidSettings(format!(
                "`{field}` must not be empty"
            )));
        }

        if self.instance_overrides.iter().any(|name| name.trim().is_empty()) {
            return Err(DomainError::InvalidSettings(
                "`instance_overrides` contains an empty command name".to_string(),
            ));
        }

        Ok(())
    }

    /// Returns true if `command` is forced to instance scope.
    #[must_use]
    pub fn is_instance_override(&self, command: &str) -> bool {
        self.instance_overrides.iter().any(|name| name == command)
    }
}
