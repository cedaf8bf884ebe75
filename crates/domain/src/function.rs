//! Command signatures.
//!
//! A [`Function`] is the fully reconstructed C signature of one registry
//! command. Aliases are materialized as their own `Function` carrying the
//! target's return type and arguments.

use std::fmt;

/// A single command parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// C type text, including qualifiers and pointer stars (`const VkAllocationCallbacks*`).
    pub ty: String,
    /// Parameter name.
    pub name: String,
}

impl Argument {
    /// Creates a new argument.
    #[must_use]
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// A registry command with its return type and ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// Full command name, e.g. `vkCreateInstance`.
    pub name: String,
    /// Return type text.
    pub return_type: String,
    /// Arguments in declaration order.
    pub args: Vec<Argument>,
}

impl Function {
    /// Creates a new function descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, return_type: impl Into<String>, args: Vec<Argument>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            args,
        }
    }

    /// Returns a copy of this signature under another name.
    ///
    /// Used to materialize alias commands.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: self.return_type.clone(),
            args: self.args.clone(),
        }
    }

    /// Type of the first argument, if the command takes any.
    #[must_use]
    pub fn first_arg_type(&self) -> Option<&str> {
        self.args.first().map(|arg| arg.ty.as_str())
    }
}

/// Strips the fixed API prefix from a command name.
///
/// `vkCreateInstance` with a prefix length of 2 becomes `CreateInstance`.
/// Names shorter than the prefix yield an empty string.
#[must_use]
pub fn strip_prefix(command: &str, prefix_len: usize) -> &str {
    command
        .char_indices()
        .nth(prefix_len)
        .map_or("", |(idx, _)| &command[idx..])
}
