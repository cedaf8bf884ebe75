//! dispatchgen application - registry model and condition pipeline
//!
//! This crate turns a parsed API registry into a [`DispatchModel`]: command
//! signatures, canonical preprocessor conditions and command scopes. The
//! registry document is reached only through the [`ports::RegistryNode`] port.
//!
//! [`DispatchModel`]: dispatchgen_domain::DispatchModel

pub mod classifier;
pub mod conditions;
pub mod error;
pub mod ports;
pub mod registry;
pub mod requirements;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use classifier::CommandClassifier;
pub use conditions::canonicalize;
pub use error::{ApplicationError, ApplicationResult};
pub use requirements::collect_requirements;
pub use use_cases::BuildDispatchModel;
