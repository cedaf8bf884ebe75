//! dispatchgen domain - core generator types
//!
//! This crate defines the data model shared by the registry reader, the
//! condition pipeline and the code generators.
//! All types here are pure Rust with no I/O dependencies.

pub mod command_set;
pub mod condition;
pub mod dispatch;
pub mod error;
pub mod function;
pub mod requirement;
pub mod scope;
pub mod settings;

pub use command_set::CommandSet;
pub use condition::{CanonicalCondition, ConditionBuckets};
pub use dispatch::DispatchModel;
pub use error::{DomainError, DomainResult};
pub use function::{Argument, Function, strip_prefix};
pub use requirement::{CommandRequirements, RequirementGroup, render_groups};
pub use scope::{Classification, CommandScope};
pub use settings::GeneratorSettings;
