//! Registry model.
//!
//! Reads command signatures and aliases out of the registry's `commands`
//! container, then materializes aliases as copies of their targets.

mod alias;
mod model;

pub use alias::expand_aliases;
pub use model::{ParsedCommand, RegistryCommands, parse_command, parse_commands, parse_type};
