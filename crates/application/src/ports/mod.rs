//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the generator core and external systems.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod artifact_sink;
mod registry_node;

pub use artifact_sink::{ArtifactSink, ArtifactSinkError};
pub use registry_node::{NodeContent, RegistryNode};
