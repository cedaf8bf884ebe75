//! Dispatchgen Infrastructure - Adapters and code generators
//!
//! This crate provides the `xmltree` registry adapter, the text generators
//! for the dispatch table, loaders and mixins, and the file system sink.

pub mod codegen;
pub mod generate;
pub mod persistence;
pub mod registry;
pub mod serialization;

pub use codegen::{Artifacts, render_artifacts};
pub use generate::{GenerateError, GenerationPaths, GenerationReport, generate_files, load_model};
pub use persistence::FileSystemSink;
pub use registry::{XmlNode, parse_registry};
pub use serialization::{SerializationError, from_json, load_settings};
