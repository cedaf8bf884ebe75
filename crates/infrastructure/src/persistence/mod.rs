//! Artifact persistence.

mod file_system;

pub use file_system::FileSystemSink;
