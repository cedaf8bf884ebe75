//! Code generation infrastructure.
//!
//! Pure text generators for the dispatch table header, the loader
//! implementation file and the mixin header. Output is deterministic for a
//! given model and settings.

mod artifacts;
mod loader;
mod mixin;
mod table;

pub use artifacts::{Artifacts, render_artifacts};
pub use loader::{LoaderEmitter, LoaderSpec};
pub use mixin::{MixinEmitter, MixinSpec};
pub use table::TableEmitter;

/// Wraps `body` in an `#if` / `#endif` pair for `condition`.
fn guard(condition: &str, body: &str) -> String {
    format!("#if {condition}\n{body}\n#endif // {condition}")
}
