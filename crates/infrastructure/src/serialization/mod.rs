//! JSON handling for generator settings.

mod json;

pub use json::*;
