//! Application use cases (pipeline orchestration).

mod build_dispatch_model;

pub use build_dispatch_model::*;
