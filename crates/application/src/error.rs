//! Application error types

use dispatchgen_domain::DomainError;
use thiserror::Error;

/// Errors raised while building the dispatch model from a registry.
///
/// Every variant is fatal: generation never emits partial output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// An element lacks a child the generator depends on.
    #[error("malformed registry: <{parent}> has no <{child}> child")]
    MissingChild {
        /// Tag of the incomplete element.
        parent: String,
        /// Tag of the missing child.
        child: String,
    },

    /// An element lacks an attribute the generator depends on.
    #[error("malformed registry: <{element}> has no `{attribute}` attribute")]
    MissingAttribute {
        /// Tag of the incomplete element.
        element: String,
        /// Name of the missing attribute.
        attribute: String,
    },

    /// An alias names a command that was never defined.
    #[error("alias `{alias}` targets unknown command `{target}`")]
    UnresolvedAlias {
        /// Alias command name.
        alias: String,
        /// Missing target name.
        target: String,
    },

    /// An alias names another alias; only single-level aliasing is supported.
    #[error("alias `{alias}` targets `{target}`, which is itself an alias")]
    AliasChain {
        /// Alias command name.
        alias: String,
        /// Target name, itself an alias.
        target: String,
    },
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
