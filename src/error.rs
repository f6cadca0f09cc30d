//! Error types for naming operations.

use thiserror::Error;

/// Errors that can occur while detecting or converting identifiers.
///
/// Both lookup failures are ordinary outcomes of user input: callers decide
/// whether to abort, report, or fall back to the identifier's own rendering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NamingError {
    /// The identifier matched none of the candidate conventions.
    #[error("no matching naming convention, invalid identifier '{identifier}'")]
    Unrecognized { identifier: String },

    /// A convention name resolved to nothing in the registry.
    #[error("could not find naming convention '{name}'")]
    UnknownConvention { name: String },

    /// A convention was defined without any alias.
    #[error("naming convention must have at least one alias")]
    EmptyAliases,

    /// A convention matcher failed to compile.
    #[error("invalid naming convention pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl NamingError {
    /// Create an unrecognized identifier error.
    pub fn unrecognized(identifier: impl Into<String>) -> Self {
        Self::Unrecognized {
            identifier: identifier.into(),
        }
    }

    /// Create an unknown convention name error.
    pub fn unknown_convention(name: impl Into<String>) -> Self {
        Self::UnknownConvention { name: name.into() }
    }
}

/// Result type for naming operations.
pub type Result<T, E = NamingError> = std::result::Result<T, E>;
