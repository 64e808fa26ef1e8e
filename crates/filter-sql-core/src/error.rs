//! Error types for filter translation.

use thiserror::Error;

/// Translation errors. Every variant is fatal for the clause being built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// A node kind with no SQL translation.
    #[error("unsupported expression node: {0}")]
    UnsupportedNode(String),

    /// A binary or unary operator outside the token tables.
    #[error("unsupported operator: {0}")]
    UnsupportedOperator(String),

    /// An unknown function, or a known one called with the wrong arity.
    #[error("unsupported function: {name} with {arity} argument(s)")]
    UnsupportedFunction {
        /// Function name as written in the filter.
        name: String,
        /// Number of parameters in the call.
        arity: usize,
    },

    /// The column resolver could not map a property.
    #[error("unresolved column for property: {0}")]
    UnresolvedColumn(String),
}

/// Result type alias for translation.
pub type Result<T> = std::result::Result<T, TranslateError>;
