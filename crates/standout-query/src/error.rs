//! Error types for the query crate.

use thiserror::Error;

/// Errors that can occur when running query operators.
///
/// Failures raised by caller-supplied closures are never wrapped in this
/// type: the `try_*` operators hand them back unchanged.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The operator needs at least one element and the sequence was empty.
    #[error("'{operator}' called on an empty sequence")]
    EmptySequence { operator: &'static str },

    /// A parameter was structurally invalid for the operator.
    #[error("invalid argument to '{operator}': {reason}")]
    InvalidArgument {
        operator: &'static str,
        reason: &'static str,
    },

    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
}

impl QueryError {
    pub(crate) fn empty(operator: &'static str) -> Self {
        log::debug!("{operator}: empty input, no seed available");
        QueryError::EmptySequence { operator }
    }

    pub(crate) fn invalid(operator: &'static str, reason: &'static str) -> Self {
        log::debug!("{operator}: rejected argument ({reason})");
        QueryError::InvalidArgument { operator, reason }
    }
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
