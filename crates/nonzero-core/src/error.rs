//! Error types for the nonzero-core library.
//!
//! A scan over plain integers cannot fail. Errors only arise when elements
//! come from a dynamic source (such as a Python list) and one of them has no
//! integer value to compare against zero.

use thiserror::Error;

/// Result type alias for nonzero operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all nonzero operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Element cannot be compared for equality with integer zero
    #[error("element at index {index} cannot be compared with zero: expected an integer, got '{type_name}'")]
    InvalidElement {
        /// Position of the offending element in the sequence
        index: usize,
        /// Type name of the offending element as reported by its source
        type_name: String,
    },

    /// Scan went past the configured element cap without reaching a decision
    #[error("sequence exceeds the limit of {limit} elements")]
    TooManyElements {
        /// Configured maximum number of elements
        limit: usize,
    },

    /// Generic internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Creates a new invalid element error
    pub fn invalid_element(index: usize, type_name: impl Into<String>) -> Self {
        Self::InvalidElement {
            index,
            type_name: type_name.into(),
        }
    }

    /// Creates a new element cap error
    pub fn too_many_elements(limit: usize) -> Self {
        Self::TooManyElements { limit }
    }

    /// Creates a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if the error was caused by the caller's input rather than
    /// by the checker itself
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidElement { .. } | Self::TooManyElements { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_element(3, "float");
        assert!(err.to_string().contains("index 3"));
        assert!(err.to_string().contains("'float'"));

        let err = Error::too_many_elements(16);
        assert_eq!(err.to_string(), "sequence exceeds the limit of 16 elements");
    }

    #[test]
    fn test_is_input_error() {
        assert!(Error::invalid_element(0, "str").is_input_error());
        assert!(Error::too_many_elements(1).is_input_error());
        assert!(!Error::internal("test").is_input_error());
    }
}
