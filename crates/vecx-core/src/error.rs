//! Error types for vecx operations.
//!
//! The vector kernels are total: numerical edge cases (zero-length vectors,
//! degenerate angles, division by near-zero) are resolved with fallback
//! values and never produce an [`Error`]. Errors only come from the explicit,
//! checked entry points:
//!
//! - strict string parsing (`"(x, y, z)"` via [`std::str::FromStr`])
//! - checked positional component access (`component(i)`)
//!
//! # Usage
//!
//! ```rust
//! use vecx_core::{Error, Result};
//!
//! fn check_index(index: usize, dimension: usize) -> Result<()> {
//!     if index >= dimension {
//!         return Err(Error::component_out_of_range(index, dimension));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_index(3, 3).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive macro for the error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the checked vecx APIs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A vector string could not be parsed.
    ///
    /// Returned by the strict `FromStr` implementations. The lenient
    /// `from_string_lossy` constructors never fail and yield NaN components
    /// instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vecx_core::Error;
    ///
    /// let err = Error::parse("(1, two)", "component 1 is not a number");
    /// assert!(err.to_string().contains("(1, two)"));
    /// ```
    #[error("cannot parse vector from {input:?}: {reason}")]
    Parse {
        /// Offending input text
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// Positional component access past the vector's dimension.
    #[error("component index {index} out of range for {dimension}-component vector")]
    ComponentOutOfRange {
        /// Requested index
        index: usize,
        /// Number of components of the vector
        dimension: usize,
    },
}

impl Error {
    /// Creates an [`Error::Parse`] error.
    #[inline]
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::ComponentOutOfRange`] error.
    #[inline]
    pub fn component_out_of_range(index: usize, dimension: usize) -> Self {
        Self::ComponentOutOfRange { index, dimension }
    }

    /// Returns `true` if this is a parse error.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Returns `true` if this is a component index error.
    #[inline]
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::ComponentOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error() {
        let err = Error::parse("(1, x)", "component 1 is not a number");
        let msg = err.to_string();
        assert!(msg.contains("(1, x)"));
        assert!(msg.contains("component 1"));
        assert!(err.is_parse_error());
        assert!(!err.is_range_error());
    }

    #[test]
    fn test_component_out_of_range() {
        let err = Error::component_out_of_range(3, 2);
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains("2-component"));
        assert!(err.is_range_error());
    }
}
