//! Error types for the Obelus library.
//!
//! All errors are represented by the [`ObelusError`] enum. Compile-time
//! invariant violations ([`ObelusError::UnresolvedParameter`],
//! [`ObelusError::OrphanParameter`]) indicate a bug in a criterion
//! implementation and should be treated as fatal by callers; the other
//! variants are ordinary operational conditions.

use std::io;

use thiserror::Error;

/// The main error type for Obelus operations.
#[derive(Error, Debug)]
pub enum ObelusError {
    /// A criterion of the wrong variant was added to a typed set.
    #[error("criterion type mismatch: set holds {expected}, got {found}")]
    CriterionTypeMismatch {
        /// The variant the set was declared for.
        expected: String,
        /// The variant of the rejected member.
        found: String,
    },

    /// A criteria set with zero top-level nodes was compiled.
    ///
    /// This is a user-facing "add at least one criterion" condition, not a
    /// system fault.
    #[error("empty criteria set: add at least one criterion")]
    EmptyCriteriaSet,

    /// A where-clause placeholder has no bound parameter.
    #[error("unresolved parameter :{0} in compiled where clause")]
    UnresolvedParameter(String),

    /// A bound parameter is never referenced by the where clause.
    #[error("orphan parameter :{0} bound but never referenced")]
    OrphanParameter(String),

    /// A failure reported by the external corpus store.
    #[error("backend execution error: {0}")]
    Backend(String),

    /// Query construction errors (malformed sets, bad arguments, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ObelusError.
pub type Result<T> = std::result::Result<T, ObelusError>;

impl ObelusError {
    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        ObelusError::Query(msg.into())
    }

    /// Create a new backend error.
    pub fn backend<S: Into<String>>(msg: S) -> Self {
        ObelusError::Backend(msg.into())
    }

    /// Create a new type-mismatch error.
    pub fn type_mismatch<S: Into<String>>(expected: S, found: S) -> Self {
        ObelusError::CriterionTypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ObelusError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ObelusError::query("bad group");
        assert_eq!(error.to_string(), "Query error: bad group");

        let error = ObelusError::backend("connection reset");
        assert_eq!(
            error.to_string(),
            "backend execution error: connection reset"
        );

        let error = ObelusError::type_mismatch("LemmaEquals", "PosEquals");
        assert_eq!(
            error.to_string(),
            "criterion type mismatch: set holds LemmaEquals, got PosEquals"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let obelus_error = ObelusError::from(io_error);

        match obelus_error {
            ObelusError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_parameter_errors() {
        assert_eq!(
            ObelusError::UnresolvedParameter("gender1".to_string()).to_string(),
            "unresolved parameter :gender1 in compiled where clause"
        );
        assert_eq!(
            ObelusError::OrphanParameter("pos2".to_string()).to_string(),
            "orphan parameter :pos2 bound but never referenced"
        );
    }
}
