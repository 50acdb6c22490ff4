//! Error types for path traversal.

use thiserror::Error;

/// Errors raised while writing through a path.
///
/// A path that does not resolve on read is not an error; `get` reports it
/// through its return value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// An intermediate node on the path holds something other than an object.
    #[error("cannot set '{path}': segment '{segment}' needs an object parent, found {found}")]
    PathConflict {
        /// The full path expression being written
        path: String,
        /// The segment that could not be placed under the non-object node
        segment: String,
        /// JSON kind occupying the parent slot
        found: &'static str,
    },
}

impl PathError {
    /// The path expression the error refers to
    pub fn path(&self) -> &str {
        match self {
            PathError::PathConflict { path, .. } => path,
        }
    }

    /// The segment the error refers to
    pub fn segment(&self) -> &str {
        match self {
            PathError::PathConflict { segment, .. } => segment,
        }
    }
}
