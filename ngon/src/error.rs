//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NgonError {
    /// Number of the given vertices does not match the vertex count of the N-gon.
    ///
    /// When a vertex buffer is split into N-gons, `actual` is the size of the incomplete trailing chunk.
    #[error("invalid number of vertices: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Vertex count of the N-gon type.
        expected: usize,
        /// Number of vertices that were provided.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = NgonError::DimensionMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid number of vertices: expected 4, got 3"
        );
    }
}
