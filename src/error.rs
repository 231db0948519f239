//! Error types for element construction and evaluation.

use thiserror::Error;

/// Result type alias using the crate Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or evaluating an element.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Only intervals and triangles are supported.
    #[error("unsupported cell dimension: {0}")]
    UnsupportedDimension(usize),

    /// Point array with the wrong number of coordinates per point.
    #[error("points have {found} coordinates but the cell has dimension {expected}")]
    PointDimension { expected: usize, found: usize },

    /// Node count does not match the size of the polynomial space.
    #[error("{found} nodes cannot determine the degree {degree} space of dimension {expected}")]
    NodeCount {
        degree: usize,
        expected: usize,
        found: usize,
    },

    /// Vandermonde matrix could not be inverted.
    #[error("singular node set: {0}")]
    SingularNodes(String),

    /// Vandermonde matrix is invertible but too badly conditioned to trust.
    #[error("ill-conditioned node set: condition estimate {condition:e} exceeds {limit:e}")]
    IllConditioned { condition: f64, limit: f64 },

    /// Conditioning limits that are out of range or out of order.
    #[error("invalid basis options: {0}")]
    InvalidOptions(String),

    /// Entity-node index that does not partition the nodes.
    #[error("invalid entity nodes: {0}")]
    EntityNodes(String),

    /// Vector-valued function returned the wrong number of components.
    #[error("function returned {found} components, expected {expected}")]
    ValueShape { expected: usize, found: usize },
}
