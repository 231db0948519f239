use std::fmt;

use ndarray::{arr2, Array2, ArrayView2};

use crate::entity_nodes::EntityNodes;
use crate::error::{Error, Result};

/// Edge `i` of the triangle is opposite vertex `i`.
const TRIANGLE_EDGES: [[usize; 2]; 3] = [[1, 2], [0, 2], [0, 1]];

/// Reference simplex an element is defined on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceCell {
    /// The unit interval `[0, 1]`.
    Interval,
    /// The unit right triangle with vertices `(0,0)`, `(1,0)`, `(0,1)`.
    Triangle,
}

impl ReferenceCell {
    pub fn from_dim(dim: usize) -> Result<Self> {
        match dim {
            1 => Ok(ReferenceCell::Interval),
            2 => Ok(ReferenceCell::Triangle),
            _ => Err(Error::UnsupportedDimension(dim)),
        }
    }

    pub fn dim(&self) -> usize {
        match self {
            ReferenceCell::Interval => 1,
            ReferenceCell::Triangle => 2,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.dim() + 1
    }

    /// Vertex coordinates, one row per vertex.
    pub fn vertices(&self) -> Array2<f64> {
        match self {
            ReferenceCell::Interval => arr2(&[[0.0], [1.0]]),
            ReferenceCell::Triangle => arr2(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]),
        }
    }

    /// Number of sub-entities of topological dimension `entity_dim`.
    pub fn entity_count(&self, entity_dim: usize) -> usize {
        match (self, entity_dim) {
            (_, 0) => self.vertex_count(),
            (ReferenceCell::Triangle, 1) => TRIANGLE_EDGES.len(),
            (ReferenceCell::Interval, 1) | (ReferenceCell::Triangle, 2) => 1,
            _ => 0,
        }
    }

    /// Vertex indices of entity `(entity_dim, index)`, in increasing order.
    pub fn entity_vertices(&self, entity_dim: usize, index: usize) -> Option<Vec<usize>> {
        if index >= self.entity_count(entity_dim) {
            return None;
        }
        if entity_dim == 0 {
            return Some(vec![index]);
        }
        if entity_dim == self.dim() {
            return Some((0..self.vertex_count()).collect());
        }
        Some(TRIANGLE_EDGES[index].to_vec())
    }

    /// Check that `points` has one column per coordinate of this cell.
    pub fn check_points(&self, points: &ArrayView2<f64>) -> Result<()> {
        if points.ncols() != self.dim() {
            return Err(Error::PointDimension {
                expected: self.dim(),
                found: points.ncols(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for ReferenceCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceCell::Interval => write!(f, "ReferenceInterval"),
            ReferenceCell::Triangle => write!(f, "ReferenceTriangle"),
        }
    }
}

/// Read and evaluation surface shared by scalar and vector elements.
pub trait Element {
    /// Basis values at a set of points.
    type Values;
    /// Basis gradients at a set of points.
    type Gradients;

    fn cell(&self) -> ReferenceCell;
    fn degree(&self) -> usize;

    /// Node coordinates, one row per node.
    fn nodes(&self) -> ArrayView2<'_, f64>;

    fn node_count(&self) -> usize {
        self.nodes().nrows()
    }

    fn entity_nodes(&self) -> Option<&EntityNodes>;

    /// `nodes_per_entity()[d]` is the number of nodes owned by entity `(d, 0)`.
    fn nodes_per_entity(&self) -> Option<Vec<usize>> {
        self.entity_nodes().map(EntityNodes::nodes_per_entity)
    }

    fn tabulate(&self, points: ArrayView2<f64>) -> Result<Self::Values>;
    fn tabulate_grad(&self, points: ArrayView2<f64>) -> Result<Self::Gradients>;
}
