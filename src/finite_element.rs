//! Nodal finite elements over the complete polynomial space.
//!
//! The basis is expressed in monomial coefficients: column `j` of
//! `basis_coefs` holds the coefficients of basis function `j`. They are the
//! inverse of the Vandermonde matrix at the nodes, so basis function `j` is 1
//! at node `j` and 0 at every other node.

use std::fmt;

use log::{debug, warn};
use nalgebra::DMatrix;
use ndarray::{Array1, Array2, Array3, ArrayView1, ArrayView2, Axis};

use crate::cell::{Element, ReferenceCell};
use crate::entity_nodes::EntityNodes;
use crate::error::{Error, Result};
use crate::options::BasisOptions;
use crate::vandermonde::{polynomial_count, vandermonde_grad, vandermonde_matrix};

#[derive(Debug, Clone)]
pub struct FiniteElement {
    cell: ReferenceCell,
    degree: usize,
    nodes: Array2<f64>,
    entity_nodes: Option<EntityNodes>,
    basis_coefs: Array2<f64>,
    condition: f64,
}

impl FiniteElement {
    /// Build the element with the default conditioning limits.
    ///
    /// `nodes` has one row per node. When `entity_nodes` is given it must
    /// partition the node indices over the entities of `cell`.
    pub fn new(
        cell: ReferenceCell,
        degree: usize,
        nodes: Array2<f64>,
        entity_nodes: Option<EntityNodes>,
    ) -> Result<Self> {
        Self::with_options(cell, degree, nodes, entity_nodes, BasisOptions::default())
    }

    pub fn with_options(
        cell: ReferenceCell,
        degree: usize,
        nodes: Array2<f64>,
        entity_nodes: Option<EntityNodes>,
        options: BasisOptions,
    ) -> Result<Self> {
        options.validate()?;
        cell.check_points(&nodes.view())?;
        let expected = polynomial_count(cell, degree);
        if nodes.nrows() != expected {
            return Err(Error::NodeCount {
                degree,
                expected,
                found: nodes.nrows(),
            });
        }
        if let Some(entity_nodes) = &entity_nodes {
            entity_nodes.validate(cell, nodes.nrows())?;
        }

        let vandermonde = vandermonde_matrix(cell, degree, nodes.view())?;
        let (basis_coefs, condition) = invert(&vandermonde, &options)?;
        debug!(
            "built {} degree {} element with {} nodes, condition estimate {:e}",
            cell,
            degree,
            nodes.nrows(),
            condition
        );

        Ok(FiniteElement {
            cell,
            degree,
            nodes,
            entity_nodes,
            basis_coefs,
            condition,
        })
    }

    /// Monomial coefficients of the basis, one column per basis function.
    pub fn basis_coefs(&self) -> ArrayView2<'_, f64> {
        self.basis_coefs.view()
    }

    /// 1-norm condition estimate of the Vandermonde matrix at the nodes.
    pub fn condition_estimate(&self) -> f64 {
        self.condition
    }

    /// Value of `f` at each node.
    pub fn interpolate<F>(&self, f: F) -> Array1<f64>
    where
        F: Fn(ArrayView1<f64>) -> f64,
    {
        self.nodes.rows().into_iter().map(f).collect()
    }
}

impl Element for FiniteElement {
    /// Shape `(points, basis)`.
    type Values = Array2<f64>;
    /// Shape `(points, basis, dim)`.
    type Gradients = Array3<f64>;

    fn cell(&self) -> ReferenceCell {
        self.cell
    }

    fn degree(&self) -> usize {
        self.degree
    }

    fn nodes(&self) -> ArrayView2<'_, f64> {
        self.nodes.view()
    }

    fn entity_nodes(&self) -> Option<&EntityNodes> {
        self.entity_nodes.as_ref()
    }

    fn tabulate(&self, points: ArrayView2<f64>) -> Result<Array2<f64>> {
        let vandermonde = vandermonde_matrix(self.cell, self.degree, points)?;
        Ok(vandermonde.dot(&self.basis_coefs))
    }

    fn tabulate_grad(&self, points: ArrayView2<f64>) -> Result<Array3<f64>> {
        let grad = vandermonde_grad(self.cell, self.degree, points)?;
        let dim = self.cell.dim();
        let mut result = Array3::zeros((grad.len_of(Axis(0)), self.node_count(), dim));
        for k in 0..dim {
            result
                .index_axis_mut(Axis(2), k)
                .assign(&grad.index_axis(Axis(2), k).dot(&self.basis_coefs));
        }
        Ok(result)
    }
}

impl fmt::Display for FiniteElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FiniteElement({}, {})", self.cell, self.degree)
    }
}

/// Invert a square Vandermonde matrix, rejecting singular and badly
/// conditioned ones. Returns the inverse and its 1-norm condition estimate.
fn invert(matrix: &Array2<f64>, options: &BasisOptions) -> Result<(Array2<f64>, f64)> {
    let n = matrix.nrows();
    let m = DMatrix::from_fn(n, n, |i, j| matrix[[i, j]]);
    let inverse = m.clone().try_inverse().ok_or_else(|| {
        Error::SingularNodes(format!("{}x{} Vandermonde matrix is not invertible", n, n))
    })?;
    if inverse.iter().any(|x| !x.is_finite()) {
        return Err(Error::SingularNodes(
            "inverse Vandermonde matrix has non-finite entries".to_string(),
        ));
    }

    let condition = one_norm(&m) * one_norm(&inverse);
    // NaN fails this comparison too.
    if !(condition <= options.max_condition) {
        return Err(Error::IllConditioned {
            condition,
            limit: options.max_condition,
        });
    }
    if condition > options.warn_condition {
        warn!(
            "Vandermonde matrix of size {} is poorly conditioned (estimate {:e})",
            n, condition
        );
    }

    let inverse = Array2::from_shape_fn((n, n), |(i, j)| inverse[(i, j)]);
    Ok((inverse, condition))
}

fn one_norm(m: &DMatrix<f64>) -> f64 {
    m.column_iter()
        .map(|c| c.iter().map(|x| x.abs()).sum::<f64>())
        .fold(0.0, f64::max)
}
