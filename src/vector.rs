//! Vector-valued elements built from a scalar element.
//!
//! Each scalar node is repeated once per spatial component. Expanded node
//! `dim * i + c` carries scalar basis function `i` in component `c` and is
//! tagged with the unit vector `e_c`.

use std::fmt;

use ndarray::{s, Array1, Array2, Array3, Array4, ArrayView1, ArrayView2};

use crate::cell::{Element, ReferenceCell};
use crate::entity_nodes::EntityNodes;
use crate::error::{Error, Result};
use crate::finite_element::FiniteElement;

#[derive(Debug, Clone)]
pub struct VectorFiniteElement {
    finite_element: FiniteElement,
    nodes: Array2<f64>,
    node_weights: Array2<f64>,
    entity_nodes: Option<EntityNodes>,
}

impl VectorFiniteElement {
    pub fn new(finite_element: impl Into<FiniteElement>) -> Self {
        let finite_element = finite_element.into();
        let dim = finite_element.cell().dim();
        let count = finite_element.node_count() * dim;
        let scalar_nodes = finite_element.nodes();

        let nodes = Array2::from_shape_fn((count, dim), |(i, k)| scalar_nodes[[i / dim, k]]);
        let node_weights =
            Array2::from_shape_fn((count, dim), |(i, k)| if i % dim == k { 1.0 } else { 0.0 });
        let entity_nodes = finite_element.entity_nodes().map(|e| e.expand(dim));

        VectorFiniteElement {
            finite_element,
            nodes,
            node_weights,
            entity_nodes,
        }
    }

    /// The wrapped scalar element.
    pub fn finite_element(&self) -> &FiniteElement {
        &self.finite_element
    }

    /// Unit vector selecting the component of each expanded node.
    pub fn node_weights(&self) -> ArrayView2<'_, f64> {
        self.node_weights.view()
    }

    /// Component of `f` selected by each node's weight, evaluated at the node.
    pub fn interpolate<F>(&self, f: F) -> Result<Array1<f64>>
    where
        F: Fn(ArrayView1<f64>) -> Array1<f64>,
    {
        let dim = self.cell().dim();
        self.nodes
            .rows()
            .into_iter()
            .zip(self.node_weights.rows())
            .map(|(node, weight)| {
                let value = f(node);
                if value.len() != dim {
                    return Err(Error::ValueShape {
                        expected: dim,
                        found: value.len(),
                    });
                }
                Ok(weight.dot(&value))
            })
            .collect()
    }
}

impl Element for VectorFiniteElement {
    /// Shape `(points, dim, basis)`.
    type Values = Array3<f64>;
    /// Shape `(points, dim, basis, dim)`.
    type Gradients = Array4<f64>;

    fn cell(&self) -> ReferenceCell {
        self.finite_element.cell()
    }

    fn degree(&self) -> usize {
        self.finite_element.degree()
    }

    fn nodes(&self) -> ArrayView2<'_, f64> {
        self.nodes.view()
    }

    fn entity_nodes(&self) -> Option<&EntityNodes> {
        self.entity_nodes.as_ref()
    }

    fn tabulate(&self, points: ArrayView2<f64>) -> Result<Array3<f64>> {
        let table = self.finite_element.tabulate(points)?;
        let dim = self.cell().dim();
        let mut result = Array3::zeros((table.nrows(), dim, self.node_count()));
        for c in 0..dim {
            result.slice_mut(s![.., c, c..;dim]).assign(&table);
        }
        Ok(result)
    }

    fn tabulate_grad(&self, points: ArrayView2<f64>) -> Result<Array4<f64>> {
        let table = self.finite_element.tabulate_grad(points)?;
        let (npoints, _, _) = table.dim();
        let dim = self.cell().dim();
        let mut result = Array4::zeros((npoints, dim, self.node_count(), dim));
        for c in 0..dim {
            result.slice_mut(s![.., c, c..;dim, ..]).assign(&table);
        }
        Ok(result)
    }
}

impl fmt::Display for VectorFiniteElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VectorFiniteElement({}, {})", self.cell(), self.degree())
    }
}
