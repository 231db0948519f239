//! Equispaced Lagrange elements: generated nodes, their entity index and
//! the nodal basis built from them.

use std::fmt;
use std::ops::Deref;

use ndarray::{Array2, Array3, ArrayView2};

use crate::cell::{Element, ReferenceCell};
use crate::entity_nodes::EntityNodes;
use crate::error::Result;
use crate::finite_element::FiniteElement;
use crate::nodes::lagrange_points;
use crate::options::BasisOptions;

/// Equispaced Lagrange element.
#[derive(Debug, Clone)]
pub struct LagrangeElement {
    element: FiniteElement,
}

impl LagrangeElement {
    pub fn new(cell: ReferenceCell, degree: usize) -> Result<Self> {
        Self::with_options(cell, degree, BasisOptions::default())
    }

    pub fn with_options(cell: ReferenceCell, degree: usize, options: BasisOptions) -> Result<Self> {
        let nodes = lagrange_points(cell, degree);
        let entity_nodes = EntityNodes::lagrange(cell, degree);
        let element = FiniteElement::with_options(cell, degree, nodes, Some(entity_nodes), options)?;
        Ok(LagrangeElement { element })
    }

    pub fn into_inner(self) -> FiniteElement {
        self.element
    }
}

impl Deref for LagrangeElement {
    type Target = FiniteElement;

    fn deref(&self) -> &FiniteElement {
        &self.element
    }
}

impl From<LagrangeElement> for FiniteElement {
    fn from(e: LagrangeElement) -> Self {
        e.element
    }
}

impl Element for LagrangeElement {
    type Values = Array2<f64>;
    type Gradients = Array3<f64>;

    fn cell(&self) -> ReferenceCell {
        self.element.cell()
    }
    fn degree(&self) -> usize {
        self.element.degree()
    }
    fn nodes(&self) -> ArrayView2<'_, f64> {
        self.element.nodes()
    }
    fn entity_nodes(&self) -> Option<&EntityNodes> {
        self.element.entity_nodes()
    }
    fn tabulate(&self, points: ArrayView2<f64>) -> Result<Array2<f64>> {
        self.element.tabulate(points)
    }
    fn tabulate_grad(&self, points: ArrayView2<f64>) -> Result<Array3<f64>> {
        self.element.tabulate_grad(points)
    }
}

impl fmt::Display for LagrangeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LagrangeElement({}, {})", self.cell(), self.degree())
    }
}
