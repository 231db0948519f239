//! Nodal Lagrange finite elements on the reference interval and triangle.
//!
//! An element is built from a node set by inverting the generalised
//! Vandermonde matrix of the complete monomial space at the nodes. The
//! resulting basis can be tabulated, with gradients, at arbitrary points.
//!
//! ```
//! use fe_basis::{Element, LagrangeElement, ReferenceCell};
//! use ndarray::arr2;
//!
//! let element = LagrangeElement::new(ReferenceCell::Triangle, 1).unwrap();
//! let values = element.tabulate(arr2(&[[0.25, 0.25]]).view()).unwrap();
//! assert!((values.sum() - 1.0).abs() < 1e-12);
//! ```

pub mod cell;
pub mod entity_nodes;
pub mod error;
pub mod finite_element;
pub mod lagrange;
pub mod nodes;
pub mod options;
pub mod vandermonde;
pub mod vector;

pub use cell::{Element, ReferenceCell};
pub use entity_nodes::EntityNodes;
pub use error::{Error, Result};
pub use finite_element::FiniteElement;
pub use lagrange::LagrangeElement;
pub use nodes::lagrange_points;
pub use options::BasisOptions;
pub use vandermonde::{polynomial_count, vandermonde_grad, vandermonde_matrix};
pub use vector::VectorFiniteElement;
