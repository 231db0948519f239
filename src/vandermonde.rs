//! Generalised Vandermonde matrices for the complete monomial space.
//!
//! Monomials are grouped by total degree `k = 0..=degree`. On the triangle the
//! group of degree `k` runs `x^k, x^(k-1) y, ..., y^k`; on the interval it is
//! the single power `x^k`.

use ndarray::{Array2, Array3, ArrayView1, ArrayView2};

use crate::cell::ReferenceCell;
use crate::error::Result;

/// Dimension of the complete polynomial space of `degree` on `cell`.
pub fn polynomial_count(cell: ReferenceCell, degree: usize) -> usize {
    match cell {
        ReferenceCell::Interval => degree + 1,
        ReferenceCell::Triangle => (degree + 1) * (degree + 2) / 2,
    }
}

/// Exponents of each monomial in basis order, one entry per coordinate.
pub fn monomial_powers(cell: ReferenceCell, degree: usize) -> Vec<Vec<i32>> {
    let degree = degree as i32;
    match cell {
        ReferenceCell::Interval => (0..=degree).map(|i| vec![i]).collect(),
        ReferenceCell::Triangle => (0..=degree)
            .flat_map(|k| (0..=k).rev().map(move |i| vec![i, k - i]))
            .collect(),
    }
}

/// Value of every monomial at every point, shape `(points, basis)`.
pub fn vandermonde_matrix(
    cell: ReferenceCell,
    degree: usize,
    points: ArrayView2<f64>,
) -> Result<Array2<f64>> {
    cell.check_points(&points)?;
    let powers = monomial_powers(cell, degree);
    Ok(Array2::from_shape_fn((points.nrows(), powers.len()), |(p, m)| {
        monomial(points.row(p), &powers[m])
    }))
}

/// Gradient of every monomial at every point, shape `(points, basis, dim)`.
pub fn vandermonde_grad(
    cell: ReferenceCell,
    degree: usize,
    points: ArrayView2<f64>,
) -> Result<Array3<f64>> {
    cell.check_points(&points)?;
    let powers = monomial_powers(cell, degree);
    Ok(Array3::from_shape_fn(
        (points.nrows(), powers.len(), cell.dim()),
        |(p, m, k)| monomial_derivative(points.row(p), &powers[m], k),
    ))
}

fn monomial(x: ArrayView1<f64>, powers: &[i32]) -> f64 {
    x.iter().zip(powers).map(|(xi, &e)| xi.powi(e)).product()
}

/// Derivative with respect to coordinate `k`. A zero exponent differentiates
/// to exactly 0, so `x^-1` is never formed and corners stay finite.
fn monomial_derivative(x: ArrayView1<f64>, powers: &[i32], k: usize) -> f64 {
    if powers[k] == 0 {
        return 0.0;
    }
    let mut result = powers[k] as f64;
    for (m, (xi, &e)) in x.iter().zip(powers).enumerate() {
        result *= if m == k { xi.powi(e - 1) } else { xi.powi(e) };
    }
    result
}
