use approx::assert_abs_diff_eq;
use fe_basis::{polynomial_count, Element, LagrangeElement, ReferenceCell, VectorFiniteElement};
use ndarray::{arr2, s, Array2, ArrayView1};

const CELLS: [ReferenceCell; 2] = [ReferenceCell::Interval, ReferenceCell::Triangle];

fn sample_points(cell: ReferenceCell) -> Array2<f64> {
    match cell {
        ReferenceCell::Interval => arr2(&[[0.0], [0.13], [0.5], [0.71], [1.0]]),
        ReferenceCell::Triangle => arr2(&[
            [0.0, 0.0],
            [1.0, 0.0],
            [0.0, 1.0],
            [0.2, 0.3],
            [0.45, 0.1],
            [0.05, 0.9],
            [1.0 / 3.0, 1.0 / 3.0],
        ]),
    }
}

/// Exponent tuples of every monomial of total degree at most `degree`.
fn monomials(cell: ReferenceCell, degree: usize) -> Vec<(i32, i32)> {
    let degree = degree as i32;
    match cell {
        ReferenceCell::Interval => (0..=degree).map(|a| (a, 0)).collect(),
        ReferenceCell::Triangle => (0..=degree)
            .flat_map(|a| (0..=degree - a).map(move |b| (a, b)))
            .collect(),
    }
}

fn eval(x: ArrayView1<f64>, (a, b): (i32, i32)) -> f64 {
    let y = if x.len() > 1 { x[1].powi(b) } else { 1.0 };
    x[0].powi(a) * y
}

#[test]
fn test_kronecker_delta() {
    for cell in CELLS {
        for degree in 0..=5 {
            let element = LagrangeElement::new(cell, degree).unwrap();
            let table = element.tabulate(element.nodes()).unwrap();
            let n = element.node_count();
            assert_eq!(table.dim(), (n, n));
            for i in 0..n {
                for j in 0..n {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert_abs_diff_eq!(table[[i, j]], expected, epsilon = 1e-10);
                }
            }
        }
    }
}

#[test]
fn test_partition_of_unity() {
    for cell in CELLS {
        let points = sample_points(cell);
        for degree in 0..=5 {
            let element = LagrangeElement::new(cell, degree).unwrap();
            let table = element.tabulate(points.view()).unwrap();
            let grads = element.tabulate_grad(points.view()).unwrap();
            for p in 0..points.nrows() {
                assert_abs_diff_eq!(table.row(p).sum(), 1.0, epsilon = 1e-10);
                for k in 0..cell.dim() {
                    assert_abs_diff_eq!(grads.slice(s![p, .., k]).sum(), 0.0, epsilon = 1e-8);
                }
            }
        }
    }
}

#[test]
fn test_polynomial_exactness() {
    for cell in CELLS {
        let points = sample_points(cell);
        for degree in 1..=5 {
            let element = LagrangeElement::new(cell, degree).unwrap();
            let table = element.tabulate(points.view()).unwrap();
            for powers in monomials(cell, degree) {
                let coefficients = element.interpolate(|x| eval(x, powers));
                let reconstructed = table.dot(&coefficients);
                for (p, x) in points.rows().into_iter().enumerate() {
                    assert_abs_diff_eq!(reconstructed[p], eval(x, powers), epsilon = 1e-9);
                }
            }
        }
    }
}

/// Partial derivative of `x^a y^b` with respect to coordinate `k`.
fn eval_derivative(x: ArrayView1<f64>, (a, b): (i32, i32), k: usize) -> f64 {
    let y = if x.len() > 1 { x[1] } else { 1.0 };
    match k {
        0 if a == 0 => 0.0,
        0 => a as f64 * x[0].powi(a - 1) * y.powi(b),
        _ if b == 0 => 0.0,
        _ => b as f64 * x[0].powi(a) * y.powi(b - 1),
    }
}

#[test]
fn test_gradient_exactness() {
    for cell in CELLS {
        let points = sample_points(cell);
        for degree in 1..=4 {
            let element = LagrangeElement::new(cell, degree).unwrap();
            let grads = element.tabulate_grad(points.view()).unwrap();
            for powers in monomials(cell, degree) {
                let coefficients = element.interpolate(|x| eval(x, powers));
                for (p, x) in points.rows().into_iter().enumerate() {
                    for k in 0..cell.dim() {
                        let column: ArrayView1<f64> = grads.slice(s![p, .., k]);
                        assert_abs_diff_eq!(
                            column.dot(&coefficients),
                            eval_derivative(x, powers, k),
                            epsilon = 1e-8
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_node_count() {
    for degree in 0..=6 {
        let interval = LagrangeElement::new(ReferenceCell::Interval, degree).unwrap();
        assert_eq!(interval.node_count(), degree + 1);
        let triangle = LagrangeElement::new(ReferenceCell::Triangle, degree).unwrap();
        assert_eq!(triangle.node_count(), (degree + 1) * (degree + 2) / 2);
        assert_eq!(
            triangle.node_count(),
            polynomial_count(ReferenceCell::Triangle, degree)
        );
    }
}

#[test]
fn test_entity_partition() {
    for cell in CELLS {
        for degree in 1..=5 {
            let element = LagrangeElement::new(cell, degree).unwrap();
            let entity_nodes = element.entity_nodes().unwrap();
            let mut all: Vec<usize> = entity_nodes
                .iter()
                .flat_map(|(_, _, nodes)| nodes.to_vec())
                .collect();
            all.sort_unstable();
            assert_eq!(all, (0..element.node_count()).collect::<Vec<_>>());
            for v in 0..cell.vertex_count() {
                assert_eq!(entity_nodes.get(0, v), Some(&[v][..]));
            }
        }
    }
}

#[test]
fn test_vector_element_scaling() {
    for cell in CELLS {
        let points = sample_points(cell);
        for degree in 1..=3 {
            let scalar = LagrangeElement::new(cell, degree).unwrap();
            let n = scalar.node_count();
            let element = VectorFiniteElement::new(scalar);
            assert_eq!(element.node_count(), n * cell.dim());

            let table = element.tabulate(points.view()).unwrap();
            let grads = element.tabulate_grad(points.view()).unwrap();
            let dim = cell.dim();
            for c in 0..dim {
                for j in (0..element.node_count()).filter(|j| j % dim != c) {
                    assert!(table.slice(s![.., c, j]).iter().all(|v| *v == 0.0));
                    assert!(grads.slice(s![.., c, j, ..]).iter().all(|v| *v == 0.0));
                }
            }
        }
    }
}
