//! Equispaced Lagrange nodes in entity order.

use ndarray::{Array2, ArrayView1};

use crate::cell::ReferenceCell;

/// Equispaced Lagrange nodes of `degree` on `cell`, one row per node.
///
/// Nodes come out grouped by owning entity: vertices, then the interior
/// points of each edge running from its lower to its higher vertex, then the
/// points interior to the cell. Degree 0 is a single node at the centroid.
pub fn lagrange_points(cell: ReferenceCell, degree: usize) -> Array2<f64> {
    let rows = if degree == 0 {
        vec![centroid(cell)]
    } else {
        (0..=cell.dim())
            .flat_map(|entity_dim| {
                (0..cell.entity_count(entity_dim))
                    .flat_map(move |index| entity_points(cell, degree, entity_dim, index))
            })
            .collect()
    };
    Array2::from_shape_fn((rows.len(), cell.dim()), |(i, k)| rows[i][k])
}

/// Lattice points of `degree` owned by the interior of entity `(entity_dim, index)`.
fn entity_points(
    cell: ReferenceCell,
    degree: usize,
    entity_dim: usize,
    index: usize,
) -> Vec<Vec<f64>> {
    let vertices = cell.vertices();
    let verts = match cell.entity_vertices(entity_dim, index) {
        Some(v) => v,
        None => return vec![],
    };
    let d = degree as f64;

    match verts.len() {
        1 => vec![vertices.row(verts[0]).to_vec()],
        2 => {
            let (a, b) = (vertices.row(verts[0]), vertices.row(verts[1]));
            (1..degree).map(|i| lerp(a, b, (degree - i) as f64, i as f64, d)).collect()
        }
        _ => {
            let mut points = Vec::new();
            for i in 1..degree {
                for j in 1..degree - i {
                    points.push(vec![i as f64 / d, j as f64 / d]);
                }
            }
            points
        }
    }
}

/// `(wa * a + wb * b) / d`, with integral weights so lattice points stay exact.
fn lerp(a: ArrayView1<f64>, b: ArrayView1<f64>, wa: f64, wb: f64, d: f64) -> Vec<f64> {
    a.iter().zip(b.iter()).map(|(x, y)| (wa * x + wb * y) / d).collect()
}

fn centroid(cell: ReferenceCell) -> Vec<f64> {
    let n = cell.vertex_count() as f64;
    cell.vertices().sum_axis(ndarray::Axis(0)).iter().map(|x| x / n).collect()
}
