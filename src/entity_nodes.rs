//! Ownership of nodes by topological entity.

use crate::cell::ReferenceCell;
use crate::error::{Error, Result};
use crate::vandermonde::polynomial_count;

/// Node indices owned by each entity, keyed by `(entity_dim, local_index)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityNodes {
    entities: Vec<Vec<Vec<usize>>>,
}

impl EntityNodes {
    /// Build from `entities[d][i]`, the node list of entity `(d, i)`.
    pub fn new(entities: Vec<Vec<Vec<usize>>>) -> Self {
        EntityNodes { entities }
    }

    /// Index for the equispaced Lagrange nodes of `degree` on `cell`, laid
    /// out in entity order.
    ///
    /// Vertices own one node each, edges of the triangle own `degree - 1`
    /// consecutive nodes each, and the cell interior owns whatever is left of
    /// the `polynomial_count(cell, degree)` nodes.
    pub fn lagrange(cell: ReferenceCell, degree: usize) -> Self {
        let dim = cell.dim();
        let node_count = polynomial_count(cell, degree);
        let mut next = 0;
        let mut take = |n: usize| {
            let block: Vec<usize> = (next..next + n).collect();
            next += n;
            block
        };

        let mut entities = vec![Vec::new(); dim + 1];
        let per_vertex = if degree == 0 { 0 } else { 1 };
        let per_edge = degree.saturating_sub(1);
        entities[0] = (0..cell.vertex_count()).map(|_| take(per_vertex)).collect();
        for entity_dim in 1..dim {
            entities[entity_dim] = (0..cell.entity_count(entity_dim))
                .map(|_| take(per_edge))
                .collect();
        }
        let boundary = cell.vertex_count() * per_vertex
            + (1..dim).map(|d| cell.entity_count(d)).sum::<usize>() * per_edge;
        entities[dim] = vec![take(node_count - boundary)];
        EntityNodes { entities }
    }

    /// Renumber for an element with `components` nodes per scalar node:
    /// scalar node `i` becomes `components * i .. components * (i + 1)`.
    pub fn expand(&self, components: usize) -> Self {
        let entities = self
            .entities
            .iter()
            .map(|per_dim| {
                per_dim
                    .iter()
                    .map(|nodes| {
                        nodes
                            .iter()
                            .flat_map(|&i| components * i..components * (i + 1))
                            .collect()
                    })
                    .collect()
            })
            .collect();
        EntityNodes { entities }
    }

    /// Number of entity dimensions covered, `cell.dim() + 1` for a full index.
    pub fn dim_count(&self) -> usize {
        self.entities.len()
    }

    pub fn entity_count(&self, entity_dim: usize) -> usize {
        self.entities.get(entity_dim).map_or(0, Vec::len)
    }

    pub fn get(&self, entity_dim: usize, index: usize) -> Option<&[usize]> {
        self.entities
            .get(entity_dim)
            .and_then(|e| e.get(index))
            .map(Vec::as_slice)
    }

    /// `(entity_dim, local_index, nodes)` for every entity.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &[usize])> + '_ {
        self.entities.iter().enumerate().flat_map(|(d, per_dim)| {
            per_dim
                .iter()
                .enumerate()
                .map(move |(i, nodes)| (d, i, nodes.as_slice()))
        })
    }

    pub fn nodes_per_entity(&self) -> Vec<usize> {
        self.entities
            .iter()
            .map(|per_dim| per_dim.first().map_or(0, Vec::len))
            .collect()
    }

    /// Check that every entity of `cell` is present and that the node lists
    /// together cover `0..node_count` exactly once.
    pub fn validate(&self, cell: ReferenceCell, node_count: usize) -> Result<()> {
        if self.entities.len() != cell.dim() + 1 {
            return Err(Error::EntityNodes(format!(
                "expected {} entity dimensions, found {}",
                cell.dim() + 1,
                self.entities.len()
            )));
        }
        for d in 0..=cell.dim() {
            if self.entity_count(d) != cell.entity_count(d) {
                return Err(Error::EntityNodes(format!(
                    "expected {} entities of dimension {}, found {}",
                    cell.entity_count(d),
                    d,
                    self.entity_count(d)
                )));
            }
        }

        let mut seen = vec![false; node_count];
        for (d, i, nodes) in self.iter() {
            for &n in nodes {
                match seen.get_mut(n) {
                    None => {
                        return Err(Error::EntityNodes(format!(
                            "entity ({}, {}) owns node {} of {}",
                            d, i, n, node_count
                        )))
                    }
                    Some(true) => {
                        return Err(Error::EntityNodes(format!("node {} owned twice", n)))
                    }
                    Some(s) => *s = true,
                }
            }
        }
        if let Some(n) = seen.iter().position(|s| !s) {
            return Err(Error::EntityNodes(format!("node {} has no owner", n)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::lagrange_points;

    #[test]
    fn test_triangle_degree_3() {
        let e = EntityNodes::lagrange(ReferenceCell::Triangle, 3);
        assert_eq!(e.get(0, 0), Some(&[0][..]));
        assert_eq!(e.get(0, 2), Some(&[2][..]));
        assert_eq!(e.get(1, 0), Some(&[3, 4][..]));
        assert_eq!(e.get(1, 1), Some(&[5, 6][..]));
        assert_eq!(e.get(1, 2), Some(&[7, 8][..]));
        assert_eq!(e.get(2, 0), Some(&[9][..]));
        assert_eq!(e.get(2, 1), None);
        assert_eq!(e.nodes_per_entity(), vec![1, 2, 1]);
    }

    #[test]
    fn test_interval_degree_4() {
        let e = EntityNodes::lagrange(ReferenceCell::Interval, 4);
        assert_eq!(e.dim_count(), 2);
        assert_eq!(e.get(0, 1), Some(&[1][..]));
        assert_eq!(e.get(1, 0), Some(&[2, 3, 4][..]));
        assert_eq!(e.nodes_per_entity(), vec![1, 3]);
    }

    #[test]
    fn test_degree_one_has_empty_interiors() {
        let e = EntityNodes::lagrange(ReferenceCell::Triangle, 1);
        assert_eq!(e.get(1, 0), Some(&[][..]));
        assert_eq!(e.get(2, 0), Some(&[][..]));
        assert_eq!(e.nodes_per_entity(), vec![1, 0, 0]);
    }

    #[test]
    fn test_degree_zero_interior_owns_node() {
        let e = EntityNodes::lagrange(ReferenceCell::Triangle, 0);
        assert_eq!(e.get(0, 0), Some(&[][..]));
        assert_eq!(e.get(2, 0), Some(&[0][..]));
        assert!(e.validate(ReferenceCell::Triangle, 1).is_ok());
    }

    #[test]
    fn test_partition() {
        for cell in [ReferenceCell::Interval, ReferenceCell::Triangle] {
            for degree in 0..=5 {
                let n = polynomial_count(cell, degree);
                let e = EntityNodes::lagrange(cell, degree);
                let mut all: Vec<usize> = e.iter().flat_map(|(_, _, v)| v.to_vec()).collect();
                all.sort_unstable();
                assert_eq!(all, (0..n).collect::<Vec<_>>());
                assert!(e.validate(cell, n).is_ok());
            }
        }
    }

    #[test]
    fn test_covers_every_lagrange_point() {
        for cell in [ReferenceCell::Interval, ReferenceCell::Triangle] {
            for degree in 0..=8 {
                let e = EntityNodes::lagrange(cell, degree);
                let count = lagrange_points(cell, degree).nrows();
                let total: usize = e.iter().map(|(_, _, v)| v.len()).sum();
                assert_eq!(total, count);
                assert!(e.validate(cell, count).is_ok());
            }
        }
    }

    #[test]
    fn test_expand() {
        let e = EntityNodes::lagrange(ReferenceCell::Triangle, 2).expand(2);
        assert_eq!(e.get(0, 0), Some(&[0, 1][..]));
        assert_eq!(e.get(0, 2), Some(&[4, 5][..]));
        assert_eq!(e.get(1, 0), Some(&[6, 7][..]));
        assert_eq!(e.get(1, 2), Some(&[10, 11][..]));
        assert!(e.validate(ReferenceCell::Triangle, 12).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_index() {
        let cell = ReferenceCell::Interval;
        let dup = EntityNodes::new(vec![vec![vec![0], vec![0]], vec![vec![1]]]);
        assert!(matches!(dup.validate(cell, 2), Err(Error::EntityNodes(_))));

        let missing = EntityNodes::new(vec![vec![vec![0], vec![1]], vec![vec![]]]);
        assert!(matches!(missing.validate(cell, 3), Err(Error::EntityNodes(_))));

        let out_of_range = EntityNodes::new(vec![vec![vec![0], vec![5]], vec![vec![1]]]);
        assert!(matches!(out_of_range.validate(cell, 2), Err(Error::EntityNodes(_))));

        let wrong_shape = EntityNodes::new(vec![vec![vec![0, 1]], vec![vec![]]]);
        assert!(matches!(wrong_shape.validate(cell, 2), Err(Error::EntityNodes(_))));
    }
}
