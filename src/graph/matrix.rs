//! Dense adjacency matrix.

use serde::Serialize;

/// A dense n×n matrix of edge lengths stored in row-major order.
///
/// The diagonal is zero and missing edges are `f64::INFINITY`. Entries are
/// indexed by node position in the graph, not by node id.
///
/// # Examples
///
/// ```
/// use u_circuit::graph::AdjacencyMatrix;
///
/// let mut m = AdjacencyMatrix::new(3);
/// m.set_symmetric(0, 2, 1.5);
/// assert_eq!(m.get(2, 0), 1.5);
/// assert_eq!(m.get(1, 1), 0.0);
/// assert!(m.get(0, 1).is_infinite());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyMatrix {
    data: Vec<f64>,
    size: usize,
}

impl AdjacencyMatrix {
    /// Creates a matrix with no edges: zero diagonal, infinity elsewhere.
    pub fn new(size: usize) -> Self {
        let mut data = vec![f64::INFINITY; size * size];
        for i in 0..size {
            data[i * size + i] = 0.0;
        }
        Self { data, size }
    }

    /// Returns the entry at row `from`, column `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Writes `distance` to both `(a, b)` and `(b, a)`.
    pub fn set_symmetric(&mut self, a: usize, b: usize, distance: f64) {
        self.data[a * self.size + b] = distance;
        self.data[b * self.size + a] = distance;
    }

    /// Returns `true` if distinct positions `a` and `b` share an edge.
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        a != b && self.get(a, b).is_finite()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a.is_infinite() && b.is_infinite() {
                    continue;
                }
                if (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// The matrix as nested rows.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.data
            .chunks(self.size.max(1))
            .take(self.size)
            .map(<[f64]>::to_vec)
            .collect()
    }
}
