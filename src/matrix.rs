//! Dense pairwise-distance matrix.

use crate::geo::{Point, distance_km};

/// An n×n symmetric matrix of great-circle distances in kilometers,
/// stored row-major and indexed in the order of the input point list.
///
/// Built fresh per optimization call and discarded afterwards; nothing
/// caches matrices across calls.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the full pairwise matrix for the given points.
    ///
    /// Each unordered pair is computed once and mirrored. Empty and
    /// single-point inputs yield the trivial 0×0 and 1×1 matrices.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut matrix = Self {
            data: vec![0.0; n * n],
            size: n,
        };
        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance_km(points[i], points[j]);
                matrix.data[i * n + j] = d;
                matrix.data[j * n + i] = d;
            }
        }
        matrix
    }

    /// Distance from point `i` to point `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }

    /// Number of points the matrix covers.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the matrix is symmetric within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delhi_triangle() -> Vec<Point> {
        vec![
            Point::new(28.6562, 77.2410).unwrap(),
            Point::new(28.6129, 77.2295).unwrap(),
            Point::new(28.5245, 77.1855).unwrap(),
        ]
    }

    #[test]
    fn test_diagonal_is_zero() {
        let m = DistanceMatrix::from_points(&delhi_triangle());
        for i in 0..m.len() {
            assert_eq!(m.get(i, i), 0.0, "Diagonal should be zero");
        }
    }

    #[test]
    fn test_symmetric() {
        let m = DistanceMatrix::from_points(&delhi_triangle());
        assert!(m.is_symmetric(1e-12));
    }

    #[test]
    fn test_entries_non_negative() {
        let m = DistanceMatrix::from_points(&delhi_triangle());
        for i in 0..m.len() {
            for j in 0..m.len() {
                assert!(m.get(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let m = DistanceMatrix::from_points(&[]);
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
    }

    #[test]
    fn test_single_point() {
        let p = Point::new(19.0760, 72.8777).unwrap();
        let m = DistanceMatrix::from_points(&[p]);
        assert_eq!(m.len(), 1);
        assert_eq!(m.get(0, 0), 0.0);
    }
}
