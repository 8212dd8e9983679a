//! This file contains the matrix form of the ray/plane intersection, which computes K
//! independent ray/plane pairs at once, one pair per matrix row.

use nalgebra::{SMatrix, SVector};

use crate::Real;

/// Returns the ray parameter of every row:
///
/// ```text
/// t_i = dot(point_i - origin_i, normal_i) / dot(direction_i, normal_i)
/// ```
///
/// All matrices are `K x 3`, row `i` describing the `i`-th ray/plane pair. Rows where the
/// direction is orthogonal to the normal divide by zero and yield `+inf`, `-inf` or `NaN`.
pub fn intersect_parameters<T: Real, const K: usize>(
    rays: &SMatrix<T, K, 3>,
    origins: &SMatrix<T, K, 3>,
    normals: &SMatrix<T, K, 3>,
    points: &SMatrix<T, K, 3>,
) -> SVector<T, K> {
    let noms = (points - origins).component_mul(normals).column_sum();
    let denoms = rays.component_mul(normals).column_sum();
    noms.component_div(&denoms)
}

/// Intersects `K` rays with `K` planes and returns the `K x 3` matrix of intersection points
/// `origin_i + t_i * direction_i`, with `t_i` from [`intersect_parameters`] broadcast across the
/// three columns of the direction matrix.
///
/// # Examples
/// ```
/// use vecint::ray::intersect;
/// use nalgebra::{Matrix2x3, RowVector3};
///
/// let rays = Matrix2x3::from_rows(&[RowVector3::new(0.0, -1.0, -1.0); 2]);
/// let origins = Matrix2x3::from_rows(&[RowVector3::new(0.0, 0.0, 10.0); 2]);
/// let normals = Matrix2x3::from_rows(&[RowVector3::new(0.0, 0.0, 1.0); 2]);
/// let points = Matrix2x3::from_rows(&[
///     RowVector3::new(0.0, 0.0, 5.0),
///     RowVector3::new(0.0, 0.0, 10.0),
/// ]);
///
/// let hits = intersect(&rays, &origins, &normals, &points);
/// assert_eq!(hits.row(0), RowVector3::new(0.0, -5.0, 5.0));
/// assert_eq!(hits.row(1), RowVector3::new(0.0, 0.0, 10.0));
/// ```
pub fn intersect<T: Real, const K: usize>(
    rays: &SMatrix<T, K, 3>,
    origins: &SMatrix<T, K, 3>,
    normals: &SMatrix<T, K, 3>,
    points: &SMatrix<T, K, 3>,
) -> SMatrix<T, K, 3> {
    let coeffs = intersect_parameters(rays, origins, normals, points);

    let mut scaled = *rays;
    for mut column in scaled.column_iter_mut() {
        column.component_mul_assign(&coeffs);
    }

    origins + scaled
}
