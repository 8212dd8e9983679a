//! This module defines a Ray and a Plane structure and the scalar ray/plane intersection.

use nalgebra::{Point3, Vector3};

use crate::Real;

/// A struct which defines a ray by its origin and direction.
///
/// The direction is stored as given and is not normalized: ray parameters are measured in
/// units of `direction`, so the point at parameter `t` is `origin + t * direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray<T: Real> {
    /// The ray origin.
    pub origin: Point3<T>,

    /// The ray direction.
    pub direction: Vector3<T>,
}

/// A plane given by one point on it and its normal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane<T: Real> {
    /// A point on the plane.
    pub point: Point3<T>,

    /// The plane normal. It does not need to be of unit length.
    pub normal: Vector3<T>,
}

impl<T: Real> Plane<T> {
    /// Creates a new [`Plane`] through `point` with the given `normal`.
    pub fn new(point: Point3<T>, normal: Vector3<T>) -> Plane<T> {
        Plane { point, normal }
    }

    /// Signed distance of `p` from the plane, in units of the normal's length.
    pub fn signed_distance(&self, p: &Point3<T>) -> T {
        (p - self.point).dot(&self.normal)
    }
}

impl<T: Real> Ray<T> {
    /// Creates a new [`Ray`] from an `origin` and a `direction`.
    ///
    /// # Examples
    /// ```
    /// use vecint::ray::Ray;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let origin = Point3::new(0.0, 0.0, 10.0);
    /// let direction = Vector3::new(0.0, -1.0, -1.0);
    /// let ray = Ray::new(origin, direction);
    ///
    /// assert_eq!(ray.origin, origin);
    /// assert_eq!(ray.direction, direction);
    /// ```
    pub fn new(origin: Point3<T>, direction: Vector3<T>) -> Ray<T> {
        Ray { origin, direction }
    }

    /// Returns the point `origin + t * direction`.
    pub fn at(&self, t: T) -> Point3<T> {
        self.origin + self.direction * t
    }

    /// Returns `dot(direction, normal)`, the denominator shared by every plane with this normal.
    #[inline(always)]
    pub fn denominator(&self, normal: &Vector3<T>) -> T {
        self.direction.dot(normal)
    }

    /// Returns the ray parameter `t` at which the ray meets `plane`:
    ///
    /// ```text
    /// t = dot(point - origin, normal) / dot(direction, normal)
    /// ```
    ///
    /// A ray parallel to the plane divides by zero and yields `+inf`, `-inf` or `NaN`.
    ///
    /// # Examples
    /// ```
    /// use vecint::ray::{Plane, Ray};
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let ray = Ray::new(Point3::new(0.0, 0.0, 10.0), Vector3::new(0.0, -1.0, -1.0));
    /// let plane = Plane::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0));
    ///
    /// assert_eq!(ray.plane_parameter(&plane), 5.0);
    /// ```
    pub fn plane_parameter(&self, plane: &Plane<T>) -> T {
        (plane.point - self.origin).dot(&plane.normal) / self.denominator(&plane.normal)
    }

    /// Returns the point where the ray meets `plane`.
    pub fn intersect_plane(&self, plane: &Plane<T>) -> Point3<T> {
        self.at(self.plane_parameter(plane))
    }
}
