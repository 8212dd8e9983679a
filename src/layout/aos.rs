//! Array-of-structures plane storage.

use nalgebra::Point3;

use crate::axis::Axis;
use crate::lanes::Lanes;
use crate::layout::{LayoutKind, PlaneLayout};
use crate::Real;

/// Plane points stored as a sequence of `x, y, z` records.
///
/// Lane groups are formed by gathering one coordinate of `WIDTH` consecutive records into a
/// register, see [`AosPlanes::load_lane_field`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AosPlanes<T: Real> {
    points: Vec<Point3<T>>,
}

impl<T: Real> AosPlanes<T> {
    /// Creates an empty batch.
    pub fn new() -> AosPlanes<T> {
        AosPlanes { points: Vec::new() }
    }

    /// Creates a batch holding a copy of `points`.
    pub fn from_points(points: &[Point3<T>]) -> AosPlanes<T> {
        AosPlanes {
            points: points.to_vec(),
        }
    }

    /// Appends one plane point.
    pub fn push(&mut self, point: Point3<T>) {
        self.points.push(point);
    }

    /// The stored records.
    pub fn points(&self) -> &[Point3<T>] {
        &self.points
    }

    /// Number of planes.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the batch holds no planes.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Gathers the `axis` coordinate of the records `start .. start + WIDTH` into one register,
    /// reading directly from the records without an intermediate copy. Lanes past the end of
    /// the batch hold zero.
    ///
    /// # Examples
    /// ```
    /// use vecint::axis::Axis;
    /// use vecint::layout::AosPlanes;
    /// use nalgebra::Point3;
    ///
    /// let planes = AosPlanes::from_points(&[Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)]);
    /// let y: f64 = planes.load_lane_field(Axis::Y, 1);
    /// assert_eq!(y, 5.0);
    /// ```
    #[inline(always)]
    pub fn load_lane_field<L: Lanes<Scalar = T>>(&self, axis: Axis, start: usize) -> L {
        let records = self.points.get(start..).unwrap_or(&[]);
        if records.len() >= L::WIDTH {
            L::from_fn(|i| records[i][axis])
        } else {
            L::from_fn(|i| records.get(i).map_or_else(T::zero, |p| p[axis]))
        }
    }
}

impl<T: Real> From<Vec<Point3<T>>> for AosPlanes<T> {
    fn from(points: Vec<Point3<T>>) -> AosPlanes<T> {
        AosPlanes { points }
    }
}

impl<T: Real> FromIterator<Point3<T>> for AosPlanes<T> {
    fn from_iter<I: IntoIterator<Item = Point3<T>>>(iter: I) -> AosPlanes<T> {
        AosPlanes {
            points: iter.into_iter().collect(),
        }
    }
}

impl<T: Real, L: Lanes<Scalar = T>> PlaneLayout<L> for AosPlanes<T> {
    const KIND: LayoutKind = LayoutKind::Aos;

    fn len(&self) -> usize {
        self.points.len()
    }

    #[inline(always)]
    fn load_chunk(&self, chunk: usize, axis: Axis) -> L {
        self.load_lane_field(axis, chunk * L::WIDTH)
    }
}
