//! Axis enum for selecting one coordinate of three-dimensional structures.

use nalgebra::{Point3, Scalar, Vector3};
use std::fmt::{Display, Formatter, Result};
use std::ops::{Index, IndexMut};

/// An `Axis` in a three-dimensional coordinate system.
/// Used as the field selector when loading one coordinate of many plane points into a lane
/// vector, and to access `Vector3`/`Point3` structs via index.
///
/// # Examples
/// ```
/// use vecint::axis::Axis;
///
/// let mut position = [1.0, 0.5, 42.0];
/// position[Axis::Y] *= 4.0;
///
/// assert_eq!(position[Axis::Y], 2.0);
/// ```
///
/// [`Point3`] and [`Vector3`] are also indexable using `Axis`.
///
/// ```
/// use vecint::axis::Axis;
/// use nalgebra::Point3;
///
/// let mut position = Point3::new(1.0, 2.0, 3.0);
/// position[Axis::X] = 1000.0;
///
/// assert_eq!(position[Axis::X], 1000.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Index of the X axis.
    X = 0,

    /// Index of the Y axis.
    Y = 1,

    /// Index of the Z axis.
    Z = 2,
}

impl Axis {
    /// All three axes in storage order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of this axis in `x, y, z` order.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Display implementation for `Axis`.
impl Display for Axis {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match *self {
                Axis::X => "x",
                Axis::Y => "y",
                Axis::Z => "z",
            }
        )
    }
}

/// Make slices indexable by `Axis`.
impl<T> Index<Axis> for [T] {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        &self[axis as usize]
    }
}

/// Make slices mutably accessible by `Axis`.
impl<T> IndexMut<Axis> for [T] {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        &mut self[axis as usize]
    }
}

/// Make `Point3` indexable by `Axis`.
impl<T: Scalar> Index<Axis> for Point3<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        &self.coords[axis as usize]
    }
}

/// Make `Point3` mutably accessible by `Axis`.
impl<T: Scalar> IndexMut<Axis> for Point3<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        &mut self.coords[axis as usize]
    }
}

/// Make `Vector3` indexable by `Axis`.
impl<T: Scalar> Index<Axis> for Vector3<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        &self[axis as usize]
    }
}

/// Make `Vector3` mutably accessible by `Axis`.
impl<T: Scalar> IndexMut<Axis> for Vector3<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        &mut self[axis as usize]
    }
}

#[cfg(test)]
mod test {
    use crate::axis::Axis;
    use nalgebra::{Point3, Vector3};
    use proptest::prelude::*;

    #[test]
    fn test_axis_order() {
        let indices: Vec<usize> = Axis::ALL.iter().map(|axis| axis.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(format!("{}{}{}", Axis::X, Axis::Y, Axis::Z), "xyz");
    }

    proptest! {
        // Test whether accessing arrays by index is the same as accessing them by `Axis`.
        #[test]
        fn test_index_by_axis(tpl: (f32, f32, f32)) {
            let a = [tpl.0, tpl.1, tpl.2];

            assert!(a[0].to_bits() == a[Axis::X].to_bits() && a[1].to_bits() == a[Axis::Y].to_bits() && a[2].to_bits() == a[Axis::Z].to_bits());
        }

        // Test whether points and vectors agree with their named fields when indexed by `Axis`.
        #[test]
        fn test_point_and_vector_by_axis(tpl: (f32, f32, f32)) {
            let p = Point3::new(tpl.0, tpl.1, tpl.2);
            let v = Vector3::new(tpl.0, tpl.1, tpl.2);

            assert!(p[Axis::X].to_bits() == p.x.to_bits() && p[Axis::Y].to_bits() == p.y.to_bits() && p[Axis::Z].to_bits() == p.z.to_bits());
            assert!(v[Axis::X].to_bits() == v.x.to_bits() && v[Axis::Y].to_bits() == v.y.to_bits() && v[Axis::Z].to_bits() == v.z.to_bits());
        }

        // Test whether arrays can be mutably set, by indexing via `Axis`.
        #[test]
        fn test_set_by_axis(tpl: (f32, f32, f32)) {
            let mut a = [0.0, 0.0, 0.0];

            a[Axis::X] = tpl.0;
            a[Axis::Y] = tpl.1;
            a[Axis::Z] = tpl.2;

            assert!(a[0].to_bits() == tpl.0.to_bits() && a[1].to_bits() == tpl.1.to_bits() && a[2].to_bits() == tpl.2.to_bits());
        }
    }
}
