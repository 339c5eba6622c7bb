//! Structural capability shared by everything that can stand in for a vector.
//!
//! A type is vector-like when it exposes numeric `x`, `y` and `z`. Matrix or
//! physics code can accept `impl IsVector` and convert with
//! [`Vector3::from_aggregate`] instead of committing to one concrete type.

use crate::core_types::vector3::Vector3;

/// Read access to three numeric components named `x`, `y` and `z`.
pub trait IsVector {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;

    /// Copy the components into a [`Vector3`].
    fn to_vector3(&self) -> Vector3 {
        Vector3::new(self.x(), self.y(), self.z())
    }
}

impl IsVector for Vector3 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    fn z(&self) -> f64 {
        self.z
    }

    fn to_vector3(&self) -> Vector3 {
        *self
    }
}

impl IsVector for [f64; 3] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }

    fn z(&self) -> f64 {
        self[2]
    }
}

impl IsVector for (f64, f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }

    fn z(&self) -> f64 {
        self.2
    }
}

#[cfg(feature = "nalgebra")]
impl IsVector for nalgebra::Vector3<f64> {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }

    fn z(&self) -> f64 {
        self[2]
    }
}

impl<T: IsVector + ?Sized> IsVector for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }

    fn z(&self) -> f64 {
        (**self).z()
    }
}
