//! Three-component `f64` vector value type.
//!
//! `Vector3` is a plain `Copy` value with a flat `#[repr(C)]` layout. It offers
//! two flavours of arithmetic:
//!
//! - **Out-parameter** methods (`set_add`, `set_sub`, `set_mul`, `set_div`,
//!   `set_cross`, `set_normalize`) that overwrite `self` without allocating.
//!   Operands are taken by value, so the receiver may also appear as an
//!   operand: `a.set_add(a, b)` is well-defined and equals `a = a + b`.
//! - **Value-returning** operators and queries (`+`, `-`, `*`, `/`, `dot`,
//!   `len`, `lerp`, ...).
//!
//! # Numeric policy
//! Nothing here validates ranges or guards degenerate input. Division by zero
//! yields `±Infinity`/`NaN`, and normalizing the zero vector yields a vector
//! whose every component is `NaN`. Use [`Vector3::try_normalized`] when a
//! guarded variant is needed.
//!
//! # Usage
//! ```
//! use vec3_core::Vector3;
//!
//! let mut a = Vector3::new(1.0, -2.5, 0.0);
//! let b = Vector3::splat(2.0);
//! a.set_add(a, b);
//! assert_eq!(a, Vector3::new(3.0, -0.5, 2.0));
//! assert_eq!(Vector3::new(1.0, -2.5, 0.0).to_string(), "(+1.000,-2.500,+0.000)");
//! ```

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::core_types::capability::IsVector;
use crate::error::{Error, Result};

/// Number of decimals rendered by `Display` when no precision is requested.
const DEFAULT_PRECISION: usize = 3;

/// A 3D vector of double-precision components.
///
/// Used for positions, displacements and directions. Equality is exact per
/// component; use the `approx` traits for tolerant comparison.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl Vector3 {
    /// The zero vector `(0, 0, 0)`.
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// The vector `(1, 1, 1)`.
    pub const ONE: Vector3 = Vector3::new(1.0, 1.0, 1.0);

    /// Unit vector along X.
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    /// Unit vector along Y.
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    /// Unit vector along Z.
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Create a vector from three explicit components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Alias of [`Vector3::new`].
    #[inline]
    #[must_use]
    pub const fn from_components(x: f64, y: f64, z: f64) -> Self {
        Vector3::new(x, y, z)
    }

    /// Broadcast a scalar to all three components: `(s, s, s)`.
    #[inline]
    #[must_use]
    pub const fn splat(s: f64) -> Self {
        Vector3::new(s, s, s)
    }

    /// Alias of [`Vector3::splat`].
    #[inline]
    #[must_use]
    pub const fn from_scalar(s: f64) -> Self {
        Vector3::splat(s)
    }

    /// Copy the components of any vector-like aggregate.
    #[inline]
    #[must_use]
    pub fn from_aggregate<A: IsVector + ?Sized>(aggregate: &A) -> Self {
        Vector3::new(aggregate.x(), aggregate.y(), aggregate.z())
    }

    /// Return the components as an `(x, y, z)` tuple.
    #[inline]
    #[must_use]
    pub const fn unpack(self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Return the components as an array.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// View a slice of vectors as a flat slice of `3 * len` components.
    #[cfg(feature = "bytemuck")]
    #[must_use]
    pub fn as_flat_slice(vectors: &[Vector3]) -> &[f64] {
        bytemuck::cast_slice(vectors)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<f64> for Vector3 {
    fn from(s: f64) -> Self {
        Vector3::splat(s)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<Vector3> for (f64, f64, f64) {
    fn from(v: Vector3) -> Self {
        v.unpack()
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        match *values {
            [x, y, z] => Ok(Vector3::new(x, y, z)),
            _ => Err(Error::invalid_argument(format!(
                "expected 3 components, got {}",
                values.len()
            ))),
        }
    }
}

#[cfg(feature = "nalgebra")]
impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "nalgebra")]
impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

// ============================================================================
// OUT-PARAMETER ARITHMETIC
// ============================================================================

impl Vector3 {
    /// `self = a + b`
    #[inline]
    pub fn set_add(&mut self, a: Vector3, b: Vector3) -> &mut Self {
        self.x = a.x + b.x;
        self.y = a.y + b.y;
        self.z = a.z + b.z;
        self
    }

    /// `self = a - b`
    #[inline]
    pub fn set_sub(&mut self, a: Vector3, b: Vector3) -> &mut Self {
        self.x = a.x - b.x;
        self.y = a.y - b.y;
        self.z = a.z - b.z;
        self
    }

    /// `self = a * s`
    #[inline]
    pub fn set_mul(&mut self, a: Vector3, s: f64) -> &mut Self {
        self.x = a.x * s;
        self.y = a.y * s;
        self.z = a.z * s;
        self
    }

    /// `self = a / s`. A zero `s` yields `±Infinity` or `NaN` components.
    #[inline]
    pub fn set_div(&mut self, a: Vector3, s: f64) -> &mut Self {
        self.x = a.x / s;
        self.y = a.y / s;
        self.z = a.z / s;
        self
    }

    /// `self = a × b`
    #[inline]
    pub fn set_cross(&mut self, a: Vector3, b: Vector3) -> &mut Self {
        *self = a.cross(b);
        self
    }

    /// `self = a / |a|`. See [`Vector3::normalized`] for the zero-length case.
    #[inline]
    pub fn set_normalize(&mut self, a: Vector3) -> &mut Self {
        *self = a.normalized();
        self
    }
}

// ============================================================================
// GEOMETRY
// ============================================================================

impl Vector3 {
    /// Dot product.
    #[inline]
    #[must_use]
    pub fn dot(self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product `self × other`.
    #[inline]
    #[must_use]
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    #[inline]
    #[must_use]
    pub fn len(self) -> f64 {
        self.len2().sqrt()
    }

    /// Squared length. Prefer this over `len` when only relative magnitude matters.
    #[inline]
    #[must_use]
    pub fn len2(self) -> f64 {
        self.dot(self)
    }

    /// Distance between two points.
    #[inline]
    #[must_use]
    pub fn dist(self, other: Vector3) -> f64 {
        (self - other).len()
    }

    /// Squared distance between two points.
    #[inline]
    #[must_use]
    pub fn dist2(self, other: Vector3) -> f64 {
        (self - other).len2()
    }

    /// Unit vector in the direction of `self`.
    ///
    /// The zero vector has no direction: each component becomes `0 / 0`, so
    /// the result is `NaN` in every field.
    #[must_use]
    pub fn normalized(self) -> Vector3 {
        let len = self.len();
        if len == 0.0 {
            tracing::trace!("normalizing a zero-length vector, result is NaN");
        }
        self / len
    }

    /// Unit vector in the direction of `self`, or `None` when the length is
    /// zero or not finite.
    #[must_use]
    pub fn try_normalized(self) -> Option<Vector3> {
        let len = self.len();
        (len > 0.0 && len.is_finite()).then(|| self / len)
    }

    /// Linear interpolation `self + s * (other - self)`. `s` is not clamped.
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Vector3, s: f64) -> Vector3 {
        self + (other - self) * s
    }
}

// ============================================================================
// OPERATORS
// ============================================================================

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        let mut out = Vector3::ZERO;
        out.set_add(self, rhs);
        out
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        let mut out = Vector3::ZERO;
        out.set_sub(self, rhs);
        out
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f64) -> Vector3 {
        let mut out = Vector3::ZERO;
        out.set_mul(self, rhs);
        out
    }
}

// s * v is the same scaling as v * s
impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: f64) -> Vector3 {
        let mut out = Vector3::ZERO;
        out.set_div(self, rhs);
        out
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.set_add(*self, rhs);
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.set_sub(*self, rhs);
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.set_mul(*self, rhs);
    }
}

impl DivAssign<f64> for Vector3 {
    fn div_assign(&mut self, rhs: f64) {
        self.set_div(*self, rhs);
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    #[track_caller]
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of range: {index}"),
        }
    }
}

// ============================================================================
// TEXT FORM
// ============================================================================

/// Renders `(+x,+y,+z)` with a forced sign. Three decimals unless the
/// formatter carries a precision, e.g. `{:.1}`.
///
/// Non-finite components render as `+inf`, `-inf` and `NaN`. A NaN never
/// carries a sign, so `normalized()` of the zero vector prints `(NaN,NaN,NaN)`
/// where C's `%+0.3f` would print `+nan`/`-nan`.
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(
            f,
            "({:+.*},{:+.*},{:+.*})",
            p, self.x, p, self.y, p, self.z
        )
    }
}

/// Parses the `Display` form, with or without the surrounding parentheses.
impl FromStr for Vector3 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let mut components = [0.0; 3];
        let mut parts = inner.split(',');
        for (slot, name) in components.iter_mut().zip(["x", "y", "z"]) {
            let part = parts.next().ok_or_else(|| {
                Error::invalid_argument(format!("missing component '{name}' in {s:?}"))
            })?;
            *slot = part.trim().parse::<f64>().map_err(|_| {
                Error::invalid_argument(format!(
                    "component '{name}' is not a number: {:?}",
                    part.trim()
                ))
            })?;
        }
        if parts.next().is_some() {
            return Err(Error::invalid_argument(format!(
                "expected 3 components in {s:?}"
            )));
        }

        Ok(Vector3::from(components))
    }
}

/// Serializes to the `Display` shape, but with each component at shortest
/// round-trip precision instead of three decimals, so values survive intact.
impl Serialize for Vector3 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("({:+},{:+},{:+})", self.x, self.y, self.z))
    }
}

impl<'de> Deserialize<'de> for Vector3 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// TOLERANT COMPARISON
// ============================================================================

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}
