//! Immutable 2D vector with arithmetic and geometric helpers.
//!
//! Operators take and return `Vector` by value; nothing mutates in place except the
//! `*Assign` operators, which rebind the left-hand side.

use crate::error::ErrorKind;
use std::any::{type_name, Any};
use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VectorError {
    #[error("cannot normalize zero vector")]
    ZeroVectorNormalization,
    #[error("{op} is undefined for a zero vector")]
    ZeroVectorOperand { op: &'static str },
    #[error("component division by zero")]
    DivisionByZero,
    #[error("unsupported operand type for {op}: 'Vector' and '{type_name}'")]
    UnsupportedOperand { op: &'static str, type_name: &'static str },
}

impl VectorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VectorError::UnsupportedOperand { .. } => ErrorKind::Type,
            _ => ErrorKind::Value,
        }
    }
}

/// A 2D vector of `f64` components.
///
/// Equality is exact IEEE equality of both components and hashing agrees with it,
/// so vectors work as set members and map keys. Components are expected to be finite.
///
/// ```
/// use deck_vector::vector::Vector;
///
/// let v = Vector::new(3, 4);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v + Vector::new(2, 1), Vector::new(5, 5));
/// assert_eq!(v * 2.0, 2.0 * v);
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// Primitive numbers accepted as vector components.
///
/// Every integer width converts with `as f64`, so values beyond 2^53 round to the
/// nearest representable float.
pub trait Component: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_component {
    ($($t:ty),*) => {
        $(impl Component for $t {
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
        })*
    };
}

impl_component!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Vector {
    pub fn new<X: Component, Y: Component>(x: X, y: Y) -> Self {
        Self { x: x.to_f64(), y: y.to_f64() }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub const fn unit_x() -> Self {
        Self { x: 1.0, y: 0.0 }
    }

    pub const fn unit_y() -> Self {
        Self { x: 0.0, y: 1.0 }
    }

    pub const fn as_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Euclidean length, computed with `hypot` so large components do not overflow.
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn is_non_zero(self) -> bool {
        self.magnitude() != 0.0
    }

    pub fn is_zero(self) -> bool {
        !self.is_non_zero()
    }

    /// Unary plus: a copy with the same components.
    pub const fn identity(self) -> Self {
        self
    }

    pub fn scale(self, scalar: f64) -> Self {
        Self { x: self.x * scalar, y: self.y * scalar }
    }

    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Angle from the positive x axis, in (-π, π].
    pub fn angle(self) -> f64 {
        let a = self.y.atan2(self.x);
        // atan2(-0.0, x < 0) lands on -π, outside the half-open range
        if a == -PI {
            PI
        } else {
            a
        }
    }

    pub fn normalized(self) -> Result<Vector, VectorError> {
        let m = self.magnitude();
        if m == 0.0 {
            return Err(VectorError::ZeroVectorNormalization);
        }
        Ok(Self { x: self.x / m, y: self.y / m })
    }

    pub fn distance_to(self, other: Vector) -> f64 {
        (self - other).magnitude()
    }

    pub fn distance_squared_to(self, other: Vector) -> f64 {
        (self - other).magnitude_squared()
    }

    /// Unsigned angle between two vectors, in [0, π].
    pub fn angle_with(self, other: Vector) -> Result<f64, VectorError> {
        let denom = self.magnitude() * other.magnitude();
        if denom == 0.0 {
            return Err(VectorError::ZeroVectorOperand { op: "angle_with" });
        }
        Ok((self.dot(other) / denom).clamp(-1.0, 1.0).acos())
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotated(self, angle: f64) -> Vector {
        let (sin, cos) = angle.sin_cos();
        Self { x: self.x * cos - self.y * sin, y: self.x * sin + self.y * cos }
    }

    pub fn project_onto(self, other: Vector) -> Result<Vector, VectorError> {
        if other.is_zero() {
            return Err(VectorError::ZeroVectorOperand { op: "project_onto" });
        }
        // squaring a tiny length underflows, so normalise first
        let len = other.magnitude();
        let unit = Self { x: other.x / len, y: other.y / len };
        Ok(unit * self.dot(unit))
    }

    /// Rotated a quarter turn counter-clockwise.
    pub fn perpendicular(self) -> Vector {
        Self { x: -self.y, y: self.x }
    }

    pub fn lerp(self, other: Vector, t: f64) -> Vector {
        self + (other - self) * t
    }

    pub fn approx_eq(self, other: Vector, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    pub fn component_mul(self, other: Vector) -> Vector {
        Self { x: self.x * other.x, y: self.y * other.y }
    }

    pub fn component_div(self, other: Vector) -> Result<Vector, VectorError> {
        if other.x == 0.0 || other.y == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(Self { x: self.x / other.x, y: self.y / other.y })
    }

    pub fn min_components(self, other: Vector) -> Vector {
        Self { x: self.x.min(other.x), y: self.y.min(other.y) }
    }

    pub fn max_components(self, other: Vector) -> Vector {
        Self { x: self.x.max(other.x), y: self.y.max(other.y) }
    }

    /// Clamp each component into `[min, max]`.
    pub fn clamp(self, min: f64, max: f64) -> Vector {
        Self { x: self.x.max(min).min(max), y: self.y.max(min).min(max) }
    }

    /// Equality against a value of any type; non-vectors are simply unequal.
    pub fn eq_any<T: Any>(&self, other: &T) -> bool {
        (other as &dyn Any).downcast_ref::<Vector>().is_some_and(|v| v == self)
    }

    pub fn try_add<T: Any>(self, other: &T) -> Result<Vector, VectorError> {
        Ok(self + vector_operand(other, "+")?)
    }

    pub fn try_sub<T: Any>(self, other: &T) -> Result<Vector, VectorError> {
        Ok(self - vector_operand(other, "-")?)
    }

    /// Scale by any primitive number.
    pub fn try_scale<T: Any>(self, scalar: &T) -> Result<Vector, VectorError> {
        scalar_operand(scalar)
            .map(|s| self.scale(s))
            .ok_or(VectorError::UnsupportedOperand { op: "*", type_name: type_name::<T>() })
    }
}

fn vector_operand<T: Any>(other: &T, op: &'static str) -> Result<Vector, VectorError> {
    (other as &dyn Any)
        .downcast_ref::<Vector>()
        .copied()
        .ok_or(VectorError::UnsupportedOperand { op, type_name: type_name::<T>() })
}

fn scalar_operand<T: Any>(value: &T) -> Option<f64> {
    let any = value as &dyn Any;
    macro_rules! coerce {
        ($($t:ty),*) => {
            $(if let Some(&v) = any.downcast_ref::<$t>() {
                return Some(Component::to_f64(v));
            })*
        };
    }
    coerce!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
    None
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

// NaN components break reflexivity; finite components are assumed throughout.
impl Eq for Vector {}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 == 0.0, so both must hash alike
        let canon = |v: f64| if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() };
        canon(self.x).hash(state);
        canon(self.y).hash(state);
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Vector) -> Vector {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Vector) -> Vector {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        rhs.scale(self)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Self { x: -self.x, y: -self.y }
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Vector>>(iter: I) -> Vector {
        iter.fold(Vector::zero(), Add::add)
    }
}
