//! 3D vector kernel.
//!
//! [`Vector3`] mirrors [`Vector2`](crate::Vector2) and adds the operations
//! that only make sense in space: cross product, projection, spherical
//! interpolation, Gram-Schmidt orthonormalization and rotation toward a
//! target direction.
//!
//! # Usage
//!
//! ```rust
//! use vecx_math::{Vector3, vec3};
//!
//! let up = vec3::cross(Vector3::RIGHT, Vector3::FORWARD);
//! assert_eq!(up, Vector3::DOWN);
//!
//! let mut normal = Vector3::new(2.0, 0.0, 0.0);
//! let mut tangent = Vector3::new(1.0, 1.0, 0.0);
//! vec3::ortho_normalize(&mut normal, &mut tangent);
//! assert_eq!(normal, Vector3::RIGHT);
//! assert_eq!(tangent, Vector3::UP);
//! ```

use std::fmt;
use std::ops;
use std::str::FromStr;

use tracing::trace;
use vecx_core::{EPSILON, EPSILON_NORMAL_SQRT, Error, MACHINE_EPSILON, RAD_TO_DEG, Result, scalar};

use crate::operand::Operand;
use crate::text::{self, Component};

/// Dot product above which [`slerp_unclamped`] falls back to normalized
/// linear interpolation.
pub const SLERP_LINEAR_THRESHOLD: f64 = 0.9995;

/// A 3D vector of `f64` components.
///
/// Equality is exact component-wise equality, without tolerance.
///
/// # Components
///
/// Access via `.x`, `.y`, `.z`, index `[0]`, `[1]`, `[2]`, or the checked
/// [`component`](Vector3::component) accessor.
///
/// # Example
///
/// ```rust
/// use vecx_math::{Vector3, vec3};
///
/// let v = Vector3::new(0.0, 3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v[2], 4.0);
/// assert_eq!(vec3::dot(v, Vector3::UP), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

impl Vector3 {
    /// Number of components.
    pub const DIMENSION: usize = 3;

    /// Magnitude below which [`normalize`] yields zero.
    pub const EPSILON: f64 = EPSILON;

    /// Threshold below which [`angle`] reports 0.
    pub const EPSILON_NORMAL_SQRT: f64 = EPSILON_NORMAL_SQRT;

    /// (0, 0, 0)
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// (1, 1, 1)
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// (0, 1, 0)
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    /// (0, -1, 0)
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    /// (-1, 0, 0)
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    /// (1, 0, 0)
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    /// (0, 0, 1)
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    /// (0, 0, -1)
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);
    /// (+∞, +∞, +∞)
    pub const POSITIVE_INFINITY: Self = Self::splat(f64::INFINITY);
    /// (-∞, -∞, -∞)
    pub const NEGATIVE_INFINITY: Self = Self::splat(f64::NEG_INFINITY);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector in the XY plane (`z = 0`).
    #[inline]
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Creates a vector with all components set to the same value.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Copy of `other`.
    #[inline]
    pub const fn from_vector(other: Self) -> Self {
        Self::new(other.x, other.y, other.z)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Parses `"(x, y, z)"` the legacy way: never fails, unreadable
    /// components become NaN and missing ones 0.
    ///
    /// Use [`str::parse`] for a checked parse.
    pub fn from_string_lossy(s: &str) -> Self {
        Self::from_array(text::lossy_components(s))
    }

    /// Overwrites all components.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Overwrites all components from another vector.
    #[inline]
    pub fn set_from(&mut self, other: Self) -> &mut Self {
        self.set(other.x, other.y, other.z)
    }

    /// Overwrites the x component only.
    #[inline]
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.x = x;
        self
    }

    /// Overwrites the y component only.
    #[inline]
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.y = y;
        self
    }

    /// Overwrites the z component only.
    #[inline]
    pub fn set_z(&mut self, z: f64) -> &mut Self {
        self.z = z;
        self
    }

    /// Euclidean length, computed without intermediate overflow.
    #[inline]
    pub fn magnitude(self) -> f64 {
        scalar::hypot3(self.x, self.y, self.z)
    }

    /// Squared length.
    #[inline]
    pub fn sqr_magnitude(self) -> f64 {
        sqr_magnitude(self)
    }

    /// Unit vector in the same direction, or zero when the magnitude is at
    /// most [`Vector3::EPSILON`].
    #[inline]
    pub fn normalized(self) -> Self {
        normalize(self)
    }

    /// Normalizes in place.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let n = normalize(*self);
        self.set_from(n)
    }

    /// Adds a vector or scalar in place.
    #[inline]
    pub fn add(&mut self, rhs: impl Into<Operand<Self>>) -> &mut Self {
        *self = add(*self, rhs);
        self
    }

    /// Subtracts a vector or scalar in place.
    #[inline]
    pub fn subtract(&mut self, rhs: impl Into<Operand<Self>>) -> &mut Self {
        *self = subtract(*self, rhs);
        self
    }

    /// Multiplies by a vector (component-wise) or scalar in place.
    #[inline]
    pub fn multiply(&mut self, rhs: impl Into<Operand<Self>>) -> &mut Self {
        *self = multiply(*self, rhs);
        self
    }

    /// Divides by a vector (component-wise) or scalar in place.
    #[inline]
    pub fn divide(&mut self, rhs: impl Into<Operand<Self>>) -> &mut Self {
        *self = divide(*self, rhs);
        self
    }

    /// Component-wise product in place.
    #[inline]
    pub fn scale(&mut self, other: Self) -> &mut Self {
        *self = *self * other;
        self
    }

    /// Negates all components in place.
    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        *self = -*self;
        self
    }

    /// Absolute value of all components in place.
    #[inline]
    pub fn abs(&mut self) -> &mut Self {
        *self = abs(*self);
        self
    }

    /// Floors all components in place.
    #[inline]
    pub fn floor(&mut self) -> &mut Self {
        *self = floor(*self);
        self
    }

    /// Ceils all components in place.
    #[inline]
    pub fn ceil(&mut self) -> &mut Self {
        *self = ceil(*self);
        self
    }

    /// Rounds all components in place, halves toward +∞.
    #[inline]
    pub fn round(&mut self) -> &mut Self {
        *self = round(*self);
        self
    }

    /// Component-wise minimum with `other`, in place.
    #[inline]
    pub fn min(&mut self, other: Self) -> &mut Self {
        *self = min(*self, other);
        self
    }

    /// Component-wise maximum with `other`, in place.
    #[inline]
    pub fn max(&mut self, other: Self) -> &mut Self {
        *self = max(*self, other);
        self
    }

    /// Exact component-wise equality.
    #[inline]
    pub fn equals(self, other: Self) -> bool {
        equals(self, other)
    }

    /// Component at position `index` (0 → x, 1 → y, 2 → z).
    pub fn component(self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(Error::component_out_of_range(index, Self::DIMENSION)),
        }
    }

    /// Writes the component at position `index`.
    pub fn set_component(&mut self, index: usize, value: f64) -> Result<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(Error::component_out_of_range(index, Self::DIMENSION)),
        }
        Ok(())
    }

    /// Iterates over `x, y, z`. Each call starts a fresh pass.
    #[inline]
    pub fn iter(self) -> std::array::IntoIter<f64, 3> {
        self.to_array().into_iter()
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Converts to glam DVec3.
    #[inline]
    pub fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam DVec3.
    #[inline]
    pub fn from_glam(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Squared length.
#[inline]
pub fn sqr_magnitude(v: Vector3) -> f64 {
    v.x * v.x + v.y * v.y + v.z * v.z
}

/// Unit vector in the direction of `v`, or [`Vector3::ZERO`] when
/// `|v| <= EPSILON`.
#[inline]
pub fn normalize(v: Vector3) -> Vector3 {
    let magnitude = v.magnitude();
    if magnitude > EPSILON {
        v / magnitude
    } else {
        Vector3::ZERO
    }
}

/// Spherical interpolation with `t` clamped to [0, 1].
#[inline]
pub fn slerp(a: Vector3, b: Vector3, t: f64) -> Vector3 {
    slerp_unclamped(a, b, scalar::clamp01(t))
}

/// Spherical interpolation between two directions without clamping `t`.
///
/// When `dot(a, b)` exceeds [`SLERP_LINEAR_THRESHOLD`] the directions are
/// nearly parallel and the result is the normalized linear interpolation.
/// Otherwise the result is `a * cos(θ) + normalize(a * dot - b) * sin(θ)`
/// with `θ = acos(dot) * t`.
pub fn slerp_unclamped(a: Vector3, b: Vector3, t: f64) -> Vector3 {
    let dot = dot(a, b);
    if dot > SLERP_LINEAR_THRESHOLD {
        return normalize((b - a) * t + a);
    }

    let dot = scalar::clamp(dot, -1.0, 1.0);
    let theta = dot.acos() * t;
    a * theta.cos() + normalize(a * dot - b) * theta.sin()
}

/// Gram-Schmidt: makes `normal` unit length and `tangent` a unit vector
/// perpendicular to it.
///
/// Both arguments are overwritten.
pub fn ortho_normalize(normal: &mut Vector3, tangent: &mut Vector3) {
    normal.normalize();
    let along_normal = *normal * dot(*tangent, *normal);
    tangent.subtract(along_normal).normalize();
}

/// [`ortho_normalize`], then makes `binormal` a unit vector perpendicular to
/// both `normal` and `tangent`.
///
/// All three arguments are overwritten.
pub fn ortho_normalize_with_binormal(
    normal: &mut Vector3,
    tangent: &mut Vector3,
    binormal: &mut Vector3,
) {
    ortho_normalize(normal, tangent);
    let along_normal = *normal * dot(*binormal, *normal);
    binormal.subtract(along_normal);
    let along_tangent = *tangent * dot(*binormal, *tangent);
    binormal.subtract(along_tangent).normalize();
}

/// Rotates `current` toward `target` by at most `max_radians_delta`, and
/// moves its length toward `|target|` by at most `max_magnitude_delta`.
///
/// The resulting length is `min(|current| + max_magnitude_delta, |target|)`.
/// When the two directions are already aligned the rotation step is skipped.
pub fn rotate_towards(
    current: Vector3,
    target: Vector3,
    max_radians_delta: f64,
    max_magnitude_delta: f64,
) -> Vector3 {
    let current_magnitude = current.magnitude();
    let target_magnitude = target.magnitude();

    let from = current.normalized();
    let to = target.normalized();
    let theta = scalar::clamp(dot(from, to), -1.0, 1.0).acos();

    let mut rotated = if theta == 0.0 {
        trace!("rotate_towards: directions already aligned");
        from
    } else {
        let angle = scalar::min(max_radians_delta, theta);
        slerp_unclamped(from, to, angle / theta)
    };

    rotated.multiply(scalar::min(
        current_magnitude + max_magnitude_delta,
        target_magnitude,
    ));
    rotated
}

/// Linear interpolation with `t` clamped to [0, 1].
#[inline]
pub fn lerp(a: Vector3, b: Vector3, t: f64) -> Vector3 {
    lerp_unclamped(a, b, scalar::clamp01(t))
}

/// Linear interpolation without clamping: `a + (b - a) * t`.
#[inline]
pub fn lerp_unclamped(a: Vector3, b: Vector3, t: f64) -> Vector3 {
    Vector3::new(
        a.x + (b.x - a.x) * t,
        a.y + (b.y - a.y) * t,
        a.z + (b.z - a.z) * t,
    )
}

/// Moves `current` toward `target` by at most `max_distance_delta`.
///
/// Snaps to `target` when already there or within reach. A negative
/// `max_distance_delta` moves away from `target`.
pub fn move_towards(current: Vector3, target: Vector3, max_distance_delta: f64) -> Vector3 {
    let delta = target - current;
    let sqr_distance = sqr_magnitude(delta);
    if sqr_distance == 0.0
        || (max_distance_delta >= 0.0 && sqr_distance <= max_distance_delta * max_distance_delta)
    {
        return target;
    }

    let distance = sqr_distance.sqrt();
    Vector3::new(
        current.x + delta.x / distance * max_distance_delta,
        current.y + delta.y / distance * max_distance_delta,
        current.z + delta.z / distance * max_distance_delta,
    )
}

/// [`smooth_damp_with_max_speed`] without a speed limit.
#[inline]
pub fn smooth_damp(
    current: Vector3,
    target: Vector3,
    current_velocity: &mut Vector3,
    smooth_time: f64,
    delta_time: f64,
) -> Vector3 {
    smooth_damp_with_max_speed(
        current,
        target,
        current_velocity,
        smooth_time,
        delta_time,
        f64::INFINITY,
    )
}

/// Critically damped spring step from `current` toward `target`.
///
/// Returns the new position and writes the new velocity into
/// `current_velocity`. A step past the speed-limited step target stops on
/// it with zero velocity. The damping uses the cheap polynomial
/// `1 / (1 + x + 0.48x² + 0.235x³)` in place of `exp(-x)`.
pub fn smooth_damp_with_max_speed(
    current: Vector3,
    target: Vector3,
    current_velocity: &mut Vector3,
    smooth_time: f64,
    delta_time: f64,
    max_speed: f64,
) -> Vector3 {
    let smooth_time = scalar::max(0.0001, smooth_time);
    let omega = 2.0 / smooth_time;
    let x = omega * delta_time;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let mut change = current - target;
    let max_change = max_speed * smooth_time;
    let sqr_change = sqr_magnitude(change);
    if sqr_change > max_change * max_change {
        change = change / sqr_change.sqrt() * max_change;
    }

    let local_target = current - change;
    let temp = (*current_velocity + change * omega) * delta_time;
    *current_velocity = (*current_velocity - temp * omega) * decay;
    let mut output = local_target + (change + temp) * decay;

    // Overshoot is measured against the speed-limited step target.
    if dot(local_target - current, output - local_target) > 0.0 {
        trace!(?local_target, "smooth_damp overshoot, snapping to step target");
        output = local_target;
        *current_velocity = (output - local_target) / delta_time;
    }

    output
}

/// Exact component-wise equality.
#[inline]
pub fn equals(a: Vector3, b: Vector3) -> bool {
    a.x == b.x && a.y == b.y && a.z == b.z
}

/// Dot product.
#[inline]
pub fn dot(a: Vector3, b: Vector3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Component-wise product.
#[inline]
pub fn scale(a: Vector3, b: Vector3) -> Vector3 {
    a * b
}

/// Cross product.
#[inline]
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Reflects `in_direction` off the plane with normal `in_normal`.
#[inline]
pub fn reflect(in_direction: Vector3, in_normal: Vector3) -> Vector3 {
    let factor = -2.0 * dot(in_normal, in_direction);
    Vector3::new(
        factor * in_normal.x + in_direction.x,
        factor * in_normal.y + in_direction.y,
        factor * in_normal.z + in_direction.z,
    )
}

/// Projection of `vector` onto the line spanned by `on_normal`.
///
/// Zero when `on_normal` is (numerically) zero.
pub fn project(vector: Vector3, on_normal: Vector3) -> Vector3 {
    let sqr = dot(on_normal, on_normal);
    if sqr < MACHINE_EPSILON {
        return Vector3::ZERO;
    }

    let d = dot(vector, on_normal);
    Vector3::new(
        on_normal.x * d / sqr,
        on_normal.y * d / sqr,
        on_normal.z * d / sqr,
    )
}

/// `vector` minus its projection onto `plane_normal`.
///
/// Returns `vector` unchanged when `plane_normal` is (numerically) zero.
pub fn project_on_plane(vector: Vector3, plane_normal: Vector3) -> Vector3 {
    let sqr = dot(plane_normal, plane_normal);
    if sqr < MACHINE_EPSILON {
        return vector;
    }

    let d = dot(vector, plane_normal);
    Vector3::new(
        vector.x - plane_normal.x * d / sqr,
        vector.y - plane_normal.y * d / sqr,
        vector.z - plane_normal.z * d / sqr,
    )
}

/// Unsigned angle in degrees, in [0, 180].
///
/// Returns 0 when either vector is (nearly) zero.
pub fn angle(from: Vector3, to: Vector3) -> f64 {
    let denominator = (from.sqr_magnitude() * to.sqr_magnitude()).sqrt();
    if denominator < EPSILON_NORMAL_SQRT {
        return 0.0;
    }

    let cos = scalar::clamp(dot(from, to) / denominator, -1.0, 1.0);
    cos.acos() * RAD_TO_DEG
}

/// Angle in degrees, signed by which side of `axis` the rotation from
/// `from` to `to` falls.
pub fn signed_angle(from: Vector3, to: Vector3, axis: Vector3) -> f64 {
    angle(from, to) * scalar::sign(dot(cross(from, to), axis))
}

/// Angle in radians between the normalized inputs.
#[deprecated(note = "uses radians; use `angle`, which returns degrees")]
pub fn angle_between(from: Vector3, to: Vector3) -> f64 {
    scalar::clamp(dot(from.normalized(), to.normalized()), -1.0, 1.0).acos()
}

/// Distance between two points.
#[inline]
pub fn distance(a: Vector3, b: Vector3) -> f64 {
    scalar::hypot3(a.x - b.x, a.y - b.y, a.z - b.z)
}

/// Copy of `vector` with its length limited to `max_length`.
pub fn clamp_magnitude(vector: Vector3, max_length: f64) -> Vector3 {
    let sqr = vector.sqr_magnitude();
    if sqr > max_length * max_length {
        let length = sqr.sqrt();
        return Vector3::new(
            vector.x / length * max_length,
            vector.y / length * max_length,
            vector.z / length * max_length,
        );
    }
    vector
}

/// Component-wise minimum.
#[inline]
pub fn min(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(
        scalar::min(a.x, b.x),
        scalar::min(a.y, b.y),
        scalar::min(a.z, b.z),
    )
}

/// Component-wise maximum.
#[inline]
pub fn max(a: Vector3, b: Vector3) -> Vector3 {
    Vector3::new(
        scalar::max(a.x, b.x),
        scalar::max(a.y, b.y),
        scalar::max(a.z, b.z),
    )
}

/// Component-wise floor.
#[inline]
pub fn floor(v: Vector3) -> Vector3 {
    Vector3::new(v.x.floor(), v.y.floor(), v.z.floor())
}

/// Component-wise ceiling.
#[inline]
pub fn ceil(v: Vector3) -> Vector3 {
    Vector3::new(v.x.ceil(), v.y.ceil(), v.z.ceil())
}

/// Component-wise rounding, halves toward +∞.
#[inline]
pub fn round(v: Vector3) -> Vector3 {
    Vector3::new(scalar::round(v.x), scalar::round(v.y), scalar::round(v.z))
}

/// `a + b` for a vector or scalar `b`.
#[inline]
pub fn add(a: Vector3, b: impl Into<Operand<Vector3>>) -> Vector3 {
    match b.into() {
        Operand::Vector(v) => a + v,
        Operand::Scalar(s) => a + s,
    }
}

/// `a - b` for a vector or scalar `b`.
#[inline]
pub fn subtract(a: Vector3, b: impl Into<Operand<Vector3>>) -> Vector3 {
    match b.into() {
        Operand::Vector(v) => a - v,
        Operand::Scalar(s) => a - s,
    }
}

/// `a * b` for a vector (component-wise) or scalar `b`.
#[inline]
pub fn multiply(a: Vector3, b: impl Into<Operand<Vector3>>) -> Vector3 {
    match b.into() {
        Operand::Vector(v) => a * v,
        Operand::Scalar(s) => a * s,
    }
}

/// `a / b` for a vector (component-wise) or scalar `b`.
#[inline]
pub fn divide(a: Vector3, b: impl Into<Operand<Vector3>>) -> Vector3 {
    match b.into() {
        Operand::Vector(v) => a / v,
        Operand::Scalar(s) => a / s,
    }
}

/// Negated copy.
#[inline]
pub fn negate(v: Vector3) -> Vector3 {
    -v
}

/// Component-wise absolute value.
#[inline]
pub fn abs(v: Vector3) -> Vector3 {
    Vector3::new(v.x.abs(), v.y.abs(), v.z.abs())
}

// ============================================================================
// Trait impls
// ============================================================================

impl ops::Index<usize> for Vector3 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", i),
        }
    }
}

impl ops::IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: {}", i),
        }
    }
}

// Vector3 + Vector3
impl ops::Add for Vector3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Vector3 + f64
impl ops::Add<f64> for Vector3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

// Vector3 - Vector3
impl ops::Sub for Vector3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Vector3 - f64
impl ops::Sub<f64> for Vector3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

// Vector3 * Vector3 (component-wise)
impl ops::Mul for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

// Vector3 * f64
impl ops::Mul<f64> for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

// f64 * Vector3
impl ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

// Vector3 / Vector3 (component-wise)
impl ops::Div for Vector3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

// Vector3 / f64
impl ops::Div<f64> for Vector3 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl ops::Neg for Vector3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl ops::AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl ops::SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl ops::MulAssign<f64> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl ops::DivAssign<f64> for Vector3 {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl From<Vector3> for Operand<Vector3> {
    #[inline]
    fn from(v: Vector3) -> Self {
        Operand::Vector(v)
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(v: Vector3) -> [f64; 3] {
        v.to_array()
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    #[inline]
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<glam::DVec3> for Vector3 {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vector3> for glam::DVec3 {
    #[inline]
    fn from(v: Vector3) -> glam::DVec3 {
        v.to_glam()
    }
}

impl IntoIterator for Vector3 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Vector3 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 3>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            Component(self.x),
            Component(self.y),
            Component(self.z)
        )
    }
}

impl FromStr for Vector3 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        text::parse_components(s).map(Self::from_array)
    }
}
