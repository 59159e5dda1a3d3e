//! 2D vector kernel.
//!
//! [`Vector2`] is a plain `Copy` value. Operations come in two shapes:
//!
//! - free functions in this module (`vec2::lerp(a, b, t)`, `vec2::add(a, 2.0)`)
//!   that take explicit operands and return a new vector
//! - methods that mutate the receiver and return `&mut Self` for chaining
//!   (`v.add(2.0).normalize()`)
//!
//! # Usage
//!
//! ```rust
//! use vecx_math::{Vector2, vec2};
//!
//! let mut v = Vector2::new(1.0, 2.0);
//! assert_eq!(vec2::add(v, 2.0), Vector2::new(3.0, 4.0));
//! assert_eq!(v, Vector2::new(1.0, 2.0));
//!
//! v.add(2.0);
//! assert_eq!(v, Vector2::new(3.0, 4.0));
//! ```

use std::fmt;
use std::ops;
use std::str::FromStr;

use tracing::trace;
use vecx_core::{EPSILON, EPSILON_NORMAL_SQRT, Error, RAD_TO_DEG, Result, scalar};

use crate::operand::Operand;
use crate::text::{self, Component};

/// A 2D vector of `f64` components.
///
/// Equality is exact component-wise equality, without tolerance.
///
/// # Components
///
/// Access via `.x`, `.y`, index `[0]`, `[1]`, or the checked
/// [`component`](Vector2::component) accessor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
}

impl Vector2 {
    /// Number of components.
    pub const DIMENSION: usize = 2;

    /// Magnitude below which [`normalize`] yields zero.
    pub const EPSILON: f64 = EPSILON;

    /// Threshold below which [`angle`] reports 0.
    pub const EPSILON_NORMAL_SQRT: f64 = EPSILON_NORMAL_SQRT;

    /// (0, 0)
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// (1, 1)
    pub const ONE: Self = Self::new(1.0, 1.0);
    /// (0, 1)
    pub const UP: Self = Self::new(0.0, 1.0);
    /// (0, -1)
    pub const DOWN: Self = Self::new(0.0, -1.0);
    /// (-1, 0)
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    /// (1, 0)
    pub const RIGHT: Self = Self::new(1.0, 0.0);
    /// (+∞, +∞)
    pub const POSITIVE_INFINITY: Self = Self::new(f64::INFINITY, f64::INFINITY);
    /// (-∞, -∞)
    pub const NEGATIVE_INFINITY: Self = Self::new(f64::NEG_INFINITY, f64::NEG_INFINITY);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v)
    }

    /// Copy of `other`.
    #[inline]
    pub const fn from_vector(other: Self) -> Self {
        Self::new(other.x, other.y)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Parses `"(x, y)"` the legacy way: never fails, unreadable components
    /// become NaN.
    ///
    /// Use [`str::parse`] for a checked parse.
    ///
    /// ```rust
    /// use vecx_math::Vector2;
    ///
    /// let v = Vector2::from_string_lossy("(1, oops)");
    /// assert_eq!(v.x, 1.0);
    /// assert!(v.y.is_nan());
    /// ```
    pub fn from_string_lossy(s: &str) -> Self {
        Self::from_array(text::lossy_components(s))
    }

    /// Overwrites both components.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Overwrites both components from another vector.
    #[inline]
    pub fn set_from(&mut self, other: Self) -> &mut Self {
        self.set(other.x, other.y)
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

    /// Euclidean length, computed without intermediate overflow.
    #[inline]
    pub fn magnitude(self) -> f64 {
        scalar::hypot(self.x, self.y)
    }

    /// Squared length.
    #[inline]
    pub fn sqr_magnitude(self) -> f64 {
        sqr_magnitude(self)
    }

    /// Unit vector in the same direction, or zero when the magnitude is at
    /// most [`Vector2::EPSILON`].
    #[inline]
    pub fn normalized(self) -> Self {
        normalize(self)
    }

    /// Normalizes in place. See [`normalized`](Self::normalized).
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let n = normalize(*self);
        self.set_from(n)
    }

    /// Adds a vector or scalar in place.
    #[inline]
    pub fn add(&mut self, rhs: impl Into<Operand<Self>>) -> &mut Self {
        let r = add(*self, rhs);
        self.set_from(r)
    }

    /// Subtracts a vector or scalar in place.
    #[inline]
    pub fn subtract(&mut self, rhs: impl Into<Operand<Self>>) -> &mut Self {
        let r = subtract(*self, rhs);
        self.set_from(r)
    }

    /// Multiplies by a vector (component-wise) or scalar in place.
    #[inline]
    pub fn multiply(&mut self, rhs: impl Into<Operand<Self>>) -> &mut Self {
        let r = multiply(*self, rhs);
        self.set_from(r)
    }

    /// Divides by a vector (component-wise) or scalar in place.
    #[inline]
    pub fn divide(&mut self, rhs: impl Into<Operand<Self>>) -> &mut Self {
        let r = divide(*self, rhs);
        self.set_from(r)
    }

    /// Component-wise product in place.
    #[inline]
    pub fn scale(&mut self, other: Self) -> &mut Self {
        let r = scale(*self, other);
        self.set_from(r)
    }

    /// Negates both components in place.
    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        let r = negate(*self);
        self.set_from(r)
    }

    /// Absolute value of both components in place.
    #[inline]
    pub fn abs(&mut self) -> &mut Self {
        let r = abs(*self);
        self.set_from(r)
    }

    /// Floors both components in place.
    #[inline]
    pub fn floor(&mut self) -> &mut Self {
        let r = floor(*self);
        self.set_from(r)
    }

    /// Ceils both components in place.
    #[inline]
    pub fn ceil(&mut self) -> &mut Self {
        let r = ceil(*self);
        self.set_from(r)
    }

    /// Rounds both components in place, halves toward +∞.
    #[inline]
    pub fn round(&mut self) -> &mut Self {
        let r = round(*self);
        self.set_from(r)
    }

    /// Component-wise minimum with `other`, in place.
    #[inline]
    pub fn min(&mut self, other: Self) -> &mut Self {
        let r = min(*self, other);
        self.set_from(r)
    }

    /// Component-wise maximum with `other`, in place.
    #[inline]
    pub fn max(&mut self, other: Self) -> &mut Self {
        let r = max(*self, other);
        self.set_from(r)
    }

    /// Exact component-wise equality.
    #[inline]
    pub fn equals(self, other: Self) -> bool {
        equals(self, other)
    }

    /// Component at position `index` (0 → x, 1 → y).
    pub fn component(self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(Error::component_out_of_range(index, Self::DIMENSION)),
        }
    }

    /// Writes the component at position `index`.
    pub fn set_component(&mut self, index: usize, value: f64) -> Result<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(Error::component_out_of_range(index, Self::DIMENSION)),
        }
        Ok(())
    }

    /// Iterates over `x, y`. Each call starts a fresh pass.
    #[inline]
    pub fn iter(self) -> std::array::IntoIter<f64, 2> {
        self.to_array().into_iter()
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns true if any component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Converts to glam DVec2.
    #[inline]
    pub fn to_glam(self) -> glam::DVec2 {
        glam::DVec2::new(self.x, self.y)
    }

    /// Creates from glam DVec2.
    #[inline]
    pub fn from_glam(v: glam::DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Squared length.
#[inline]
pub fn sqr_magnitude(v: Vector2) -> f64 {
    v.x * v.x + v.y * v.y
}

/// Unit vector in the direction of `v`, or [`Vector2::ZERO`] when
/// `|v| <= EPSILON`.
///
/// ```rust
/// use vecx_math::{Vector2, vec2};
///
/// assert_eq!(vec2::normalize(Vector2::new(3.0, 4.0)), Vector2::new(0.6, 0.8));
/// assert_eq!(vec2::normalize(Vector2::new(1e-6, 0.0)), Vector2::ZERO);
/// ```
#[inline]
pub fn normalize(v: Vector2) -> Vector2 {
    let magnitude = v.magnitude();
    if magnitude > EPSILON {
        v / magnitude
    } else {
        Vector2::ZERO
    }
}

/// Linear interpolation with `t` clamped to [0, 1].
#[inline]
pub fn lerp(a: Vector2, b: Vector2, t: f64) -> Vector2 {
    lerp_unclamped(a, b, scalar::clamp01(t))
}

/// Linear interpolation without clamping: `a + (b - a) * t`.
#[inline]
pub fn lerp_unclamped(a: Vector2, b: Vector2, t: f64) -> Vector2 {
    Vector2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Moves `current` toward `target` by at most `max_distance_delta`.
///
/// Snaps to `target` when already there or within reach. A negative
/// `max_distance_delta` moves away from `target`.
pub fn move_towards(current: Vector2, target: Vector2, max_distance_delta: f64) -> Vector2 {
    let delta = target - current;
    let sqr_distance = sqr_magnitude(delta);
    if sqr_distance == 0.0
        || (max_distance_delta >= 0.0 && sqr_distance <= max_distance_delta * max_distance_delta)
    {
        return target;
    }

    let distance = sqr_distance.sqrt();
    Vector2::new(
        current.x + delta.x / distance * max_distance_delta,
        current.y + delta.y / distance * max_distance_delta,
    )
}

/// Component-wise product.
#[inline]
pub fn scale(a: Vector2, b: Vector2) -> Vector2 {
    a * b
}

/// Exact component-wise equality.
#[inline]
pub fn equals(a: Vector2, b: Vector2) -> bool {
    a.x == b.x && a.y == b.y
}

/// Dot product.
#[inline]
pub fn dot(lhs: Vector2, rhs: Vector2) -> f64 {
    lhs.x * rhs.x + lhs.y * rhs.y
}

/// Reflects `in_direction` off the surface with normal `in_normal`.
#[inline]
pub fn reflect(in_direction: Vector2, in_normal: Vector2) -> Vector2 {
    let factor = -2.0 * dot(in_normal, in_direction);
    Vector2::new(
        factor * in_normal.x + in_direction.x,
        factor * in_normal.y + in_direction.y,
    )
}

/// `v` rotated 90 degrees counter-clockwise.
#[inline]
pub fn perpendicular(in_direction: Vector2) -> Vector2 {
    Vector2::new(-in_direction.y, in_direction.x)
}

/// Unsigned angle in degrees, in [0, 180].
///
/// Returns 0 when either vector is (nearly) zero.
pub fn angle(from: Vector2, to: Vector2) -> f64 {
    let denominator = (from.sqr_magnitude() * to.sqr_magnitude()).sqrt();
    if denominator < EPSILON_NORMAL_SQRT {
        return 0.0;
    }

    let cos = scalar::clamp(dot(from, to) / denominator, -1.0, 1.0);
    cos.acos() * RAD_TO_DEG
}

/// Angle in degrees, positive when `to` is counter-clockwise from `from`.
pub fn signed_angle(from: Vector2, to: Vector2) -> f64 {
    angle(from, to) * scalar::sign(from.x * to.y - from.y * to.x)
}

/// Distance between two points.
#[inline]
pub fn distance(a: Vector2, b: Vector2) -> f64 {
    scalar::hypot(a.x - b.x, a.y - b.y)
}

/// Copy of `vector` with its length limited to `max_length`.
pub fn clamp_magnitude(vector: Vector2, max_length: f64) -> Vector2 {
    let sqr = vector.sqr_magnitude();
    if sqr > max_length * max_length {
        let length = sqr.sqrt();
        return Vector2::new(
            vector.x / length * max_length,
            vector.y / length * max_length,
        );
    }
    vector
}

/// [`smooth_damp_with_max_speed`] without a speed limit.
#[inline]
pub fn smooth_damp(
    current: Vector2,
    target: Vector2,
    current_velocity: &mut Vector2,
    smooth_time: f64,
    delta_time: f64,
) -> Vector2 {
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
/// `current_velocity`; pass the same velocity on every call.
///
/// `smooth_time` is the approximate time to reach the target and is raised to
/// at least `1e-4`. The per-step move is limited to `max_speed * smooth_time`.
/// A step that would pass the speed-limited step target stops on it with
/// zero velocity, so the result never overshoots `target`.
///
/// ```rust
/// use vecx_math::{Vector2, vec2};
///
/// let mut velocity = Vector2::ZERO;
/// let mut pos = Vector2::ZERO;
/// for _ in 0..600 {
///     pos = vec2::smooth_damp(pos, Vector2::ONE, &mut velocity, 0.3, 1.0 / 60.0);
/// }
/// assert!(vec2::distance(pos, Vector2::ONE) < 1e-6);
/// ```
pub fn smooth_damp_with_max_speed(
    current: Vector2,
    target: Vector2,
    current_velocity: &mut Vector2,
    smooth_time: f64,
    delta_time: f64,
    max_speed: f64,
) -> Vector2 {
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

/// Component-wise minimum.
#[inline]
pub fn min(lhs: Vector2, rhs: Vector2) -> Vector2 {
    Vector2::new(scalar::min(lhs.x, rhs.x), scalar::min(lhs.y, rhs.y))
}

/// Component-wise maximum.
#[inline]
pub fn max(lhs: Vector2, rhs: Vector2) -> Vector2 {
    Vector2::new(scalar::max(lhs.x, rhs.x), scalar::max(lhs.y, rhs.y))
}

/// `a + b` for a vector or scalar `b`.
#[inline]
pub fn add(a: Vector2, b: impl Into<Operand<Vector2>>) -> Vector2 {
    match b.into() {
        Operand::Vector(v) => a + v,
        Operand::Scalar(s) => a + s,
    }
}

/// `a - b` for a vector or scalar `b`.
#[inline]
pub fn subtract(a: Vector2, b: impl Into<Operand<Vector2>>) -> Vector2 {
    match b.into() {
        Operand::Vector(v) => a - v,
        Operand::Scalar(s) => a - s,
    }
}

/// `a * b` for a vector (component-wise) or scalar `b`.
#[inline]
pub fn multiply(a: Vector2, b: impl Into<Operand<Vector2>>) -> Vector2 {
    match b.into() {
        Operand::Vector(v) => a * v,
        Operand::Scalar(s) => a * s,
    }
}

/// `a / b` for a vector (component-wise) or scalar `b`.
#[inline]
pub fn divide(a: Vector2, b: impl Into<Operand<Vector2>>) -> Vector2 {
    match b.into() {
        Operand::Vector(v) => a / v,
        Operand::Scalar(s) => a / s,
    }
}

/// Negated copy.
#[inline]
pub fn negate(v: Vector2) -> Vector2 {
    -v
}

/// Component-wise absolute value.
#[inline]
pub fn abs(v: Vector2) -> Vector2 {
    Vector2::new(v.x.abs(), v.y.abs())
}

/// Component-wise floor.
#[inline]
pub fn floor(v: Vector2) -> Vector2 {
    Vector2::new(v.x.floor(), v.y.floor())
}

/// Component-wise ceiling.
#[inline]
pub fn ceil(v: Vector2) -> Vector2 {
    Vector2::new(v.x.ceil(), v.y.ceil())
}

/// Component-wise rounding, halves toward +∞.
#[inline]
pub fn round(v: Vector2) -> Vector2 {
    Vector2::new(scalar::round(v.x), scalar::round(v.y))
}

// ============================================================================
// Trait impls
// ============================================================================

impl ops::Index<usize> for Vector2 {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2 index out of bounds: {}", i),
        }
    }
}

impl ops::IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vector2 index out of bounds: {}", i),
        }
    }
}

impl ops::Add for Vector2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl ops::Add<f64> for Vector2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self::new(self.x + rhs, self.y + rhs)
    }
}

impl ops::Sub for Vector2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl ops::Sub<f64> for Vector2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.x - rhs, self.y - rhs)
    }
}

// Vector2 * Vector2 (component-wise)
impl ops::Mul for Vector2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl ops::Mul<f64> for Vector2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl ops::Mul<Vector2> for f64 {
    type Output = Vector2;

    #[inline]
    fn mul(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self * rhs.x, self * rhs.y)
    }
}

// Vector2 / Vector2 (component-wise)
impl ops::Div for Vector2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl ops::Div<f64> for Vector2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl ops::Neg for Vector2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl ops::AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl ops::SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl ops::MulAssign<f64> for Vector2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl ops::DivAssign<f64> for Vector2 {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl From<Vector2> for Operand<Vector2> {
    #[inline]
    fn from(v: Vector2) -> Self {
        Operand::Vector(v)
    }
}

impl From<[f64; 2]> for Vector2 {
    #[inline]
    fn from(a: [f64; 2]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vector2> for [f64; 2] {
    #[inline]
    fn from(v: Vector2) -> [f64; 2] {
        v.to_array()
    }
}

impl From<(f64, f64)> for Vector2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<glam::DVec2> for Vector2 {
    #[inline]
    fn from(v: glam::DVec2) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vector2> for glam::DVec2 {
    #[inline]
    fn from(v: Vector2) -> glam::DVec2 {
        v.to_glam()
    }
}

impl IntoIterator for Vector2 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Vector2 {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", Component(self.x), Component(self.y))
    }
}

impl FromStr for Vector2 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        text::parse_components(s).map(Self::from_array)
    }
}
