//! Scalar helpers shared by the vector kernels.
//!
//! Thin wrappers over the standard `f64` functions with the exact semantics
//! the kernels depend on:
//!
//! - [`clamp`] / [`clamp01`] written as `max(min, min(max, value))`, so NaN
//!   inputs propagate and `min > max` never panics (unlike [`f64::clamp`])
//! - [`min`] / [`max`] that propagate NaN instead of ignoring it
//! - [`sign`] that keeps `±0` and NaN (unlike [`f64::signum`])
//! - [`round`] that rounds halves toward positive infinity
//! - [`hypot`] / [`hypot3`] overflow-safe Euclidean norms
//!
//! # Usage
//!
//! ```rust
//! use vecx_core::{clamp, clamp01, sign};
//!
//! assert_eq!(clamp(5.0, 0.0, 2.0), 2.0);
//! assert_eq!(clamp01(-5.0), 0.0);
//! assert_eq!(sign(0.0), 0.0);
//! ```

/// Magnitude threshold below which a vector normalizes to zero.
pub const EPSILON: f64 = 1e-5;

/// Threshold on `sqrt(|a|² · |b|²)` below which an angle is reported as 0.
pub const EPSILON_NORMAL_SQRT: f64 = 1e-15;

/// Radians to degrees factor used by the angle functions.
///
/// This is the single-precision approximation of `180 / π`, not
/// [`std::f64::consts::PI`]-derived. Angle outputs depend on it exactly.
pub const RAD_TO_DEG: f64 = 57.29578;

/// Machine epsilon used by the projection functions.
pub const MACHINE_EPSILON: f64 = f64::EPSILON;

/// Smaller of two values; NaN if either is NaN.
#[inline]
pub fn min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Larger of two values; NaN if either is NaN.
#[inline]
pub fn max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Clamps a value to the range [min, max].
///
/// Computed as `max(min, min(max, value))`: when `min > max` the result is
/// `min`.
///
/// # Example
///
/// ```rust
/// use vecx_core::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// ```
#[inline]
pub fn clamp(value: f64, min_value: f64, max_value: f64) -> f64 {
    max(min_value, min(max_value, value))
}

/// Clamps a value to [0, 1].
///
/// Shorthand for `clamp(value, 0.0, 1.0)`.
#[inline]
pub fn clamp01(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Sign of a value: `1`, `-1`, or the input itself for `±0` and NaN.
#[inline]
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        value
    }
}

/// Rounds to the nearest integer, halves toward positive infinity.
///
/// `round(2.5) == 3`, `round(-2.5) == -2`, `round(-0.4) == -0`. Differs
/// from [`f64::round`], which rounds halves away from zero.
#[inline]
pub fn round(value: f64) -> f64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    // Values in [-0.5, 0) round to -0.
    if rounded == 0.0 {
        rounded.copysign(value)
    } else {
        rounded
    }
}

/// Length of `(x, y)` without intermediate overflow.
#[inline]
pub fn hypot(x: f64, y: f64) -> f64 {
    x.hypot(y)
}

/// Length of `(x, y, z)` without intermediate overflow.
///
/// Any infinite component yields `+∞` even when another one is NaN.
pub fn hypot3(x: f64, y: f64, z: f64) -> f64 {
    if x.is_infinite() || y.is_infinite() || z.is_infinite() {
        return f64::INFINITY;
    }
    if x.is_nan() || y.is_nan() || z.is_nan() {
        return f64::NAN;
    }

    let scale = x.abs().max(y.abs()).max(z.abs());
    if scale == 0.0 {
        return 0.0;
    }

    let (sx, sy, sz) = (x / scale, y / scale, z / scale);
    (sx * sx + sy * sy + sz * sz).sqrt() * scale
}

/// Linear interpolation between two values without clamping.
///
/// # Formula
///
/// `a + (b - a) * t`
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Uniformly distributed value in `[0, 1)`.
#[inline]
pub fn random() -> f64 {
    rand::random::<f64>()
}

/// Parses the longest numeric prefix of `s`, ignoring leading whitespace.
///
/// Accepts an optional sign followed by `Infinity` or a decimal literal with
/// optional fraction and exponent. Trailing garbage is ignored; input with no
/// numeric prefix yields NaN.
///
/// # Example
///
/// ```rust
/// use vecx_core::parse_float;
///
/// assert_eq!(parse_float(" 1.5e2px"), 150.0);
/// assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
/// assert!(parse_float("abc").is_nan());
/// ```
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits = |from: usize| {
        bytes
            .get(from..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let negative = bytes.first() == Some(&b'-');
    let start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[start..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = digits(start);
    let mut end = start + int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-5.0), 0.0);
        assert_eq!(clamp01(5.0), 1.0);
        assert_eq!(clamp01(0.3), 0.3);
    }

    #[test]
    fn test_clamp_inverted_range() {
        // max(min, min(max, v)) picks min when the range is inverted
        assert_eq!(clamp(0.5, 2.0, 1.0), 2.0);
    }

    #[test]
    fn test_clamp_nan_propagates() {
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
        assert!(clamp01(f64::NAN).is_nan());
    }

    #[test]
    fn test_min_max_nan() {
        assert!(min(1.0, f64::NAN).is_nan());
        assert!(max(f64::NAN, 1.0).is_nan());
        assert_eq!(min(1.0, 2.0), 1.0);
        assert_eq!(max(1.0, 2.0), 2.0);
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(3.0), 1.0);
        assert_eq!(sign(-0.1), -1.0);
        assert_eq!(sign(0.0), 0.0);
        assert!(sign(-0.0).is_sign_negative());
        assert!(sign(f64::NAN).is_nan());
    }

    #[test]
    fn test_round_halves_up() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -2.0);
        assert_eq!(round(-2.6), -3.0);
        assert_eq!(round(1.4), 1.0);
        assert_eq!(round(f64::INFINITY), f64::INFINITY);
        assert!(round(-0.4).is_sign_negative());
        assert!(round(-0.5).is_sign_negative());
        assert!(round(0.4).is_sign_positive());
        assert!(round(-0.0).is_sign_negative());
    }

    #[test]
    fn test_hypot3() {
        assert_eq!(hypot3(3.0, 4.0, 0.0), 5.0);
        assert_eq!(hypot3(0.0, 0.0, 0.0), 0.0);
        assert_abs_diff_eq!(hypot3(1e200, 1e200, 0.0), 2f64.sqrt() * 1e200, epsilon = 1e186);
        assert_eq!(hypot3(f64::NAN, f64::NEG_INFINITY, 1.0), f64::INFINITY);
        assert!(hypot3(f64::NAN, 1.0, 1.0).is_nan());
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
    }

    #[test]
    fn test_random_range() {
        for _ in 0..100 {
            let r = random();
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn test_parse_float_prefixes() {
        assert_eq!(parse_float("42"), 42.0);
        assert_eq!(parse_float("  -3.25"), -3.25);
        assert_eq!(parse_float("+.5"), 0.5);
        assert_eq!(parse_float("1."), 1.0);
        assert_eq!(parse_float("2e3"), 2000.0);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("7 apples"), 7.0);
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
    }

    #[test]
    fn test_parse_float_garbage() {
        assert!(parse_float("").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("x1").is_nan());
    }
}
