//! # vecx-math
//!
//! 2D and 3D vector kernels for real-time code (games, physics, animation
//! tooling) with fixed, reproducible numeric policies.
//!
//! - [`Vector2`] / [`vec2`] - planar vectors and their operations
//! - [`Vector3`] / [`vec3`] - spatial vectors, plus cross product, slerp,
//!   projection, orthonormalization and `rotate_towards`
//! - [`Operand`] - vector-or-scalar right-hand side of the arithmetic
//!
//! # Design
//!
//! Every operation exists in two shapes:
//!
//! ```text
//! vec3::add(a, b)      pure, returns a new vector
//! a.add(b)             mutates `a`, returns &mut a for chaining
//! ```
//!
//! Named constants (`Vector3::UP`, ...) are `const` values of a `Copy`
//! type, so every use is an independent copy.
//!
//! Numeric edge cases never fail: a (nearly) zero vector normalizes to zero,
//! the angle involving a zero vector is 0, projection onto a zero normal is
//! zero. NaN and infinity inputs propagate.
//!
//! # Usage
//!
//! ```rust
//! use vecx_math::{Vector3, vec3};
//!
//! let mut velocity = Vector3::ZERO;
//! let camera = Vector3::new(0.0, 2.0, -10.0);
//! let player = Vector3::new(4.0, 1.0, 0.0);
//!
//! let next = vec3::smooth_damp(camera, player, &mut velocity, 0.3, 1.0 / 60.0);
//! assert!(vec3::distance(next, player) < vec3::distance(camera, player));
//! ```
//!
//! # Dependencies
//!
//! - `vecx-core` - epsilon constants, scalar helpers, error type
//! - [`glam`] - `DVec2` / `DVec3` interop
//! - `serde` (feature `serde`, default) - `{x, y[, z]}` record form
//! - `tracing` - trace events on degenerate fallbacks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod operand;
mod text;
pub mod vec2;
pub mod vec3;

pub use operand::Operand;
pub use vec2::Vector2;
pub use vec3::Vector3;
pub use vecx_core::{EPSILON, EPSILON_NORMAL_SQRT, Error, RAD_TO_DEG, Result};

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DVec2, DVec3};
}
