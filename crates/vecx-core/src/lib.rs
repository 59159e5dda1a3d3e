//! # vecx-core
//!
//! Foundation types for the vecx vector kernel.
//!
//! - [`Error`], [`Result`] - failures of the checked APIs (strict parsing,
//!   positional component access)
//! - Scalar helpers ([`clamp`], [`clamp01`], [`sign`], [`round`], [`hypot3`], ...)
//! - Process-wide thresholds: [`EPSILON`], [`EPSILON_NORMAL_SQRT`], [`RAD_TO_DEG`]
//!
//! ## Crate Structure
//!
//! ```text
//! vecx-core (this crate)
//!    ^
//!    |
//!    +-- vecx-math (Vector2, Vector3)
//!           ^
//!           |
//!           +-- vecx-cli (command-line front end)
//! ```
//!
//! # Dependencies
//!
//! - `thiserror` - error derive
//! - `rand` - [`random`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod scalar;

pub use error::*;
pub use scalar::*;
