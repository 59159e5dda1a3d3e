//! Right-hand operand of the component-wise arithmetic.
//!
//! `add`, `subtract`, `multiply` and `divide` accept either another vector
//! (applied component by component) or a scalar (broadcast to every
//! component). [`Operand`] is that choice as a sum type; both `f64` and the
//! vector types convert into it, so call sites just pass the value:
//!
//! ```rust
//! use vecx_math::{Vector2, vec2};
//!
//! let a = Vector2::new(1.0, 2.0);
//! assert_eq!(vec2::add(a, 2.0), Vector2::new(3.0, 4.0));
//! assert_eq!(vec2::add(a, Vector2::ONE), Vector2::new(2.0, 3.0));
//! ```

/// A vector or a scalar broadcast to all components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<V> {
    /// Component-wise operand.
    Vector(V),
    /// Same value for every component.
    Scalar(f64),
}

impl<V> From<f64> for Operand<V> {
    #[inline]
    fn from(s: f64) -> Self {
        Self::Scalar(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Vector2, Vector3};

    #[test]
    fn test_operand_from_scalar_and_vector() {
        assert_eq!(Operand::<Vector2>::from(2.5), Operand::Scalar(2.5));
        assert_eq!(
            Operand::from(Vector3::UP),
            Operand::Vector(Vector3::new(0.0, 1.0, 0.0))
        );
    }
}
