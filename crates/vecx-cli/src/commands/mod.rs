//! CLI command implementations

pub mod angle;
pub mod damp;
pub mod info;
pub mod interp;
pub mod ortho;
pub mod rotate;

use anyhow::{Context, Result, bail};
use tracing::trace;
use vecx_math::{Vector2, Vector3};

/// A vector argument, dimension picked by its component count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyVector {
    /// `(x, y)`
    Two(Vector2),
    /// `(x, y, z)`
    Three(Vector3),
}

/// Parses `"(x, y)"` or `"(x, y, z)"`.
pub fn parse_vector(input: &str) -> Result<AnyVector> {
    let components = input.split(',').count();
    trace!(input, components, "parse_vector");
    match components {
        2 => {
            let v = input
                .parse::<Vector2>()
                .with_context(|| format!("Invalid 2D vector: {input}"))?;
            Ok(AnyVector::Two(v))
        }
        3 => {
            let v = input
                .parse::<Vector3>()
                .with_context(|| format!("Invalid 3D vector: {input}"))?;
            Ok(AnyVector::Three(v))
        }
        n => bail!("Expected 2 or 3 components, got {n}: {input}"),
    }
}

/// Parses a vector that must be 3D.
pub fn parse_vector3(input: &str, op: &str) -> Result<Vector3> {
    match parse_vector(input)? {
        AnyVector::Three(v) => Ok(v),
        AnyVector::Two(_) => bail!("{op} requires 3D vectors, got {input}"),
    }
}

/// Parses two vectors that must share a dimension.
pub fn parse_pair(a: &str, b: &str) -> Result<(AnyVector, AnyVector)> {
    let lhs = parse_vector(a)?;
    let rhs = parse_vector(b)?;
    match (lhs, rhs) {
        (AnyVector::Two(_), AnyVector::Two(_)) | (AnyVector::Three(_), AnyVector::Three(_)) => {
            Ok((lhs, rhs))
        }
        _ => bail!("Dimension mismatch: {a} vs {b}"),
    }
}

impl std::fmt::Display for AnyVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnyVector::Two(v) => v.fmt(f),
            AnyVector::Three(v) => v.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vector_by_component_count() {
        assert_eq!(
            parse_vector("(1, 2)").unwrap(),
            AnyVector::Two(Vector2::new(1.0, 2.0))
        );
        assert_eq!(
            parse_vector("(1, 2, 3)").unwrap(),
            AnyVector::Three(Vector3::new(1.0, 2.0, 3.0))
        );
        assert!(parse_vector("(1, 2, 3, 4)").is_err());
        assert!(parse_vector("(1, x)").is_err());
    }

    #[test]
    fn test_parse_pair_rejects_mixed_dimensions() {
        assert!(parse_pair("(1, 2)", "(1, 2, 3)").is_err());
        assert!(parse_pair("(1, 2)", "(3, 4)").is_ok());
    }

    #[test]
    fn test_parse_vector3_rejects_2d() {
        assert!(parse_vector3("(1, 2)", "slerp").is_err());
        assert_eq!(parse_vector3("(0, 1, 0)", "slerp").unwrap(), Vector3::UP);
    }
}
