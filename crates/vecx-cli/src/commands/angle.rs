//! Angle command.

use super::{AnyVector, parse_pair, parse_vector3};
use crate::AngleArgs;
use anyhow::{Result, bail};
use tracing::debug;
use vecx_math::{vec2, vec3};

/// Prints the angle between two vectors in degrees.
///
/// 2D: unsigned, or signed with `--signed`. 3D: unsigned, or signed about
/// `--axis`.
pub fn run(args: AngleArgs, verbose: bool) -> Result<()> {
    let (from, to) = parse_pair(&args.from, &args.to)?;

    let degrees = match (from, to) {
        (AnyVector::Two(a), AnyVector::Two(b)) => {
            if args.axis.is_some() {
                bail!("--axis only applies to 3D vectors");
            }
            if args.signed {
                vec2::signed_angle(a, b)
            } else {
                vec2::angle(a, b)
            }
        }
        (AnyVector::Three(a), AnyVector::Three(b)) => match &args.axis {
            Some(axis) => vec3::signed_angle(a, b, parse_vector3(axis, "--axis")?),
            None => vec3::angle(a, b),
        },
        _ => unreachable!("parse_pair checks dimensions"),
    };

    debug!(from = %from, to = %to, degrees, "angle");
    if verbose {
        println!("{from} -> {to}: {degrees} deg");
    } else {
        println!("{degrees}");
    }
    Ok(())
}
