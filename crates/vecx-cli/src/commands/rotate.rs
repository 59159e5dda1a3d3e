//! Rotate-towards command.

use super::parse_vector3;
use crate::RotateArgs;
use anyhow::{Result, bail};
use tracing::debug;
use vecx_math::vec3;

/// Runs a single `rotate_towards` step.
pub fn run(args: RotateArgs, verbose: bool) -> Result<()> {
    if args.max_radians < 0.0 {
        bail!("--max-radians must be non-negative, got {}", args.max_radians);
    }
    let current = parse_vector3(&args.current, "rotate")?;
    let target = parse_vector3(&args.target, "rotate")?;

    let result = vec3::rotate_towards(current, target, args.max_radians, args.max_magnitude);
    debug!(%current, %target, %result, "rotate_towards");

    if verbose {
        println!("{result}");
        println!("  Magnitude: {}", result.magnitude());
        println!("  Remaining: {} deg", vec3::angle(result, target));
    } else {
        println!("{result}");
    }
    Ok(())
}
