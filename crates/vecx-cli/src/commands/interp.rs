//! Linear and spherical interpolation commands.

use super::{AnyVector, parse_pair, parse_vector3};
use crate::LerpArgs;
use anyhow::Result;
use tracing::debug;
use vecx_math::{vec2, vec3};

/// Runs `lerp` (2D or 3D).
pub fn run_lerp(args: LerpArgs, verbose: bool) -> Result<()> {
    let (a, b) = parse_pair(&args.a, &args.b)?;
    let result = match (a, b) {
        (AnyVector::Two(a), AnyVector::Two(b)) => AnyVector::Two(if args.unclamped {
            vec2::lerp_unclamped(a, b, args.t)
        } else {
            vec2::lerp(a, b, args.t)
        }),
        (AnyVector::Three(a), AnyVector::Three(b)) => AnyVector::Three(if args.unclamped {
            vec3::lerp_unclamped(a, b, args.t)
        } else {
            vec3::lerp(a, b, args.t)
        }),
        _ => unreachable!("parse_pair checks dimensions"),
    };

    debug!(t = args.t, unclamped = args.unclamped, result = %result, "lerp");
    print_result(&a, &b, args.t, &result, verbose);
    Ok(())
}

/// Runs `slerp` (3D only).
pub fn run_slerp(args: LerpArgs, verbose: bool) -> Result<()> {
    let a = parse_vector3(&args.a, "slerp")?;
    let b = parse_vector3(&args.b, "slerp")?;
    let result = if args.unclamped {
        vec3::slerp_unclamped(a, b, args.t)
    } else {
        vec3::slerp(a, b, args.t)
    };

    debug!(t = args.t, unclamped = args.unclamped, result = %result, "slerp");
    print_result(
        &AnyVector::Three(a),
        &AnyVector::Three(b),
        args.t,
        &AnyVector::Three(result),
        verbose,
    );
    Ok(())
}

fn print_result(a: &AnyVector, b: &AnyVector, t: f64, result: &AnyVector, verbose: bool) {
    if verbose {
        println!("{a} .. {b} @ {t}: {result}");
    } else {
        println!("{result}");
    }
}
