//! Orthonormalization command.

use super::parse_vector3;
use crate::OrthoArgs;
use anyhow::Result;
use tracing::debug;
use vecx_math::vec3;

/// Orthonormalizes normal/tangent (and optionally binormal) in place and
/// prints the resulting basis.
pub fn run(args: OrthoArgs, verbose: bool) -> Result<()> {
    let mut normal = parse_vector3(&args.normal, "ortho")?;
    let mut tangent = parse_vector3(&args.tangent, "ortho")?;

    match &args.binormal {
        Some(b) => {
            let mut binormal = parse_vector3(b, "ortho")?;
            vec3::ortho_normalize_with_binormal(&mut normal, &mut tangent, &mut binormal);
            debug!(%normal, %tangent, %binormal, "ortho_normalize");
            println!("normal:   {normal}");
            println!("tangent:  {tangent}");
            println!("binormal: {binormal}");
        }
        None => {
            vec3::ortho_normalize(&mut normal, &mut tangent);
            debug!(%normal, %tangent, "ortho_normalize");
            println!("normal:   {normal}");
            println!("tangent:  {tangent}");
        }
    }

    if verbose {
        println!("normal . tangent = {}", vec3::dot(normal, tangent));
    }
    Ok(())
}
