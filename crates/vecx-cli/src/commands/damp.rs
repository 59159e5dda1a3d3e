//! Smooth-damp trajectory command.
//!
//! Steps `smooth_damp` from the start position toward the target and prints
//! one line (or JSON record) per step.

use super::{AnyVector, parse_pair};
use crate::DampArgs;
use anyhow::{Result, bail};
use serde::Serialize;
use tracing::{debug, info, trace};
use vecx_math::{Vector2, Vector3, vec2, vec3};

/// One simulated step.
#[derive(Debug, Serialize)]
struct Sample<V> {
    step: usize,
    time: f64,
    position: V,
    velocity: V,
    distance: f64,
}

/// Runs the damp command.
pub fn run(args: DampArgs, verbose: bool) -> Result<()> {
    if args.dt <= 0.0 {
        bail!("--dt must be positive, got {}", args.dt);
    }
    let max_speed = args.max_speed.unwrap_or(f64::INFINITY);
    let (current, target) = parse_pair(&args.current, &args.target)?;
    debug!(
        smooth_time = args.smooth_time,
        dt = args.dt,
        steps = args.steps,
        max_speed,
        "damp"
    );

    match (current, target) {
        (AnyVector::Two(c), AnyVector::Two(t)) => {
            let samples = simulate_2d(c, t, &args, max_speed);
            emit(&samples, args.json, verbose)
        }
        (AnyVector::Three(c), AnyVector::Three(t)) => {
            let samples = simulate_3d(c, t, &args, max_speed);
            emit(&samples, args.json, verbose)
        }
        _ => unreachable!("parse_pair checks dimensions"),
    }
}

fn simulate_2d(
    current: Vector2,
    target: Vector2,
    args: &DampArgs,
    max_speed: f64,
) -> Vec<Sample<Vector2>> {
    let mut position = current;
    let mut velocity = Vector2::ZERO;
    (1..=args.steps)
        .map(|step| {
            position = vec2::smooth_damp_with_max_speed(
                position,
                target,
                &mut velocity,
                args.smooth_time,
                args.dt,
                max_speed,
            );
            trace!(step, %position, %velocity, "step");
            Sample {
                step,
                time: step as f64 * args.dt,
                position,
                velocity,
                distance: vec2::distance(position, target),
            }
        })
        .collect()
}

fn simulate_3d(
    current: Vector3,
    target: Vector3,
    args: &DampArgs,
    max_speed: f64,
) -> Vec<Sample<Vector3>> {
    let mut position = current;
    let mut velocity = Vector3::ZERO;
    (1..=args.steps)
        .map(|step| {
            position = vec3::smooth_damp_with_max_speed(
                position,
                target,
                &mut velocity,
                args.smooth_time,
                args.dt,
                max_speed,
            );
            trace!(step, %position, %velocity, "step");
            Sample {
                step,
                time: step as f64 * args.dt,
                position,
                velocity,
                distance: vec3::distance(position, target),
            }
        })
        .collect()
}

fn emit<V: Serialize + std::fmt::Display>(
    samples: &[Sample<V>],
    json: bool,
    verbose: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(samples)?);
        return Ok(());
    }

    for s in samples {
        if verbose {
            println!(
                "{:>5}  t={:.4}  pos={}  vel={}  dist={:.6}",
                s.step, s.time, s.position, s.velocity, s.distance
            );
        } else {
            println!("{}", s.position);
        }
    }
    if let Some(last) = samples.last() {
        info!(steps = samples.len(), distance = last.distance, "damp finished");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(steps: usize) -> DampArgs {
        DampArgs {
            current: String::new(),
            target: String::new(),
            smooth_time: 0.3,
            dt: 1.0 / 60.0,
            steps,
            max_speed: None,
            json: false,
        }
    }

    #[test]
    fn test_simulate_2d_approaches_target() {
        let target = Vector2::new(10.0, -5.0);
        let samples = simulate_2d(Vector2::ZERO, target, &args(240), f64::INFINITY);
        assert_eq!(samples.len(), 240);
        assert!(samples[0].distance < vec2::distance(Vector2::ZERO, target));
        assert!(samples[239].distance < 1e-3);
    }

    #[test]
    fn test_simulate_3d_respects_speed_limit() {
        let target = Vector3::new(100.0, 0.0, 0.0);
        let samples = simulate_3d(Vector3::ZERO, target, &args(10), 1.0);
        assert!(samples[9].position.x < 1.0);
    }
}
