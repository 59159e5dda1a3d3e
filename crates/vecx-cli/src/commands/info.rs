//! Vector info command.
//!
//! Prints magnitude, normalized form and the array/record/string forms.

use super::{AnyVector, parse_vector};
use crate::InfoArgs;
use anyhow::{Context, Result};
use serde_json::json;
use tracing::debug;

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    let v = parse_vector(&args.vector)?;
    debug!(vector = %v, "info");

    let (magnitude, sqr_magnitude, normalized, array, record) = match v {
        AnyVector::Two(v) => (
            v.magnitude(),
            v.sqr_magnitude(),
            AnyVector::Two(v.normalized()),
            v.to_array().to_vec(),
            serde_json::to_value(v).context("Failed to serialize vector")?,
        ),
        AnyVector::Three(v) => (
            v.magnitude(),
            v.sqr_magnitude(),
            AnyVector::Three(v.normalized()),
            v.to_array().to_vec(),
            serde_json::to_value(v).context("Failed to serialize vector")?,
        ),
    };

    if args.json {
        let out = json!({
            "vector": v.to_string(),
            "magnitude": magnitude,
            "sqr_magnitude": sqr_magnitude,
            "normalized": normalized.to_string(),
            "array": array,
            "record": record,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{v}");
    println!("  Magnitude:     {magnitude}");
    println!("  Normalized:    {normalized}");
    if verbose {
        println!("  Sqr magnitude: {sqr_magnitude}");
        println!("  Array:         {array:?}");
        println!("  Record:        {record}");
    }
    Ok(())
}
