//! `"(x, y[, z])"` text form shared by both vector types.

use std::fmt;

use tracing::trace;
use vecx_core::{Error, Result, parse_float};

/// Writes a component, spelling infinities `Infinity` / `-Infinity` so the
/// lossy parser reads them back.
pub(crate) struct Component(pub(crate) f64);

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == f64::INFINITY {
            f.write_str("Infinity")
        } else if self.0 == f64::NEG_INFINITY {
            f.write_str("-Infinity")
        } else {
            fmt::Display::fmt(&self.0, f)
        }
    }
}

/// Strict parse of `N` comma-separated numbers wrapped in parentheses.
///
/// Surrounding whitespace and whitespace around each component is allowed;
/// anything else is an [`Error::Parse`].
pub(crate) fn parse_components<const N: usize>(input: &str) -> Result<[f64; N]> {
    let inner = input
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| Error::parse(input, "expected components wrapped in parentheses"))?;

    let mut out = [0.0; N];
    let mut parts = inner.split(',');
    for (i, slot) in out.iter_mut().enumerate() {
        let part = parts.next().ok_or_else(|| {
            Error::parse(input, format!("expected {} components, found {}", N, i))
        })?;
        let part = part.trim();
        *slot = part.parse().map_err(|_| {
            Error::parse(input, format!("component {} is not a number: {:?}", i, part))
        })?;
    }

    if parts.next().is_some() {
        return Err(Error::parse(
            input,
            format!("expected {} components, found more", N),
        ));
    }

    Ok(out)
}

/// Legacy lenient parse.
///
/// Drops the first and last character, splits the rest on `,` and reads each
/// piece with [`parse_float`]. Unreadable pieces become NaN, missing trailing
/// components stay 0, extra pieces are ignored. Never fails.
pub(crate) fn lossy_components<const N: usize>(input: &str) -> [f64; N] {
    let mut chars = input.chars();
    chars.next();
    chars.next_back();

    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(chars.as_str().split(',')) {
        *slot = parse_float(part);
    }

    if out.iter().any(|c| c.is_nan()) {
        trace!(input, "lossy vector parse produced NaN components");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_components() {
        assert_eq!(parse_components::<2>("(1, 2)").unwrap(), [1.0, 2.0]);
        assert_eq!(parse_components::<3>(" (1,-2.5 , 3e2) ").unwrap(), [1.0, -2.5, 300.0]);
    }

    #[test]
    fn test_parse_components_errors() {
        assert!(parse_components::<2>("1, 2").unwrap_err().is_parse_error());
        assert!(parse_components::<2>("(1)").is_err());
        assert!(parse_components::<2>("(1, 2, 3)").is_err());
        assert!(parse_components::<2>("(1, y)").is_err());
        assert!(parse_components::<3>("").is_err());
    }

    #[test]
    fn test_component_display() {
        assert_eq!(Component(1.5).to_string(), "1.5");
        assert_eq!(Component(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Component(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Component(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_lossy_components() {
        assert_eq!(lossy_components::<2>("(1, 2)"), [1.0, 2.0]);
        assert_eq!(lossy_components::<3>("[4,5,6]"), [4.0, 5.0, 6.0]);

        let [x, y] = lossy_components::<2>("(1)");
        assert_eq!(x, 1.0);
        assert_eq!(y, 0.0);

        let [x, y] = lossy_components::<2>("(a, 2)");
        assert!(x.is_nan());
        assert_eq!(y, 2.0);

        let [x, y] = lossy_components::<2>("");
        assert!(x.is_nan());
        assert_eq!(y, 0.0);
    }
}
