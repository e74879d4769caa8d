//! Typed parsing of string-typed wire scalars.
//!
//! Every numeric field goes through one of these helpers so that all call
//! sites fail the same way.

use crate::domain::{EpochTime, InvalidVersion, Seconds, Version};

use super::convert::MappingError;
use super::types::WireScalar;

/// Unwrap a field the record cannot do without.
pub fn require<T>(
    record: &'static str,
    field: &'static str,
    value: Option<T>,
) -> Result<T, MappingError> {
    value.ok_or(MappingError::MissingField { record, field })
}

/// Parse an integer, accepting `"42"`, `42` and `42.0`.
pub fn parse_int(field: &'static str, value: &WireScalar) -> Result<i64, MappingError> {
    let invalid = || MappingError::InvalidInteger {
        field,
        value: value.as_text().into_owned(),
    };

    match value {
        WireScalar::Text(s) => s.trim().parse().map_err(|_| invalid()),
        WireScalar::Integer(i) => Ok(*i),
        WireScalar::Float(f) => {
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                Ok(*f as i64)
            } else {
                Err(invalid())
            }
        }
    }
}

/// Parse UNIX epoch seconds into an [`EpochTime`].
pub fn parse_epoch_seconds(
    field: &'static str,
    value: &WireScalar,
) -> Result<EpochTime, MappingError> {
    let secs = parse_int(field, value)?;
    EpochTime::from_secs(secs).ok_or(MappingError::OutOfRange { field, value: secs })
}

/// Parse a number of seconds into [`Seconds`].
pub fn parse_duration_seconds(
    field: &'static str,
    value: &WireScalar,
) -> Result<Seconds, MappingError> {
    let secs = parse_int(field, value)?;
    Seconds::from_secs(secs).ok_or(MappingError::OutOfRange { field, value: secs })
}

/// Parse a dotted version string.
///
/// Only string-typed versions are accepted: a JSON number such as `1.10`
/// has already lost its trailing zero.
pub fn parse_version(value: &WireScalar) -> Result<Version, MappingError> {
    match value {
        WireScalar::Text(s) => Ok(Version::parse(s)?),
        other => Err(InvalidVersion::new(other.as_text(), "version must be a string").into()),
    }
}

/// Parse a coordinate, returning the raw text alongside the number.
///
/// An absent or blank value counts as `"0"`.
pub fn parse_coordinate(
    field: &'static str,
    value: Option<&WireScalar>,
) -> Result<(String, f64), MappingError> {
    let raw = match value {
        Some(v) => v.as_text().trim().to_string(),
        None => String::new(),
    };
    if raw.is_empty() {
        return Ok(("0".to_string(), 0.0));
    }

    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok((raw, n)),
        _ => Err(MappingError::InvalidNumber { field, value: raw }),
    }
}

/// Text form of an optional scalar, with blanks treated as absent.
pub fn optional_text(value: Option<&WireScalar>) -> Option<String> {
    let text = value?.as_text();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
