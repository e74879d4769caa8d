//! API version strings.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid version string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid version {input:?}: {reason}")]
pub struct InvalidVersion {
    input: String,
    reason: &'static str,
}

impl InvalidVersion {
    pub(crate) fn new(input: impl Into<String>, reason: &'static str) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }
}

/// A dotted API version such as `1.1` or `1.12.3`.
///
/// Components compare numerically, left to right, so `1.12.3 > 1.2.3`.
/// A version always has at least one component.
///
/// # Examples
///
/// ```
/// use irail::domain::Version;
///
/// let v = Version::parse("1.12.3").unwrap();
/// assert_eq!(v.components(), &[1, 12, 3]);
/// assert!(v > Version::parse("1.2.3").unwrap());
///
/// assert!(Version::parse("").is_err());
/// assert!(Version::parse("1..2").is_err());
/// assert!(Version::parse("1.x").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version(Vec<u32>);

impl Version {
    /// Parse a version from its dotted form.
    ///
    /// Every component must be a non-empty run of ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidVersion> {
        let invalid = |reason| InvalidVersion::new(s, reason);

        if s.is_empty() {
            return Err(invalid("empty version"));
        }

        let mut components = Vec::new();
        for part in s.split('.') {
            if part.is_empty() {
                return Err(invalid("empty component"));
            }
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid("components must be digits"));
            }
            let n = part
                .parse::<u32>()
                .map_err(|_| invalid("component out of range"))?;
            components.push(n);
        }

        Ok(Self(components))
    }

    /// The numeric components, most significant first. Never empty.
    pub fn components(&self) -> &[u32] {
        &self.0
    }

    /// The leading component.
    pub fn major(&self) -> u32 {
        self.0[0]
    }
}

impl FromStr for Version {
    type Err = InvalidVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{c}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple() {
        assert_eq!(Version::parse("1.1").unwrap().components(), &[1, 1]);
        assert_eq!(Version::parse("3").unwrap().components(), &[3]);
    }

    #[test]
    fn numeric_not_lexicographic() {
        let a = Version::parse("1.12.3").unwrap();
        let b = Version::parse("1.2.3").unwrap();
        assert!(a > b);
        assert_eq!(a.components(), &[1, 12, 3]);
    }

    #[test]
    fn reject_malformed() {
        assert!(Version::parse("").is_err());
        assert!(Version::parse(".").is_err());
        assert!(Version::parse("1.").is_err());
        assert!(Version::parse(".1").is_err());
        assert!(Version::parse("1.a").is_err());
        assert!(Version::parse("1.-2").is_err());
        assert!(Version::parse(" 1.2").is_err());
        assert!(Version::parse("99999999999").is_err());
    }

    #[test]
    fn error_mentions_input() {
        let err = Version::parse("v1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid version \"v1\": components must be digits"
        );
    }

    #[test]
    fn display_roundtrip() {
        assert_eq!(Version::parse("1.12.3").unwrap().to_string(), "1.12.3");
    }

    #[test]
    fn major() {
        assert_eq!(Version::parse("2.0").unwrap().major(), 2);
    }
}
