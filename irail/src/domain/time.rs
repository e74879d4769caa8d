//! Time values decoded from the iRail API.
//!
//! iRail sends instants as UNIX epoch seconds and durations as a number of
//! seconds, both usually string-typed. The types here keep the raw integer
//! next to the derived chrono value so callers can use either.

use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// An instant transmitted as UNIX epoch seconds.
///
/// # Examples
///
/// ```
/// use irail::domain::EpochTime;
///
/// let t = EpochTime::from_secs(1_700_000_000).unwrap();
/// assert_eq!(t.secs(), 1_700_000_000);
/// assert_eq!(t.to_string(), "2023-11-14 22:13:20 UTC");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EpochTime {
    secs: i64,
    instant: DateTime<Utc>,
}

impl EpochTime {
    /// Build from epoch seconds.
    ///
    /// Returns `None` if the value is outside chrono's representable range.
    pub fn from_secs(secs: i64) -> Option<Self> {
        let instant = DateTime::from_timestamp(secs, 0)?;
        Some(Self { secs, instant })
    }

    /// The raw epoch seconds as sent by the service.
    pub fn secs(&self) -> i64 {
        self.secs
    }

    /// The derived UTC instant.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl fmt::Display for EpochTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.instant.format("%Y-%m-%d %H:%M:%S UTC"))
    }
}

/// A span transmitted as a whole number of seconds (delays, trip durations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seconds {
    secs: i64,
    duration: Duration,
}

impl Seconds {
    /// Build from a number of seconds.
    ///
    /// Returns `None` if the value overflows `chrono::Duration`.
    pub fn from_secs(secs: i64) -> Option<Self> {
        let duration = Duration::try_seconds(secs)?;
        Some(Self { secs, duration })
    }

    /// The raw seconds as sent by the service.
    pub fn secs(&self) -> i64 {
        self.secs
    }

    /// The derived duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whole minutes, truncated toward zero.
    pub fn minutes(&self) -> i64 {
        self.duration.num_minutes()
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.secs)
    }
}
