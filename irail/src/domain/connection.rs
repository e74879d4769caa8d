//! Connections and their departure/arrival events.

use std::fmt;
use std::ops::Deref;

use serde_json::Value;

use super::station::{Station, StationRef};
use super::time::{EpochTime, Seconds};

/// A timed, located occurrence within a connection.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionEvent {
    /// The station where the event happens.
    pub station: Station,
    /// Platform label, if the service reported one.
    pub platform: Option<String>,
    /// Scheduled time.
    pub time: EpochTime,
    /// Delay relative to `time`.
    pub delay: Seconds,
    /// Vehicle identifier, e.g. `BE.NMBS.IC1832`.
    pub vehicle: String,
    /// The line's destination label. Not a real station.
    pub direction: StationRef,
}

impl ConnectionEvent {
    /// Whether the service reports a non-zero delay.
    pub fn is_delayed(&self) -> bool {
        self.delay.secs() != 0
    }
}

impl fmt::Display for ConnectionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{} (+{}) -> {}", self.time, self.delay, self.station)
    }
}

/// Leaving the origin station.
#[derive(Debug, Clone, PartialEq)]
pub struct Departure(pub ConnectionEvent);

/// Reaching the destination station.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrival(pub ConnectionEvent);

impl Deref for Departure {
    type Target = ConnectionEvent;

    fn deref(&self) -> &ConnectionEvent {
        &self.0
    }
}

impl Deref for Arrival {
    type Target = ConnectionEvent;

    fn deref(&self) -> &ConnectionEvent {
        &self.0
    }
}

impl fmt::Display for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for Arrival {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One scheduled trip offer between two stations.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub id: i64,
    pub departure: Departure,
    pub arrival: Arrival,
    pub duration: Seconds,
    /// Intermediate changes, exactly as decoded. iRail nests these as
    /// `{"number": "1", "via": [...]}`; they are not mapped further.
    pub vias: Option<Value>,
}

impl Connection {
    /// Number of changes reported in `vias.number`, if present and numeric.
    pub fn via_count(&self) -> Option<u32> {
        let number = self.vias.as_ref()?.get("number")?;
        match number {
            Value::String(s) => s.trim().parse().ok(),
            Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            _ => None,
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Connection ({}):", self.id)?;
        writeln!(f, "  departure: {}", self.departure)?;
        writeln!(f, "  arrival: {}", self.arrival)?;
        match &self.vias {
            Some(v) => writeln!(f, "  vias: {v}")?,
            None => writeln!(f, "  vias: none")?,
        }
        write!(f, "  duration: {}", self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Location;
    use serde_json::json;

    fn event(time: i64, delay: i64) -> ConnectionEvent {
        ConnectionEvent {
            station: Station::new(
                "Ghent-Sint-Pieters",
                "Gent-Sint-Pieters",
                "BE.NMBS.008892007",
                "3.710675",
                "51.035896",
                Location {
                    longitude: 3.710675,
                    latitude: 51.035896,
                },
            ),
            platform: Some("4".to_string()),
            time: EpochTime::from_secs(time).unwrap(),
            delay: Seconds::from_secs(delay).unwrap(),
            vehicle: "BE.NMBS.IC1832".to_string(),
            direction: StationRef::direction("Oostende"),
        }
    }

    fn connection(vias: Option<Value>) -> Connection {
        Connection {
            id: 0,
            departure: Departure(event(1_700_000_000, 0)),
            arrival: Arrival(event(1_700_003_600, 120)),
            duration: Seconds::from_secs(3600).unwrap(),
            vias,
        }
    }

    #[test]
    fn event_display() {
        let e = event(0, 60);
        assert_eq!(
            e.to_string(),
            "@1970-01-01 00:00:00 UTC (+60s) -> Station BE.NMBS.008892007 | Ghent-Sint-Pieters @ (51.035896, 3.710675)"
        );
    }

    #[test]
    fn deref_to_event() {
        let c = connection(None);
        assert_eq!(c.departure.vehicle, "BE.NMBS.IC1832");
        assert!(!c.departure.is_delayed());
        assert!(c.arrival.is_delayed());
    }

    #[test]
    fn via_count_from_string() {
        let c = connection(Some(json!({"number": "2", "via": []})));
        assert_eq!(c.via_count(), Some(2));
    }

    #[test]
    fn via_count_absent() {
        assert_eq!(connection(None).via_count(), None);
        assert_eq!(connection(Some(json!({"via": []}))).via_count(), None);
    }

    #[test]
    fn display_lists_parts() {
        let s = connection(None).to_string();
        assert!(s.starts_with("Connection (0):"));
        assert!(s.contains("vias: none"));
        assert!(s.ends_with("duration: 3600s"));
    }
}
