//! Station types.

use std::fmt;

/// A geographic position as reported by iRail.
///
/// iRail's `locationX` is the longitude and `locationY` the latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
}

/// A real station record.
///
/// The raw coordinate strings are kept as sent (with `"0"` standing in for a
/// missing or empty value) next to the parsed [`Location`].
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    name: String,
    standard_name: String,
    id: String,
    location_x: String,
    location_y: String,
    location: Location,
}

impl Station {
    /// Create a station from already-validated parts.
    ///
    /// The mapper in `format` is the usual way to obtain one; this exists so
    /// callers can build stations for queries and tests.
    pub fn new(
        name: impl Into<String>,
        standard_name: impl Into<String>,
        id: impl Into<String>,
        location_x: impl Into<String>,
        location_y: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            name: name.into(),
            standard_name: standard_name.into(),
            id: id.into(),
            location_x: location_x.into(),
            location_y: location_y.into(),
            location,
        }
    }

    /// Display name in the requested language.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name in the station's own language.
    pub fn standard_name(&self) -> &str {
        &self.standard_name
    }

    /// Service-assigned identifier, e.g. `BE.NMBS.008814001`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Raw `locationX` string.
    pub fn location_x(&self) -> &str {
        &self.location_x
    }

    /// Raw `locationY` string.
    pub fn location_y(&self) -> &str {
        &self.location_y
    }

    /// Parsed (longitude, latitude).
    pub fn location(&self) -> Location {
        self.location
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Station {} | {} @ ({}, {})",
            self.id, self.name, self.location_y, self.location_x
        )
    }
}

/// Something shaped like a station: either a real [`Station`] or the
/// destination label of a line.
///
/// A connection event's `direction` is a `Direction`. It only carries a name,
/// so [`StationRef::id`] and [`StationRef::location`] return `None` for it.
#[derive(Debug, Clone, PartialEq)]
pub enum StationRef {
    Real(Station),
    Direction { name: String },
}

impl StationRef {
    /// Build a direction label.
    pub fn direction(name: impl Into<String>) -> Self {
        Self::Direction { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Real(s) => s.name(),
            Self::Direction { name } => name,
        }
    }

    pub fn standard_name(&self) -> Option<&str> {
        self.as_station().map(Station::standard_name)
    }

    pub fn id(&self) -> Option<&str> {
        self.as_station().map(Station::id)
    }

    pub fn location(&self) -> Option<Location> {
        self.as_station().map(Station::location)
    }

    /// The underlying station, if this is a real one.
    pub fn as_station(&self) -> Option<&Station> {
        match self {
            Self::Real(s) => Some(s),
            Self::Direction { .. } => None,
        }
    }

    pub fn is_direction(&self) -> bool {
        matches!(self, Self::Direction { .. })
    }
}

impl From<Station> for StationRef {
    fn from(station: Station) -> Self {
        Self::Real(station)
    }
}

impl fmt::Display for StationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(s) => s.fmt(f),
            Self::Direction { name } => write!(f, "Direction {name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brussels_south() -> Station {
        Station::new(
            "Brussels-South/Brussels-Midi",
            "Brussel-Zuid/Bruxelles-Midi",
            "BE.NMBS.008814001",
            "4.336531",
            "50.835707",
            Location {
                longitude: 4.336531,
                latitude: 50.835707,
            },
        )
    }

    #[test]
    fn display_puts_latitude_first() {
        assert_eq!(
            brussels_south().to_string(),
            "Station BE.NMBS.008814001 | Brussels-South/Brussels-Midi @ (50.835707, 4.336531)"
        );
    }

    #[test]
    fn direction_has_only_a_name() {
        let dir = StationRef::direction("Liège-Guillemins");
        assert_eq!(dir.name(), "Liège-Guillemins");
        assert!(dir.is_direction());
        assert!(dir.id().is_none());
        assert!(dir.standard_name().is_none());
        assert!(dir.location().is_none());
        assert!(dir.as_station().is_none());
    }

    #[test]
    fn real_ref_exposes_station_fields() {
        let r = StationRef::from(brussels_south());
        assert!(!r.is_direction());
        assert_eq!(r.id(), Some("BE.NMBS.008814001"));
        assert_eq!(r.standard_name(), Some("Brussel-Zuid/Bruxelles-Midi"));
        assert_eq!(r.location().unwrap().latitude, 50.835707);
    }

    #[test]
    fn direction_display() {
        assert_eq!(
            StationRef::direction("Oostende").to_string(),
            "Direction Oostende"
        );
    }
}
