//! iRail JSON DTOs.
//!
//! These types map directly onto the records inside iRail responses. Every
//! field is optional so that the mapper, not serde, decides what is
//! required and reports it uniformly. Fields the service adds over time
//! (`@id`, `platforminfo`, `canceled`, `alerts`, ...) are ignored.

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::Value;

/// A scalar that may arrive string-typed or number-typed.
///
/// iRail documents most numbers as strings (`"time": "1581858000"`), but
/// nothing guarantees it, so both forms are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireScalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl WireScalar {
    /// The scalar rendered as text, as it would appear in the JSON.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            WireScalar::Text(s) => Cow::Borrowed(s),
            WireScalar::Integer(i) => Cow::Owned(i.to_string()),
            WireScalar::Float(f) => Cow::Owned(f.to_string()),
        }
    }
}

/// A station record, as found in the `station` array and in `stationinfo`.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDto {
    pub name: Option<String>,
    pub standardname: Option<String>,
    pub id: Option<String>,
    #[serde(rename = "locationX")]
    pub location_x: Option<WireScalar>,
    #[serde(rename = "locationY")]
    pub location_y: Option<WireScalar>,
}

/// The `direction` of a departure or arrival. Only a name is sent.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionDto {
    pub name: Option<String>,
}

/// A `departure` or `arrival` inside a connection.
///
/// The sibling `station` string duplicates `stationinfo.name` and is not
/// read.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionEventDto {
    pub stationinfo: Option<StationDto>,
    pub direction: Option<DirectionDto>,
    pub platform: Option<WireScalar>,
    pub time: Option<WireScalar>,
    pub delay: Option<WireScalar>,
    pub vehicle: Option<String>,
}

/// One element of the `connection` array.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionDto {
    pub id: Option<WireScalar>,
    pub departure: Option<ConnectionEventDto>,
    pub arrival: Option<ConnectionEventDto>,
    pub duration: Option<WireScalar>,
    pub vias: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_station() {
        let json = r#"{
            "@id": "http://irail.be/stations/NMBS/008814001",
            "id": "BE.NMBS.008814001",
            "locationX": "4.336531",
            "locationY": "50.835707",
            "standardname": "Brussel-Zuid/Bruxelles-Midi",
            "name": "Brussels-South/Brussels-Midi"
        }"#;

        let s: StationDto = serde_json::from_str(json).unwrap();

        assert_eq!(s.id.as_deref(), Some("BE.NMBS.008814001"));
        assert_eq!(s.name.as_deref(), Some("Brussels-South/Brussels-Midi"));
        assert_eq!(
            s.standardname.as_deref(),
            Some("Brussel-Zuid/Bruxelles-Midi")
        );
        assert_eq!(
            s.location_x,
            Some(WireScalar::Text("4.336531".to_string()))
        );
    }

    #[test]
    fn deserialize_station_with_numeric_coordinates() {
        let json = r#"{"id": "X", "name": "n", "locationX": 4.5, "locationY": 50}"#;
        let s: StationDto = serde_json::from_str(json).unwrap();
        assert_eq!(s.location_x, Some(WireScalar::Float(4.5)));
        assert_eq!(s.location_y, Some(WireScalar::Integer(50)));
    }

    #[test]
    fn deserialize_connection_event_ignores_extras() {
        let json = r#"{
            "delay": "0",
            "station": "Brussels-South/Brussels-Midi",
            "stationinfo": {"id": "BE.NMBS.008814001", "name": "Brussels-South/Brussels-Midi"},
            "time": "1581858000",
            "vehicle": "BE.NMBS.IC1832",
            "platform": "19",
            "platforminfo": {"name": "19", "normal": "1"},
            "canceled": "0",
            "direction": {"name": "Liège-Guillemins"},
            "left": "0"
        }"#;

        let e: ConnectionEventDto = serde_json::from_str(json).unwrap();

        assert_eq!(e.time, Some(WireScalar::Text("1581858000".to_string())));
        assert_eq!(e.platform, Some(WireScalar::Text("19".to_string())));
        assert_eq!(e.vehicle.as_deref(), Some("BE.NMBS.IC1832"));
        assert_eq!(
            e.direction.and_then(|d| d.name).as_deref(),
            Some("Liège-Guillemins")
        );
    }

    #[test]
    fn deserialize_connection_without_vias() {
        let json = r#"{"id": "0", "duration": "3660"}"#;
        let c: ConnectionDto = serde_json::from_str(json).unwrap();
        assert!(c.vias.is_none());
        assert!(c.departure.is_none());
        assert_eq!(c.duration, Some(WireScalar::Text("3660".to_string())));
    }

    #[test]
    fn scalar_as_text() {
        assert_eq!(WireScalar::Text("12".into()).as_text(), "12");
        assert_eq!(WireScalar::Integer(12).as_text(), "12");
        assert_eq!(WireScalar::Float(4.25).as_text(), "4.25");
    }
}
