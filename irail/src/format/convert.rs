//! Mapping from decoded iRail documents to domain types.
//!
//! Each `map_*` function takes the decoded top-level document for one
//! response kind and builds the typed result, coercing string-typed
//! numbers along the way. No partial result is ever returned.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use crate::domain::{
    Arrival, Connection, ConnectionEvent, ConnectionList, Departure, DynamicValue,
    InvalidVersion, Location, ResultEnvelope, Station, StationList, StationRef,
    UnsupportedShape, json_kind,
};

use super::FormatError;
use super::coerce::{
    optional_text, parse_coordinate, parse_duration_seconds, parse_epoch_seconds, parse_int,
    parse_version, require,
};
use super::decode::{Document, take_array, take_required};
use super::types::{ConnectionDto, ConnectionEventDto, DirectionDto, StationDto, WireScalar};

/// Error building a domain value from a decoded record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MappingError {
    /// A required field is absent or null
    #[error("{record}: missing required field {field}")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    /// A numeric field is not an integer
    #[error("{field}: expected an integer, got {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    /// A coordinate is not a finite decimal number
    #[error("{field}: expected a decimal number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// An integer parsed but cannot be represented as a time value
    #[error("{field}: {value} is out of range")]
    OutOfRange { field: &'static str, value: i64 },

    /// The envelope version is malformed
    #[error(transparent)]
    InvalidVersion(#[from] InvalidVersion),

    /// A real station came without an identifier
    #[error("station {name:?} has an empty id")]
    EmptyStationId { name: String },

    /// A record has the wrong structure (e.g. a string where an object belongs)
    #[error("{record} #{index}: {message}")]
    InvalidRecord {
        record: &'static str,
        index: usize,
        message: String,
    },
}

/// Build a station list from a `stations` response.
pub fn map_stations(mut doc: Document) -> Result<StationList, FormatError> {
    let items = take_array(&mut doc, "station")?;
    let envelope = map_envelope(&mut doc)?;

    let stations = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let dto: StationDto = from_record("station", index, item)?;
            convert_station(dto)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = stations.len(), version = %envelope.version, "mapped stations");
    Ok(StationList::new(envelope, stations))
}

/// Build a connection list from a `connections` response.
pub fn map_connections(mut doc: Document) -> Result<ConnectionList, FormatError> {
    let items = take_array(&mut doc, "connection")?;
    let envelope = map_envelope(&mut doc)?;

    let connections = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let dto: ConnectionDto = from_record("connection", index, item)?;
            convert_connection(dto)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = connections.len(), version = %envelope.version, "mapped connections");
    Ok(ConnectionList::new(envelope, connections))
}

/// Extract `departures.departure` from a `liveboard` response.
///
/// Either key being absent yields an empty record.
pub fn map_liveboard(mut doc: Document) -> Result<DynamicValue, FormatError> {
    let departure = match doc.remove("departures") {
        None => None,
        Some(Value::Object(mut departures)) => departures.remove("departure"),
        Some(other) => return Err(UnsupportedShape::new(json_kind(&other)).into()),
    };

    let board = weak_or_empty(departure)?;
    trace!(
        entries = board.as_list().map_or(0, <[DynamicValue]>::len),
        "mapped liveboard"
    );
    Ok(board)
}

/// Extract `vehicleinfo` from a `vehicle` response.
pub fn map_vehicle(mut doc: Document) -> Result<DynamicValue, FormatError> {
    let vehicle = weak_or_empty(doc.remove("vehicleinfo"))?;
    trace!("mapped vehicle");
    Ok(vehicle)
}

fn weak_or_empty(value: Option<Value>) -> Result<DynamicValue, UnsupportedShape> {
    match value {
        Some(v) => DynamicValue::from_json(v),
        None => Ok(DynamicValue::empty_record()),
    }
}

/// Read `timestamp` and `version` from the top level.
fn map_envelope(doc: &mut Document) -> Result<ResultEnvelope, FormatError> {
    let timestamp = take_required(doc, "timestamp")?;
    let version = take_required(doc, "version")?;

    let timestamp: WireScalar = from_record("envelope", 0, timestamp)?;
    let version: WireScalar = from_record("envelope", 0, version)?;

    Ok(ResultEnvelope {
        timestamp: parse_epoch_seconds("timestamp", &timestamp)?,
        version: parse_version(&version)?,
    })
}

fn from_record<T: DeserializeOwned>(
    record: &'static str,
    index: usize,
    value: Value,
) -> Result<T, MappingError> {
    serde_json::from_value(value).map_err(|e| MappingError::InvalidRecord {
        record,
        index,
        message: e.to_string(),
    })
}

/// Convert a station record into a real [`Station`].
pub fn convert_station(dto: StationDto) -> Result<Station, MappingError> {
    let name = require("station", "name", dto.name)?;
    let standard_name = require("station", "standardname", dto.standardname)?;
    let id = require("station", "id", dto.id)?;
    if id.trim().is_empty() {
        return Err(MappingError::EmptyStationId { name });
    }

    let (location_x, longitude) = parse_coordinate("locationX", dto.location_x.as_ref())?;
    let (location_y, latitude) = parse_coordinate("locationY", dto.location_y.as_ref())?;

    Ok(Station::new(
        name,
        standard_name,
        id,
        location_x,
        location_y,
        Location {
            longitude,
            latitude,
        },
    ))
}

/// A direction is a line's destination label, not a station record.
fn convert_direction(dto: DirectionDto) -> Result<StationRef, MappingError> {
    let name = require("direction", "name", dto.name)?;
    Ok(StationRef::direction(name))
}

fn convert_event(
    record: &'static str,
    dto: ConnectionEventDto,
) -> Result<ConnectionEvent, MappingError> {
    let station = convert_station(require(record, "stationinfo", dto.stationinfo)?)?;
    let direction = convert_direction(require(record, "direction", dto.direction)?)?;
    let time = parse_epoch_seconds("time", &require(record, "time", dto.time)?)?;
    let delay = parse_duration_seconds("delay", &require(record, "delay", dto.delay)?)?;
    let vehicle = require(record, "vehicle", dto.vehicle)?;

    Ok(ConnectionEvent {
        station,
        platform: optional_text(dto.platform.as_ref()),
        time,
        delay,
        vehicle,
        direction,
    })
}

/// Convert one element of the `connection` array.
pub fn convert_connection(dto: ConnectionDto) -> Result<Connection, MappingError> {
    let id = parse_int("id", &require("connection", "id", dto.id)?)?;
    let departure = convert_event("departure", require("connection", "departure", dto.departure)?)?;
    let arrival = convert_event("arrival", require("connection", "arrival", dto.arrival)?)?;
    let duration = parse_duration_seconds(
        "duration",
        &require("connection", "duration", dto.duration)?,
    )?;

    Ok(Connection {
        id,
        departure: Departure(departure),
        arrival: Arrival(arrival),
        duration,
        vias: dto.vias,
    })
}
