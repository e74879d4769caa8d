//! iRail JSON response format.
//!
//! Responses flow through two steps:
//! - [`decode`] parses the body into a generic JSON tree and knows nothing
//!   about field meanings
//! - the mapper in `convert` walks the tree for one [`ResponseKind`] and
//!   builds domain types
//!
//! The whole pipeline is synchronous and pure, so it can be called from any
//! thread without coordination.
//!
//! Key characteristics of the iRail format:
//! - integers and timestamps are usually sent as strings
//! - timestamps are UNIX epoch seconds, delays and durations are seconds
//! - a connection's `direction` is a destination label, not a station

mod coerce;
mod convert;
mod decode;
mod types;

use std::fmt;
use std::str::FromStr;

use crate::domain::{ConnectionList, DynamicValue, StationList, UnsupportedShape};

pub use coerce::{
    parse_coordinate, parse_duration_seconds, parse_epoch_seconds, parse_int, parse_version,
};
pub use convert::{
    MappingError, convert_connection, convert_station, map_connections, map_liveboard,
    map_stations, map_vehicle,
};
pub use decode::{DecodeError, Document, decode, decode_document};
pub use types::{ConnectionDto, ConnectionEventDto, DirectionDto, StationDto, WireScalar};

/// Identifier sent as the `format` query parameter.
pub const FORMAT_ID: &str = "json";

/// Error turning a response body into a domain value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("mapping error: {0}")]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    UnsupportedShape(#[from] UnsupportedShape),
}

/// The four response shapes the API produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    Stations,
    Connections,
    Liveboard,
    Vehicle,
}

impl ResponseKind {
    pub const ALL: [ResponseKind; 4] = [
        ResponseKind::Stations,
        ResponseKind::Connections,
        ResponseKind::Liveboard,
        ResponseKind::Vehicle,
    ];

    /// API method path, e.g. `connections`.
    pub fn method(&self) -> &'static str {
        match self {
            ResponseKind::Stations => "stations",
            ResponseKind::Connections => "connections",
            ResponseKind::Liveboard => "liveboard",
            ResponseKind::Vehicle => "vehicle",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}

/// Error returned when parsing an unknown response kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown response kind: {0}")]
pub struct UnknownResponseKind(String);

impl FromStr for ResponseKind {
    type Err = UnknownResponseKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResponseKind::ALL
            .into_iter()
            .find(|k| k.method() == s)
            .ok_or_else(|| UnknownResponseKind(s.to_string()))
    }
}

/// A mapped response of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Stations(StationList),
    Connections(ConnectionList),
    Liveboard(DynamicValue),
    Vehicle(DynamicValue),
}

impl Response {
    /// Decode and map a body for the kind chosen by the caller.
    ///
    /// The shape is never guessed from the content.
    pub fn parse(kind: ResponseKind, body: &str) -> Result<Self, FormatError> {
        match kind {
            ResponseKind::Stations => parse_stations(body).map(Response::Stations),
            ResponseKind::Connections => parse_connections(body).map(Response::Connections),
            ResponseKind::Liveboard => parse_liveboard(body).map(Response::Liveboard),
            ResponseKind::Vehicle => parse_vehicle(body).map(Response::Vehicle),
        }
    }

    pub fn kind(&self) -> ResponseKind {
        match self {
            Response::Stations(_) => ResponseKind::Stations,
            Response::Connections(_) => ResponseKind::Connections,
            Response::Liveboard(_) => ResponseKind::Liveboard,
            Response::Vehicle(_) => ResponseKind::Vehicle,
        }
    }
}

pub fn parse_stations(body: &str) -> Result<StationList, FormatError> {
    map_stations(decode_document(body)?)
}

pub fn parse_connections(body: &str) -> Result<ConnectionList, FormatError> {
    map_connections(decode_document(body)?)
}

pub fn parse_liveboard(body: &str) -> Result<DynamicValue, FormatError> {
    map_liveboard(decode_document(body)?)
}

pub fn parse_vehicle(body: &str) -> Result<DynamicValue, FormatError> {
    map_vehicle(decode_document(body)?)
}
