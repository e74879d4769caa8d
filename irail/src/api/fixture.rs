//! Fixture-backed client for working without network access.
//!
//! Loads recorded iRail responses from JSON files and serves them through
//! the same mapper as live responses.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::domain::{ConnectionList, DynamicValue, StationList};
use crate::format::{Response, ResponseKind};

use super::error::IrailError;

/// Client that serves recorded responses.
///
/// Request parameters are ignored: each kind has exactly one recorded
/// response.
#[derive(Debug, Clone)]
pub struct FixtureClient {
    responses: HashMap<ResponseKind, Response>,
}

impl FixtureClient {
    /// Load fixtures from a directory.
    ///
    /// Every `.json` file is named after the API method it records
    /// (`stations.json`, `connections.json`, `liveboard.json`,
    /// `vehicle.json`). Other files are ignored. At least one fixture must be
    /// present, and every fixture must decode and map cleanly.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, IrailError> {
        let dir = dir.as_ref();
        let mut bodies = Vec::new();

        let entries = std::fs::read_dir(dir).map_err(|e| IrailError::Fixture {
            message: format!("failed to read {}: {}", dir.display(), e),
        })?;

        for entry in entries {
            let path = entry
                .map_err(|e| IrailError::Fixture {
                    message: format!("failed to read entry in {}: {}", dir.display(), e),
                })?
                .path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            let kind: ResponseKind = stem.parse().map_err(|e| IrailError::Fixture {
                message: format!("{}: {}", path.display(), e),
            })?;

            let body = std::fs::read_to_string(&path).map_err(|e| IrailError::Fixture {
                message: format!("failed to read {}: {}", path.display(), e),
            })?;
            bodies.push((kind, body));
        }

        if bodies.is_empty() {
            return Err(IrailError::Fixture {
                message: format!("no fixture files found in {}", dir.display()),
            });
        }

        Self::from_bodies(bodies)
    }

    /// Build from in-memory bodies.
    pub fn from_bodies<I, S>(bodies: I) -> Result<Self, IrailError>
    where
        I: IntoIterator<Item = (ResponseKind, S)>,
        S: AsRef<str>,
    {
        let mut responses = HashMap::new();
        for (kind, body) in bodies {
            let response = Response::parse(kind, body.as_ref())?;
            debug!(%kind, "loaded fixture");
            responses.insert(kind, response);
        }
        Ok(Self { responses })
    }

    /// Response kinds that have a fixture.
    pub fn kinds(&self) -> impl Iterator<Item = ResponseKind> + '_ {
        self.responses.keys().copied()
    }

    fn response(&self, kind: ResponseKind) -> Result<&Response, IrailError> {
        self.responses.get(&kind).ok_or_else(|| IrailError::Fixture {
            message: format!("no fixture for {kind}"),
        })
    }

    pub fn get_stations(&self) -> Result<StationList, IrailError> {
        match self.response(ResponseKind::Stations)? {
            Response::Stations(list) => Ok(list.clone()),
            other => Err(mismatch(ResponseKind::Stations, other)),
        }
    }

    pub fn search_stations(&self, prefix: &str) -> Result<StationList, IrailError> {
        Ok(self.get_stations()?.search(prefix))
    }

    pub fn get_connections(&self) -> Result<ConnectionList, IrailError> {
        match self.response(ResponseKind::Connections)? {
            Response::Connections(list) => Ok(list.clone()),
            other => Err(mismatch(ResponseKind::Connections, other)),
        }
    }

    pub fn get_liveboard(&self) -> Result<DynamicValue, IrailError> {
        match self.response(ResponseKind::Liveboard)? {
            Response::Liveboard(board) => Ok(board.clone()),
            other => Err(mismatch(ResponseKind::Liveboard, other)),
        }
    }

    pub fn get_vehicle(&self) -> Result<DynamicValue, IrailError> {
        match self.response(ResponseKind::Vehicle)? {
            Response::Vehicle(vehicle) => Ok(vehicle.clone()),
            other => Err(mismatch(ResponseKind::Vehicle, other)),
        }
    }
}

fn mismatch(expected: ResponseKind, found: &Response) -> IrailError {
    IrailError::Fixture {
        message: format!("fixture for {expected} holds a {} response", found.kind()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const STATIONS: &str = r#"{
        "version": "1.1",
        "timestamp": "1581856899",
        "station": [
            {"id": "BE.NMBS.008813003", "locationX": "4.356801", "locationY": "50.845658",
             "standardname": "Brussel-Centraal/Bruxelles-Central", "name": "Brussels-Central"},
            {"id": "BE.NMBS.008812005", "locationX": "4.360846", "locationY": "50.859663",
             "standardname": "Brussel-Noord/Bruxelles-Nord", "name": "Brussels-North"},
            {"id": "BE.NMBS.008892007", "locationX": "3.710675", "locationY": "51.035896",
             "standardname": "Gent-Sint-Pieters", "name": "Ghent-Sint-Pieters"}
        ]
    }"#;

    const VEHICLE: &str = r#"{
        "version": "1.1",
        "timestamp": "1581856899",
        "vehicle": "BE.NMBS.IC1832",
        "vehicleinfo": {"name": "BE.NMBS.IC1832", "shortname": "IC1832"}
    }"#;

    #[test]
    fn load_from_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("stations.json"), STATIONS).unwrap();
        std::fs::write(dir.path().join("vehicle.json"), VEHICLE).unwrap();

        let client = FixtureClient::load(dir.path()).unwrap();

        assert_eq!(client.get_stations().unwrap().len(), 3);
        assert_eq!(
            client
                .get_vehicle()
                .unwrap()
                .get("shortname")
                .and_then(DynamicValue::as_str),
            Some("IC1832")
        );
        assert_eq!(client.kinds().count(), 2);
    }

    #[test]
    fn search_filters_fixture() {
        let client = FixtureClient::from_bodies([(ResponseKind::Stations, STATIONS)]).unwrap();
        let found = client.search_stations("brussels").unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn missing_kind_is_an_error() {
        let client = FixtureClient::from_bodies([(ResponseKind::Stations, STATIONS)]).unwrap();
        let err = client.get_connections().unwrap_err();
        assert_eq!(err.to_string(), "fixture error: no fixture for connections");
    }

    #[test]
    fn unknown_fixture_name_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("stations.json"), STATIONS).unwrap();
        std::fs::write(dir.path().join("trains.json"), STATIONS).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a fixture").unwrap();

        let err = FixtureClient::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("unknown response kind: trains"));
    }

    #[test]
    fn non_json_files_are_ignored() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("stations.json"), STATIONS).unwrap();
        std::fs::write(dir.path().join("README.md"), "# fixtures").unwrap();

        let client = FixtureClient::load(dir.path()).unwrap();
        assert_eq!(client.kinds().collect::<Vec<_>>(), vec![ResponseKind::Stations]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            FixtureClient::load(dir.path()),
            Err(IrailError::Fixture { .. })
        ));
    }

    #[test]
    fn invalid_fixture_fails_at_load() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("connections.json"), STATIONS).unwrap();

        let err = FixtureClient::load(dir.path()).unwrap_err();
        assert!(matches!(err, IrailError::Decode(_)));
    }
}
