//! List-shaped results and their envelope.

use super::connection::Connection;
use super::station::Station;
use super::time::EpochTime;
use super::version::Version;

/// Metadata wrapping every list-shaped response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEnvelope {
    /// When the service generated the response.
    pub timestamp: EpochTime,
    /// API version that produced the response.
    pub version: Version,
}

/// Stations in the order the service returned them.
#[derive(Debug, Clone, PartialEq)]
pub struct StationList {
    pub envelope: ResultEnvelope,
    stations: Vec<Station>,
}

impl StationList {
    pub fn new(envelope: ResultEnvelope, stations: Vec<Station>) -> Self {
        Self { envelope, stations }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Station> {
        self.stations.iter()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Keep only stations whose name starts with `prefix`, ignoring case.
    ///
    /// The envelope and relative order are preserved.
    pub fn search(self, prefix: &str) -> Self {
        let prefix = prefix.to_lowercase();
        let stations = self
            .stations
            .into_iter()
            .filter(|s| s.name().to_lowercase().starts_with(&prefix))
            .collect();
        Self {
            envelope: self.envelope,
            stations,
        }
    }

    /// First station whose name or standard name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Station> {
        self.stations
            .iter()
            .find(|s| s.name() == name || s.standard_name() == name)
    }

    /// Station with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id() == id)
    }
}

impl<'a> IntoIterator for &'a StationList {
    type Item = &'a Station;
    type IntoIter = std::slice::Iter<'a, Station>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.iter()
    }
}

impl IntoIterator for StationList {
    type Item = Station;
    type IntoIter = std::vec::IntoIter<Station>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.into_iter()
    }
}

/// Connections in the order the service returned them.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionList {
    pub envelope: ResultEnvelope,
    connections: Vec<Connection>,
}

impl ConnectionList {
    pub fn new(envelope: ResultEnvelope, connections: Vec<Connection>) -> Self {
        Self {
            envelope,
            connections,
        }
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Connection> {
        self.connections.iter()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

impl<'a> IntoIterator for &'a ConnectionList {
    type Item = &'a Connection;
    type IntoIter = std::slice::Iter<'a, Connection>;

    fn into_iter(self) -> Self::IntoIter {
        self.connections.iter()
    }
}

impl IntoIterator for ConnectionList {
    type Item = Connection;
    type IntoIter = std::vec::IntoIter<Connection>;

    fn into_iter(self) -> Self::IntoIter {
        self.connections.into_iter()
    }
}
