//! Client for the iRail Belgian railway API.
//!
//! Fetches stations, connections, liveboards and vehicles, and maps the
//! service's string-typed JSON into typed domain values.

pub mod api;
pub mod domain;
pub mod format;

pub use api::{IrailClient, IrailConfig, IrailError};
