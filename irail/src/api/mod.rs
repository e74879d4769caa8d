//! iRail API client.
//!
//! This module provides an HTTP client for the iRail API
//! (`https://api.irail.be`), which serves Belgian railway data.
//!
//! Key characteristics of iRail:
//! - No credentials; clients identify themselves with a User-Agent
//! - Rate limited to a few requests per second per client
//! - Every method takes `format` and `lang` query parameters

mod client;
mod config;
mod error;
mod fixture;
mod query;

pub use client::IrailClient;
pub use config::{DEFAULT_BASE_URL, Format, InvalidOption, IrailConfig, Language};
pub use error::IrailError;
pub use fixture::FixtureClient;
pub use query::{ConnectionQuery, LiveboardQuery, TimeSelection, TransportTypes};
