//! Domain types for iRail responses.
//!
//! Every type here is an immutable value built once by the mapper in
//! [`crate::format`]. Invariants (non-empty station ids, non-empty versions,
//! in-range timestamps) are enforced at construction, so code that receives
//! these types can trust them.

mod connection;
mod dynamic;
mod list;
mod station;
mod time;
mod version;

pub use connection::{Arrival, Connection, ConnectionEvent, Departure};
pub use dynamic::{DynamicRecord, DynamicValue, UnsupportedShape};
pub(crate) use dynamic::json_kind;
pub use list::{ConnectionList, ResultEnvelope, StationList};
pub use station::{Location, Station, StationRef};
pub use time::{EpochTime, Seconds};
pub use version::{InvalidVersion, Version};
