//! Optional query parameters for connection and liveboard requests.

use chrono::{NaiveDate, NaiveTime};

/// Whether a connection query's time is a departure or arrival time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSelection {
    Departure,
    Arrival,
}

impl TimeSelection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSelection::Departure => "departure",
            TimeSelection::Arrival => "arrival",
        }
    }
}

/// Which trains a connection query may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportTypes {
    Automatic,
    Trains,
    NoInternationalTrains,
    All,
}

impl TransportTypes {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportTypes::Automatic => "automatic",
            TransportTypes::Trains => "trains",
            TransportTypes::NoInternationalTrains => "nointernationaltrains",
            TransportTypes::All => "all",
        }
    }
}

/// Options for a connections request. Unset fields use the service default
/// (now, departing, automatic).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionQuery {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub time_selection: Option<TimeSelection>,
    pub transport_types: Option<TransportTypes>,
}

impl ConnectionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn at(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_time_selection(mut self, selection: TimeSelection) -> Self {
        self.time_selection = Some(selection);
        self
    }

    pub fn with_transport_types(mut self, types: TransportTypes) -> Self {
        self.transport_types = Some(types);
        self
    }

    /// Query string pairs for the set options.
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = date_time_params(self.date, self.time);
        if let Some(sel) = self.time_selection {
            params.push(("timesel", sel.as_str().to_string()));
        }
        if let Some(types) = self.transport_types {
            params.push(("typeOfTransport", types.as_str().to_string()));
        }
        params
    }
}

/// Options for a liveboard request. Unset fields mean "now".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveboardQuery {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl LiveboardQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn at(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        date_time_params(self.date, self.time)
    }
}

/// iRail expects `date=ddmmyy` and `time=HHMM`.
fn date_time_params(date: Option<NaiveDate>, time: Option<NaiveTime>) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(date) = date {
        params.push(("date", date.format("%d%m%y").to_string()));
    }
    if let Some(time) = time {
        params.push(("time", time.format("%H%M").to_string()));
    }
    params
}
