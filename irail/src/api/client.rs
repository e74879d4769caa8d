//! iRail HTTP client.
//!
//! Provides async methods for querying the iRail API. Builds request URLs,
//! maps HTTP status codes to errors, and hands response bodies to the
//! [`format`](crate::format) layer for conversion to domain types.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{ConnectionList, DynamicValue, Station, StationList};
use crate::format::{self, Response, ResponseKind};

use super::config::{Format, IrailConfig, Language};
use super::error::IrailError;
use super::query::{ConnectionQuery, LiveboardQuery};

/// iRail API client.
///
/// Cheap to clone; clones share the connection pool and the concurrency
/// limit. A semaphore bounds in-flight requests to stay under the service's
/// rate limit.
#[derive(Debug, Clone)]
pub struct IrailClient {
    http: reqwest::Client,
    base_url: String,
    language: Language,
    format: Format,
    semaphore: Arc<Semaphore>,
}

impl IrailClient {
    /// Create a new client with the given configuration.
    pub fn new(config: IrailConfig) -> Result<Self, IrailError> {
        if config.max_concurrent == 0 {
            return Err(IrailError::InvalidConfig(
                "max_concurrent must be at least 1".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&config.user_agent).map_err(|_| {
            IrailError::InvalidConfig(format!("invalid user agent: {:?}", config.user_agent))
        })?;
        headers.insert(USER_AGENT, agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language,
            format: config.format,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Retrieve the list of all stations.
    pub async fn get_stations(&self) -> Result<StationList, IrailError> {
        let body = self.fetch(ResponseKind::Stations, Vec::new()).await?;
        Ok(format::parse_stations(&body)?)
    }

    /// Retrieve the stations whose name starts with `prefix`, ignoring case.
    ///
    /// The full list is fetched and filtered locally.
    pub async fn search_stations(&self, prefix: &str) -> Result<StationList, IrailError> {
        Ok(self.get_stations().await?.search(prefix))
    }

    /// Get the connections between two stations given by name.
    pub async fn get_connections(
        &self,
        from: &str,
        to: &str,
        query: &ConnectionQuery,
    ) -> Result<ConnectionList, IrailError> {
        let mut params = vec![("from", from.to_string()), ("to", to.to_string())];
        params.extend(query.params());

        let body = self.fetch(ResponseKind::Connections, params).await?;
        Ok(format::parse_connections(&body)?)
    }

    /// Get the connections between two stations.
    pub async fn get_connections_between(
        &self,
        from: &Station,
        to: &Station,
        query: &ConnectionQuery,
    ) -> Result<ConnectionList, IrailError> {
        self.get_connections(from.name(), to.name(), query).await
    }

    /// Get the live departure board for a station given by name.
    pub async fn get_liveboard_by_name(
        &self,
        name: &str,
        query: &LiveboardQuery,
    ) -> Result<DynamicValue, IrailError> {
        let mut params = vec![("station", name.to_string())];
        params.extend(query.params());

        let body = self.fetch(ResponseKind::Liveboard, params).await?;
        Ok(format::parse_liveboard(&body)?)
    }

    /// Get the live departure board for a station given by id.
    pub async fn get_liveboard_by_id(
        &self,
        station_id: &str,
        query: &LiveboardQuery,
    ) -> Result<DynamicValue, IrailError> {
        let mut params = vec![("id", station_id.to_string())];
        params.extend(query.params());

        let body = self.fetch(ResponseKind::Liveboard, params).await?;
        Ok(format::parse_liveboard(&body)?)
    }

    /// Get details for a vehicle, e.g. `BE.NMBS.IC1832`.
    pub async fn get_vehicle(&self, vehicle_id: &str) -> Result<DynamicValue, IrailError> {
        let body = self
            .fetch(ResponseKind::Vehicle, vec![("id", vehicle_id.to_string())])
            .await?;
        Ok(format::parse_vehicle(&body)?)
    }

    /// Issue a request for any kind with raw query parameters.
    pub async fn request(
        &self,
        kind: ResponseKind,
        params: &[(&'static str, &str)],
    ) -> Result<Response, IrailError> {
        let params = params.iter().map(|(k, v)| (*k, v.to_string())).collect();
        let body = self.fetch(kind, params).await?;
        Ok(Response::parse(kind, &body)?)
    }

    /// URL for an API method, without query parameters.
    pub fn method_url(&self, kind: ResponseKind) -> String {
        format!("{}/{}/", self.base_url, kind.method())
    }

    /// Fetch a raw response body.
    async fn fetch(
        &self,
        kind: ResponseKind,
        params: Vec<(&'static str, String)>,
    ) -> Result<String, IrailError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| IrailError::InvalidConfig("request limiter closed".to_string()))?;

        let url = self.method_url(kind);

        let mut query = Vec::with_capacity(params.len() + 2);
        query.push(("format", self.format.as_str().to_string()));
        query.push(("lang", self.language.as_str().to_string()));
        query.extend(params);

        debug!(%url, ?query, "iRail request");

        let response = self.http.get(&url).query(&query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), %kind, "iRail request failed");
            return Err(IrailError::from_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), %kind, "iRail response");

        Ok(body)
    }
}
