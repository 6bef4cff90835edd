use std::time::{Duration, Instant};

use axum::http::StatusCode;
use reqwest::header::ACCEPT_ENCODING;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};
use transit_lens::{
    hsl::{
        self, Config,
        models::{GraphqlRequest, GraphqlResponse, StopTimesData, StopsByRadiusData},
    },
    model::{Departure, NearbyStop},
    shared::{Coordinate, Distance},
};

use crate::error::ApiError;

/// Posts the two queries the stats views need to the Digitransit endpoint.
pub struct HslClient {
    http: reqwest::Client,
    config: Config,
    api_key: Option<String>,
}

impl HslClient {
    pub fn new(config: Config, api_key: Option<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            config,
            api_key,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Raw edges within `radius`, in API order. Not deduplicated.
    pub async fn stops_by_radius(
        &self,
        coordinate: &Coordinate,
        radius: Distance,
    ) -> Result<Vec<NearbyStop>, ApiError> {
        let request = hsl::nearby_stops_request(coordinate, radius);
        let data: StopsByRadiusData = self.post(&request).await?;
        Ok(data.into_edges())
    }

    /// Every departure at `stop_id` for the service day starting at `service_day_start`.
    pub async fn departures(
        &self,
        stop_id: &str,
        service_day_start: i64,
    ) -> Result<Vec<Departure>, ApiError> {
        let request = hsl::stop_times_request(stop_id, service_day_start, &self.config);
        let data: StopTimesData = self.post(&request).await?;
        Ok(data.into_departures(stop_id)?)
    }

    async fn post<V, T>(&self, request: &GraphqlRequest<V>) -> Result<T, ApiError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let now = Instant::now();
        let mut builder = self
            .http
            .post(&self.config.endpoint)
            .header(ACCEPT_ENCODING, "gzip, deflate")
            .json(request);
        if let Some(api_key) = &self.api_key {
            builder = builder.header(self.config.api_key_header.as_str(), api_key);
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Response is not success ({status}): {body}");
            let status = StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
            return Err(ApiError::UpstreamStatus(status));
        }

        let envelope: GraphqlResponse<T> = response.json().await?;
        debug!("HSL query took {:?}", now.elapsed());
        Ok(envelope.into_data()?)
    }
}
